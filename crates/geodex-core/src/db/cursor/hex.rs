use thiserror::Error as ThisError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

///
/// CursorTextError
///
/// Why a cursor string is not a hex rendering of any payload.
/// Positions are zero-based byte offsets into the trimmed text.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum CursorTextError {
    #[error("cursor is empty")]
    Empty,

    #[error("cursor is {len} characters long; this query accepts at most {max}")]
    TooLong { len: usize, max: usize },

    #[error("cursor character at offset {position} is not a hex digit")]
    NotHex { position: usize },

    #[error("cursor ends on half a byte")]
    OddLength,
}

// Lowercase hex, two characters per byte.
pub(super) fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|byte| [DIGITS[usize::from(byte >> 4)], DIGITS[usize::from(byte & 0x0f)]])
        .map(char::from)
        .collect()
}

// Inverse of `to_hex`. Surrounding whitespace is ignored, and text longer
// than `max_len` is refused before any byte is decoded.
pub(super) fn from_hex(text: &str, max_len: usize) -> Result<Vec<u8>, CursorTextError> {
    let text = text.trim().as_bytes();
    if text.is_empty() {
        return Err(CursorTextError::Empty);
    }
    if text.len() > max_len {
        return Err(CursorTextError::TooLong {
            len: text.len(),
            max: max_len,
        });
    }
    if let Some(position) = text.iter().position(|byte| !byte.is_ascii_hexdigit()) {
        return Err(CursorTextError::NotHex { position });
    }
    if !text.len().is_multiple_of(2) {
        return Err(CursorTextError::OddLength);
    }

    Ok(text
        .chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect())
}

// Caller has already checked `digit` is ASCII hex.
const fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit.to_ascii_lowercase() - b'a' + 10,
    }
}

///
/// TESTS
///
