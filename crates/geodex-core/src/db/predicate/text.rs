use std::borrow::Cow;

// Case-fold text for case-insensitive comparison.
// ASCII takes the cheap path; other input falls back to Unicode lowercase.
pub(crate) fn casefold(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        if input.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Owned(input.to_ascii_lowercase());
        }
        return Cow::Borrowed(input);
    }

    Cow::Owned(input.to_lowercase())
}

/// Case-insensitive substring check; `needle` must already be case-folded.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    casefold(haystack).contains(needle)
}

///
/// TESTS
///
