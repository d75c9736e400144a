use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

const LNG_RANGE: (f64, f64) = (-180.0, 180.0);
const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

///
/// BoundingBoxError
///
/// Logical (not syntactic) bounding-box violations.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum BoundingBoxError {
    #[error("Invalid bbox: coordinates must be numbers")]
    NotANumber,

    #[error("Invalid bbox: min values must not exceed max values")]
    Inverted,

    #[error("Invalid bbox: coordinates out of valid range")]
    OutOfRange,
}

///
/// BoundingBox
///
/// Inclusive geographic rectangle in degrees.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// Parse `minLng,minLat,maxLng,maxLat`.
    ///
    /// Each part is read up to its longest numeric prefix, so `2.2km` reads
    /// as `2.2`. A part with no leading number, or a count other than four,
    /// yields `None` (no box filter); a box that parses but is logically
    /// invalid is reported later by [`Self::validate`].
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut coords = [0.0_f64; 4];
        let mut parts = input.split(',');

        for slot in &mut coords {
            *slot = leading_float(parts.next()?)?;
        }
        if parts.next().is_some() {
            return None;
        }

        let [min_lng, min_lat, max_lng, max_lat] = coords;

        Some(Self::new(min_lng, min_lat, max_lng, max_lat))
    }

    /// Check axis ordering first, then coordinate ranges.
    /// Zero-width boxes are valid.
    pub fn validate(&self) -> Result<(), BoundingBoxError> {
        let coords = [self.min_lng, self.min_lat, self.max_lng, self.max_lat];
        if coords.iter().any(|c| c.is_nan()) {
            return Err(BoundingBoxError::NotANumber);
        }

        if self.min_lng > self.max_lng || self.min_lat > self.max_lat {
            return Err(BoundingBoxError::Inverted);
        }

        if self.min_lng < LNG_RANGE.0
            || self.max_lng > LNG_RANGE.1
            || self.min_lat < LAT_RANGE.0
            || self.max_lat > LAT_RANGE.1
        {
            return Err(BoundingBoxError::OutOfRange);
        }

        Ok(())
    }

    /// Inclusive containment on both axes.
    #[must_use]
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        (self.min_lng..=self.max_lng).contains(&lng) && (self.min_lat..=self.max_lat).contains(&lat)
    }
}

// Longest numeric prefix after leading whitespace: an optional sign, then
// `Infinity` or a decimal with an optional exponent. Never yields NaN.
fn leading_float(text: &str) -> Option<f64> {
    const INFINITY: &str = "Infinity";

    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with(INFINITY) {
        return text[..end + INFINITY.len()].parse().ok();
    }

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    // an exponent counts only when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digit_run(bytes.get(end + 1 + sign..).unwrap_or_default());
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

///
/// TESTS
///
