//! Raw query-string input to [`QueryParams`].
//!
//! Parsing is lenient: anything it cannot read is treated as absent and left
//! for validation to judge. The first occurrence of a key wins.

use geodex_core::{db::QueryParams, prelude::BoundingBox};
use std::{borrow::Cow, collections::BTreeSet};

/// Build parameters from decoded key/value pairs.
#[must_use]
pub fn parse_query_pairs<'a, I>(pairs: I) -> QueryParams
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut params = QueryParams::new();
    let mut seen = BTreeSet::new();

    for (key, value) in pairs {
        if !seen.insert(key) {
            continue;
        }

        match key {
            "usage" => params.usage = split_usage(value),
            "dpeMin" => params.dpe_min = non_empty(value),
            "dpeMax" => params.dpe_max = non_empty(value),
            "search" => params.search = non_empty(value),
            "cursor" => params.cursor = non_empty(value),
            "sort" => params.sort = non_empty(value),
            "bbox" => {
                params.bbox = BoundingBox::parse(value);
                if params.bbox.is_none() && !value.is_empty() {
                    tracing::debug!(bbox = value, "unparseable bbox ignored");
                }
            }
            "limit" => params.limit = parse_limit(value),
            _ => {}
        }
    }

    params
}

/// Build parameters from a raw, percent-encoded query string.
/// A leading `?` is accepted and `+` decodes to a space.
#[must_use]
pub fn parse_query_string(query: &str) -> QueryParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let decoded: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key).into_owned(), decode(value).into_owned())
        })
        .collect();

    parse_query_pairs(decoded.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn split_usage(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|usage| !usage.is_empty())
        .map(str::to_string)
        .collect()
}

// Leading decimal integer: optional sign, then the digits that follow it.
// Trailing text is ignored. Negative limits saturate to zero, which the
// engine clamps up to one.
fn parse_limit(value: &str) -> Option<u32> {
    let text = value.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }

    Some(rest[..digits].parse().unwrap_or(u32::MAX))
}

fn decode(component: &str) -> Cow<'_, str> {
    let spaced = if component.contains('+') {
        Cow::Owned(component.replace('+', " "))
    } else {
        Cow::Borrowed(component)
    };

    let unescaped = match urlencoding::decode_binary(spaced.as_bytes()) {
        Cow::Borrowed(_) => None,
        Cow::Owned(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
    };

    unescaped.map_or(spaced, Cow::Owned)
}

///
/// TESTS
///
