//! Module: cursor
//! Responsibility: opaque continuation cursors anchored to a
//! `(sort value, record id)` pair, and the strict "after" test used on resume.
//! Does not own: page slicing (see `executor`).

mod budget;
mod hex;
mod token;


pub use budget::TokenBudget;
pub use hex::CursorTextError;
pub use token::ContinuationTokenError;

use crate::{
    db::{
        cursor::{
            hex::{from_hex, to_hex},
            token::ContinuationToken,
        },
        order::{OrderKey, SortField, SortValue, anchor_key, order_key},
    },
    error::InternalError,
    model::{building::Building, rating::RatingScale},
};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// CursorError
///
/// Why a cursor token could not be used. Never surfaced to callers of the
/// query pipeline; it only explains a restart from the first page.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum CursorError {
    #[error(transparent)]
    Token(#[from] CursorTextError),

    #[error(transparent)]
    Payload(#[from] ContinuationTokenError),

    #[error("cursor was minted for sort field '{found}', query sorts by '{expected}'")]
    SortFieldMismatch {
        expected: SortField,
        found: SortField,
    },
}

///
/// CursorAnchor
///
/// Last-seen `(sort value, id)` pair a continuation resumes after.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CursorAnchor {
    pub sort_value: SortValue,
    pub id: String,
}

impl CursorAnchor {
    #[must_use]
    pub const fn new(sort_value: SortValue, id: String) -> Self {
        Self { sort_value, id }
    }

    // Resolve this anchor against the order of `field`.
    // `None` means the stored value cannot belong to that field.
    pub(crate) fn resolve<'a>(
        &'a self,
        field: SortField,
        scale: &'a RatingScale,
    ) -> Option<ResolvedAnchor<'a>> {
        let key = anchor_key(&self.sort_value, field, scale)?;

        Some(ResolvedAnchor {
            key,
            id: &self.id,
            field,
            scale,
        })
    }
}

///
/// ResolvedAnchor
///
/// Anchor projected onto the same order key records are sorted by.
///

pub(crate) struct ResolvedAnchor<'a> {
    key: OrderKey<'a>,
    id: &'a str,
    field: SortField,
    scale: &'a RatingScale,
}

impl ResolvedAnchor<'_> {
    /// Whether `building` orders strictly after the anchor: its primary value
    /// is past the anchor's, or equal with a greater id.
    pub(crate) fn is_passed_by(&self, building: &Building) -> bool {
        let ordering = order_key(building, self.field, self.scale)
            .cmp(&self.key)
            .then_with(|| building.id.as_str().cmp(self.id));

        ordering == Ordering::Greater
    }
}

/// Encode an opaque, URL-safe cursor for `(value, id)` under `field`.
///
/// Fails when the payload would not fit `budget`, since a query holding
/// that budget could never read the cursor back.
pub fn encode_cursor(
    field: SortField,
    value: &SortValue,
    id: &str,
    budget: TokenBudget,
) -> Result<String, InternalError> {
    let token = ContinuationToken::new(field, value.clone(), id.to_string());
    let bytes = token.encode().map_err(|err| {
        InternalError::serialize_internal(format!("cursor encode failed: {err}"))
    })?;

    if bytes.len() > budget.payload_bytes() {
        return Err(InternalError::serialize_internal(format!(
            "cursor payload is {} bytes; budget is {}",
            bytes.len(),
            budget.payload_bytes()
        )));
    }

    Ok(to_hex(&bytes))
}

/// Decode a cursor minted for `field`, reporting why it is unusable.
pub fn try_decode_cursor(
    token: &str,
    field: SortField,
    budget: TokenBudget,
) -> Result<CursorAnchor, CursorError> {
    let bytes = from_hex(token, budget.text_len())?;
    let token = ContinuationToken::decode(&bytes, budget.payload_bytes())?;

    if token.sort_field() != field {
        return Err(CursorError::SortFieldMismatch {
            expected: field,
            found: token.sort_field(),
        });
    }

    let (sort_value, id) = token.into_parts();

    Ok(CursorAnchor::new(sort_value, id))
}

/// Decode a cursor minted for `field`.
///
/// Malformed, foreign, oversized or stale tokens yield `None`, which callers
/// treat as "resume from the start".
#[must_use]
pub fn decode_cursor(token: &str, field: SortField, budget: TokenBudget) -> Option<CursorAnchor> {
    match try_decode_cursor(token, field, budget) {
        Ok(anchor) => Some(anchor),
        Err(err) => {
            tracing::debug!(error = %err, sort = %field, "ignoring unusable cursor");
            None
        }
    }
}
