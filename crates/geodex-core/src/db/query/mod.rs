//! Module: query
//! Responsibility: caller-facing query input, fail-fast validation, and the
//! public error surface of the pipeline.

mod params;
mod validate;

pub use params::QueryParams;
pub use validate::validate;

use crate::{
    db::{
        order::SortField,
        predicate::{BoundingBox, BoundingBoxError, RatingRange},
    },
    error::InternalError,
};
use thiserror::Error as ThisError;

/// Message reported to transports for any non-validation failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

///
/// ValidatedQuery
///
/// Typed query produced by [`validate`]: rating bounds resolved against the
/// scale, sort field parsed, and page size clamped.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedQuery {
    pub usage: Vec<String>,
    pub rating: RatingRange,
    pub search: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub sort: SortField,
    pub page_size: usize,
    pub cursor: Option<String>,
}

///
/// ValidationError
///
/// Invalid caller input. Reported before any filtering runs; never corrected.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("Invalid {param}: {value}. Must be one of: {allowed}")]
    InvalidRatingBound {
        param: &'static str,
        value: String,
        allowed: String,
    },

    #[error("Invalid sort: {value}. Must be one of: {allowed}")]
    InvalidSortField { value: String, allowed: String },

    #[error(transparent)]
    InvalidBoundingBox(#[from] BoundingBoxError),
}

///
/// QueryError
///
/// Public pipeline failure: either a bad request (with a human-readable
/// reason) or an internal failure whose detail is not meant for callers.
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl QueryError {
    /// Whether the failure was caused by caller input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Message safe to hand back to a caller; internal detail is withheld.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
