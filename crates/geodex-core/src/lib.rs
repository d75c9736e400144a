//! Core runtime for Geodex: building records, the rating scale, the filter,
//! aggregate, order and cursor pipeline, and the observability hooks exported
//! through the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod obs;
pub mod serialize;
pub mod traits;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Page size applied when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a caller may request; larger requests are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, executors, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{
            order::{SortField, SortValue},
            predicate::BoundingBox,
            query::QueryParams,
        },
        model::{
            building::Building,
            rating::{Rating, RatingScale},
        },
        traits::RecordSource,
    };
}
