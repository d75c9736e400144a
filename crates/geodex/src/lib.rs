//! ## Crate layout
//! - `core`: building model, rating scale, and the query pipeline.
//! - `dataset`: loading a record source from JSON.
//! - `params`: turning raw query-string input into `QueryParams`.
//! - `error`: the public error type handed to transports.
//!
//! The `prelude` module mirrors what a transport needs to answer one query.

pub use geodex_core as core;

pub mod dataset;
pub mod error;
pub mod params;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, ErrorKind};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        core::{
            config::QueryConfig,
            db::{QueryEngine, QueryResponse, StaticDataset},
            prelude::*,
        },
        dataset,
        error::{Error, ErrorKind},
        params::{parse_query_pairs, parse_query_string},
    };
}
