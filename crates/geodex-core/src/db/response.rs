//! Module: response
//! Responsibility: result payload handed to the transport collaborator.
//! Does not own: query execution or the cursor token protocol.

use crate::{db::aggregate::Aggregations, model::building::Building};
use serde::{Deserialize, Serialize};

///
/// Pagination
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub next_cursor: Option<String>,
    pub total_count: u64,
}

///
/// QueryResponse
///
/// One page of records plus the continuation cursor, the total matching
/// count, and aggregations over the full matching set.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct QueryResponse {
    pub data: Vec<Building>,
    pub pagination: Pagination,
    pub aggregations: Aggregations,
}

impl QueryResponse {
    /// Borrow the optional continuation cursor.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.pagination.next_cursor.as_deref()
    }

    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.pagination.total_count
    }
}
