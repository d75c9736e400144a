use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// QueryCounters
/// Ephemeral, in-memory counters for query execution on the current thread.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct QueryCounters {
    // Entrypoints
    pub queries: u64,
    pub rejected: u64,

    // Rows
    pub rows_scanned: u64,
    pub rows_matched: u64,
    pub rows_returned: u64,

    // Pagination
    pub pages_with_continuation: u64,
    pub cursor_fallbacks: u64,
}

thread_local! {
    static QUERY_COUNTERS: RefCell<QueryCounters> = RefCell::new(QueryCounters::default());
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut QueryCounters) -> R) -> R {
    QUERY_COUNTERS.with(|m| f(&mut m.borrow_mut()))
}

/// Clone the current counters.
pub(crate) fn snapshot() -> QueryCounters {
    QUERY_COUNTERS.with(|m| m.borrow().clone())
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = QueryCounters::default());
}
