//! Metrics sink boundary.
//!
//! Core query logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics::{self, QueryCounters};
use std::cell::Cell;

thread_local! {
    static SINK_OVERRIDE: Cell<Option<&'static dyn MetricsSink>> = const { Cell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    QueryStart,
    QueryRejected,
    RowsScanned { rows: u64 },
    RowsMatched { rows: u64 },
    PageEmitted { rows: u64, has_more: bool },
    CursorFallback,
}

///
/// MetricsSink
///

pub trait MetricsSink: Sync {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the global counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::QueryStart => m.queries = m.queries.saturating_add(1),
            MetricsEvent::QueryRejected => m.rejected = m.rejected.saturating_add(1),
            MetricsEvent::RowsScanned { rows } => {
                m.rows_scanned = m.rows_scanned.saturating_add(rows);
            }
            MetricsEvent::RowsMatched { rows } => {
                m.rows_matched = m.rows_matched.saturating_add(rows);
            }
            MetricsEvent::PageEmitted { rows, has_more } => {
                m.rows_returned = m.rows_returned.saturating_add(rows);
                if has_more {
                    m.pages_with_continuation = m.pages_with_continuation.saturating_add(1);
                }
            }
            MetricsEvent::CursorFallback => {
                m.cursor_fallbacks = m.cursor_fallbacks.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    match SINK_OVERRIDE.with(Cell::get) {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's query counters.
#[must_use]
pub fn metrics_report() -> QueryCounters {
    metrics::snapshot()
}

/// Reset the current thread's query counters.
pub fn metrics_reset_all() {
    metrics::reset();
}

/// Run a closure with a temporary metrics sink override.
pub(crate) fn with_metrics_sink<T>(sink: &'static dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<&'static dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| cell.set(self.0));
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.replace(Some(sink)));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
