//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! Query logic records events through `sink::record`; it never reads metrics
//! back, so telemetry cannot influence results.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::QueryCounters;
pub use sink::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all};
