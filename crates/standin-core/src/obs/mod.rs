//! Observability: resolution counters and the sink they flow through.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EntityCounters, EntitySummary, EventOps, EventReport};
pub use sink::{
    MetricsEvent, MetricsSink, ResolveKind, metrics_report, metrics_reset_all, with_metrics_sink,
};
