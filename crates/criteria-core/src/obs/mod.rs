//! Observability: resolver telemetry and the sink abstraction.
//!
//! Nothing here affects resolution results; sinks only observe.

pub(crate) mod sink;

// re-exports
pub use sink::{MetricsSink, ResolveEvent, ResolverMetrics, ResolverReport};
