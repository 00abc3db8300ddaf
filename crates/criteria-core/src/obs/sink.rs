//! Metrics sink boundary.
//!
//! Resolver logic MUST NOT touch counters directly.
//! All instrumentation flows through ResolveEvent and MetricsSink.
use crate::error::ErrorClass;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

///
/// ResolveEvent
///

#[derive(Clone, Copy, Debug)]
pub enum ResolveEvent {
    /// Descriptor served from the cache.
    Hit { entity_path: &'static str },
    /// Descriptor computed and inserted.
    Miss { entity_path: &'static str },
    /// Resolution failed; nothing was cached.
    Failure {
        entity_path: &'static str,
        class: ErrorClass,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink: Send + Sync {
    fn record(&self, event: ResolveEvent);
}

///
/// ResolverMetrics
/// Lock-free counters owned by each resolver.
///

#[derive(Debug, Default)]
pub struct ResolverMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    failures: AtomicU64,
}

impl ResolverMetrics {
    #[must_use]
    pub fn report(&self) -> ResolverReport {
        ResolverReport {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

impl MetricsSink for ResolverMetrics {
    fn record(&self, event: ResolveEvent) {
        let counter = match event {
            ResolveEvent::Hit { .. } => &self.hits,
            ResolveEvent::Miss { .. } => &self.misses,
            ResolveEvent::Failure { .. } => &self.failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

///
/// ResolverReport
/// Point-in-time snapshot of resolver counters.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ResolverReport {
    pub hits: u64,
    pub misses: u64,
    pub failures: u64,
}

impl ResolverReport {
    /// Total resolve calls observed.
    #[must_use]
    pub const fn calls(&self) -> u64 {
        self.hits
            .saturating_add(self.misses)
            .saturating_add(self.failures)
    }
}
