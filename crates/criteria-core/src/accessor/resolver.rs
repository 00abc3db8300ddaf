use crate::{
    accessor::{AccessorId, AccessorIntrospect, AccessorKind, FieldDescriptor, derive_field_name},
    error::{ResolveError, UnsupportedReason},
    obs::{MetricsSink, ResolveEvent, ResolverMetrics, ResolverReport},
};
use dashmap::DashMap;
use std::{fmt, sync::Arc};
use tracing::{debug, warn};

///
/// FieldResolver
///
/// Memoizing accessor → field resolver.
///
/// Construct one per process (or per test) and pass it by reference to the
/// builders that need typed paths. The cache is keyed by accessor identity
/// and only ever grows until `clear` is called; failures are never cached.
/// Concurrent first resolutions of the same accessor converge on one entry.
///

#[derive(Default)]
pub struct FieldResolver {
    cache: DashMap<AccessorId, FieldDescriptor>,
    metrics: ResolverMetrics,
    sink: Option<Arc<dyn MetricsSink>>,
}

impl FieldResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that also forwards every event to `sink`.
    #[must_use]
    pub fn with_sink(sink: Arc<dyn MetricsSink>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::default()
        }
    }

    /// Resolve an accessor to the field it reads or writes.
    pub fn resolve<A>(&self, accessor: &'static A) -> Result<FieldDescriptor, ResolveError>
    where
        A: AccessorIntrospect + ?Sized,
    {
        let id = accessor.identity();
        let entity_path = accessor.declaring_entity().path;

        if let Some(cached) = self.cache.get(&id) {
            let descriptor = *cached;
            drop(cached);
            self.record(ResolveEvent::Hit { entity_path });

            return Ok(descriptor);
        }

        let mut computed = false;
        let entry = self.cache.entry(id).or_try_insert_with(|| {
            computed = true;
            resolve_uncached(accessor)
        });

        match entry {
            Ok(slot) => {
                let descriptor = *slot;
                drop(slot);

                if computed {
                    debug!(
                        entity = descriptor.entity_path,
                        method = descriptor.method,
                        field = descriptor.name,
                        "resolved accessor"
                    );
                    self.record(ResolveEvent::Miss { entity_path });
                } else {
                    self.record(ResolveEvent::Hit { entity_path });
                }

                Ok(descriptor)
            }
            Err(err) => {
                warn!(entity = entity_path, error = %err, "accessor resolution failed");
                self.record(ResolveEvent::Failure {
                    entity_path,
                    class: err.class(),
                });

                Err(err)
            }
        }
    }

    /// Resolve an accessor and return only the field name.
    pub fn resolve_name<A>(&self, accessor: &'static A) -> Result<&'static str, ResolveError>
    where
        A: AccessorIntrospect + ?Sized,
    {
        self.resolve(accessor).map(|descriptor| descriptor.name)
    }

    /// Resolve a batch of accessors in order, stopping at the first failure.
    pub fn resolve_all(
        &self,
        accessors: &[&'static dyn AccessorIntrospect],
    ) -> Result<Vec<FieldDescriptor>, ResolveError> {
        accessors
            .iter()
            .map(|accessor| self.resolve(*accessor))
            .collect()
    }

    /// Whether this exact accessor instance has a cached descriptor.
    #[must_use]
    pub fn is_cached<A>(&self, accessor: &'static A) -> bool
    where
        A: AccessorIntrospect + ?Sized,
    {
        self.cache.contains_key(&accessor.identity())
    }

    /// Number of cached descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every cached descriptor. Counters are kept.
    pub fn clear(&self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn metrics(&self) -> ResolverReport {
        self.metrics.report()
    }

    fn record(&self, event: ResolveEvent) {
        self.metrics.record(event);
        if let Some(sink) = &self.sink {
            sink.record(event);
        }
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldResolver")
            .field("cached", &self.cache.len())
            .field("metrics", &self.metrics.report())
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

// resolve_uncached
fn resolve_uncached<A>(accessor: &A) -> Result<FieldDescriptor, ResolveError>
where
    A: AccessorIntrospect + ?Sized,
{
    let entity = accessor.declaring_entity();
    let method = accessor.impl_method_name();

    let unsupported = |reason| ResolveError::UnsupportedAccessorKind {
        entity: entity.path,
        method,
        reason,
    };

    if accessor.kind() == AccessorKind::Inline {
        return Err(unsupported(UnsupportedReason::InlineClosure));
    }

    let name = derive_field_name(method).map_err(unsupported)?;
    let field = entity
        .field(&name)
        .ok_or_else(|| ResolveError::FieldNotFound {
            entity: entity.path,
            field: name,
            method,
        })?;

    Ok(FieldDescriptor {
        entity_path: entity.path,
        entity_name: entity.entity_name,
        name: field.name,
        cardinality: field.cardinality,
        method,
    })
}
