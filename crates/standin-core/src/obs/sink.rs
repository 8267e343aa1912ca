//! Metrics sink boundary.
//!
//! Resolution and registry code MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// ResolveKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolveKind {
    Relation,
    NullObject,
    Scalar,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Resolved {
        kind: ResolveKind,
        entity_path: &'static str,
    },
    Declined {
        entity_path: &'static str,
    },
    Undefined {
        entity_path: &'static str,
    },
    TypeDefined {
        entity_path: &'static str,
        nested: bool,
    },
    TypeReused {
        entity_path: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::Resolved { kind, entity_path } => {
                let slot = match kind {
                    ResolveKind::Relation => &mut m.ops.relations,
                    ResolveKind::NullObject => &mut m.ops.null_objects,
                    ResolveKind::Scalar => &mut m.ops.scalars,
                };
                *slot = slot.saturating_add(1);
                metrics::bump_entity(m, entity_path, |e| &mut e.resolutions);
            }

            MetricsEvent::Declined { entity_path } => {
                m.ops.declines = m.ops.declines.saturating_add(1);
                metrics::bump_entity(m, entity_path, |e| &mut e.declines);
            }

            MetricsEvent::Undefined { entity_path } => {
                m.ops.undefined = m.ops.undefined.saturating_add(1);
                metrics::bump_entity(m, entity_path, |e| &mut e.undefined);
            }

            MetricsEvent::TypeDefined {
                entity_path,
                nested,
            } => {
                m.ops.types_defined = m.ops.types_defined.saturating_add(1);
                if nested {
                    m.ops.nested_types_defined = m.ops.nested_types_defined.saturating_add(1);
                }
                metrics::bump_entity(m, entity_path, |e| &mut e.types_defined);
            }

            MetricsEvent::TypeReused { .. } => {
                m.ops.types_reused = m.ops.types_reused.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // Preconditions:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`.
        // - `with_metrics_sink` always restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        //
        // Aliasing:
        // - Only a shared reference is materialized, matching the shared borrow
        //   used to install the override.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset the current thread's counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with every event on this thread routed to `sink`.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // Preconditions:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` always restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    //
    // What would break this:
    // - Any async/deferred use of `sink_ptr` beyond this scope.
    // - Any path that bypasses Guard restoration.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}
