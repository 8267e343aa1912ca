use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for the current thread.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub entities: BTreeMap<String, EntityCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventOps {
    // Resolutions by outcome
    pub relations: u64,
    pub null_objects: u64,
    pub scalars: u64,
    pub declines: u64,

    // Dispatch failures
    pub undefined: u64,

    // Registry
    pub types_defined: u64,
    pub nested_types_defined: u64,
    pub types_reused: u64,
}

impl EventOps {
    #[must_use]
    pub const fn resolutions(&self) -> u64 {
        self.relations
            .saturating_add(self.null_objects)
            .saturating_add(self.scalars)
    }
}

///
/// EntityCounters
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EntityCounters {
    pub resolutions: u64,
    pub declines: u64,
    pub undefined: u64,
    pub types_defined: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Bump one per-entity counter.
pub(crate) fn bump_entity(
    m: &mut EventState,
    entity_path: &str,
    field: impl FnOnce(&mut EntityCounters) -> &mut u64,
) {
    let entry = m.entities.entry(entity_path.to_string()).or_default();
    let slot = field(entry);
    *slot = slot.saturating_add(1);
}

///
/// EventReport
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    /// Per-entity counters, busiest first.
    pub entity_counters: Vec<EntitySummary>,
}

///
/// EntitySummary
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EntitySummary {
    pub path: String,
    pub resolutions: u64,
    pub declines: u64,
    pub undefined: u64,
    pub types_defined: u64,
    pub decline_ratio: f64,
}

/// Build a report from the current thread's counters.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub(crate) fn report() -> EventReport {
    let snap = with_state(Clone::clone);

    let mut entity_counters: Vec<EntitySummary> = snap
        .entities
        .iter()
        .map(|(path, c)| {
            let attempts = c.resolutions.saturating_add(c.declines);
            let decline_ratio = if attempts > 0 {
                c.declines as f64 / attempts as f64
            } else {
                0.0
            };

            EntitySummary {
                path: path.clone(),
                resolutions: c.resolutions,
                declines: c.declines,
                undefined: c.undefined,
                types_defined: c.types_defined,
                decline_ratio,
            }
        })
        .collect();

    // busiest first, then path for a stable order
    entity_counters.sort_by(|a, b| {
        let a_total = a.resolutions.saturating_add(a.declines);
        let b_total = b.resolutions.saturating_add(b.declines);
        b_total.cmp(&a_total).then_with(|| a.path.cmp(&b.path))
    });

    EventReport {
        ops: snap.ops,
        entity_counters,
    }
}

///
/// TESTS
///
