//! Process-local enrichment counters.
//!
//! The degrade policies in `enrich` are deliberately silent on the wire;
//! these counters are the only place a dropped file field or a degraded
//! display name is visible. Counters are thread-local and saturating.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<EnrichMetrics> = RefCell::new(EnrichMetrics::default());
}

///
/// EnrichMetrics
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnrichMetrics {
    pub enrichments: u64,
    pub managed_enrichments: u64,
    pub names_degraded: u64,
    pub file_values_resolved: u64,
    pub file_values_absent: u64,
    pub file_values_dropped: u64,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum MetricsEvent {
    Enriched { managed: bool },
    NameDegraded,
    FileValueResolved,
    FileValueAbsent,
    FileValueDropped,
}

pub(crate) fn record(event: MetricsEvent) {
    with_state_mut(|m| match event {
        MetricsEvent::Enriched { managed } => {
            m.enrichments = m.enrichments.saturating_add(1);
            if managed {
                m.managed_enrichments = m.managed_enrichments.saturating_add(1);
            }
        }
        MetricsEvent::NameDegraded => {
            m.names_degraded = m.names_degraded.saturating_add(1);
        }
        MetricsEvent::FileValueResolved => {
            m.file_values_resolved = m.file_values_resolved.saturating_add(1);
        }
        MetricsEvent::FileValueAbsent => {
            m.file_values_absent = m.file_values_absent.saturating_add(1);
        }
        MetricsEvent::FileValueDropped => {
            m.file_values_dropped = m.file_values_dropped.saturating_add(1);
        }
    });
}

/// Snapshot the current counters for endpoint/test plumbing.
#[must_use]
pub fn snapshot() -> EnrichMetrics {
    with_state(Clone::clone)
}

/// Reset all counters.
pub fn reset() {
    with_state_mut(|m| *m = EnrichMetrics::default());
}

fn with_state<R>(f: impl FnOnce(&EnrichMetrics) -> R) -> R {
    STATE.with_borrow(f)
}

fn with_state_mut<R>(f: impl FnOnce(&mut EnrichMetrics) -> R) -> R {
    STATE.with_borrow_mut(f)
}

///
/// TESTS
///
