use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};

use super::event::{MutationKind, TelemetryEvent};
use crate::intent::SlotError;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TelemetrySnapshot {
    pub turns: u64,
    /// Keyed by intent label, e.g. "add_course".
    pub intents: BTreeMap<String, u64>,
    pub slot_stats: SlotStats,
    pub ledger_stats: LedgerStats,
    pub delivery_stats: DeliveryStats,
    /// Events dropped from the bounded log; counts above only cover what is left.
    pub evicted_events: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SlotStats {
    pub missing_grade: u64,
    pub missing_credits: u64,
    pub insufficient_numbers: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LedgerStats {
    pub courses_appended: u64,
    pub previous_gpa_set: u64,
    pub failures: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeliveryStats {
    pub delivered: u64,
    pub total_latency_ms: u64,
    pub avg_latency_ms: f64,
    pub max_latency_ms: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::TurnReceived { .. } => snap.turns += 1,
            TelemetryEvent::IntentClassified { intent, .. } => {
                *snap.intents.entry(intent.to_string()).or_insert(0) += 1;
            }
            TelemetryEvent::SlotMissing { kind, .. } => match kind {
                SlotError::MissingGrade => snap.slot_stats.missing_grade += 1,
                SlotError::MissingCredits => snap.slot_stats.missing_credits += 1,
                SlotError::InsufficientNumbers { .. } => snap.slot_stats.insufficient_numbers += 1,
            },
            TelemetryEvent::LedgerMutation { kind, .. } => match kind {
                MutationKind::CourseAppended => snap.ledger_stats.courses_appended += 1,
                MutationKind::PreviousGpaSet => snap.ledger_stats.previous_gpa_set += 1,
            },
            TelemetryEvent::CollaboratorFailure { .. } => snap.ledger_stats.failures += 1,
            TelemetryEvent::ReplyDelivered { latency_ms, .. } => {
                snap.delivery_stats.delivered += 1;
                snap.delivery_stats.total_latency_ms += latency_ms;
                if *latency_ms > snap.delivery_stats.max_latency_ms {
                    snap.delivery_stats.max_latency_ms = *latency_ms;
                }
            }
        }
    }

    if snap.delivery_stats.delivered > 0 {
        snap.delivery_stats.avg_latency_ms =
            snap.delivery_stats.total_latency_ms as f64 / snap.delivery_stats.delivered as f64;
    }

    snap
}
