use serde::{Deserialize, Serialize};

use crate::intent::{Intent, SlotError};
use crate::kernel::event::TurnId;

// Allowed: IDs, Durations, Counts, Enums
// Forbidden: message text, course names, grades

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    TurnReceived {
        turn: TurnId,
    },

    IntentClassified {
        turn: TurnId,
        intent: Intent,
        numeric_tokens: usize,
    },

    SlotMissing {
        turn: TurnId,
        kind: SlotError,
    },

    LedgerMutation {
        turn: TurnId,
        kind: MutationKind,
    },

    CollaboratorFailure {
        turn: TurnId,
    },

    ReplyDelivered {
        turn: TurnId,
        latency_ms: u64,
    },
}

impl TelemetryEvent {
    pub fn turn(&self) -> TurnId {
        match self {
            TelemetryEvent::TurnReceived { turn }
            | TelemetryEvent::IntentClassified { turn, .. }
            | TelemetryEvent::SlotMissing { turn, .. }
            | TelemetryEvent::LedgerMutation { turn, .. }
            | TelemetryEvent::CollaboratorFailure { turn }
            | TelemetryEvent::ReplyDelivered { turn, .. } => *turn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    CourseAppended,
    PreviousGpaSet,
}
