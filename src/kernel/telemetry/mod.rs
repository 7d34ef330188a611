//! Turn telemetry.
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain user content (message text, course
//! names, grades). Only turn IDs, intent kinds, counts and durations.
//!
//! Telemetry is write-only from the turn's point of view: nothing in
//! classification or slot filling reads it.

pub mod event;
pub mod metrics;
pub mod recorder;

pub use event::{MutationKind, TelemetryEvent};
pub use metrics::TelemetrySnapshot;
pub use recorder::TelemetryRecorder;
