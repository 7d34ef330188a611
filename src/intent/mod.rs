pub mod classifier;
pub mod slots;
pub mod types;

pub use classifier::{IntentClassifier, Signals, RULES};
pub use slots::SlotFiller;
pub use types::*;
