pub mod config;
pub mod intent;
pub mod kernel;
pub mod ledger;
pub mod nlp;
pub mod outputs;

// Re-export specific items if needed for convenient access
pub use config::AssistantConfig;
pub use kernel::assistant::Assistant;
pub use kernel::reactor::ChatReactor;
pub use ledger::{GpaLedger, InMemoryLedger};
