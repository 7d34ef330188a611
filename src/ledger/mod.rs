//! Course list and GPA arithmetic behind the chat core.

pub mod store;
pub mod types;

pub use store::*;
pub use types::*;
