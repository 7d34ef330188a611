pub mod assistant;
pub mod event;
pub mod reactor;
pub mod scheduler;
pub mod telemetry;

pub use assistant::{Assistant, TurnResult};
pub use event::{Reply, TurnId};
pub use reactor::ChatReactor;
pub use scheduler::ReplyScheduler;
