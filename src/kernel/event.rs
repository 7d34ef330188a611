use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::intent::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(pub Uuid);

impl TurnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bot message produced for one user turn.
#[derive(Debug, Clone)]
pub struct Reply {
    pub turn: TurnId,
    pub intent: Intent,
    /// May contain `<strong>` / `<br>` markup.
    pub body: String,
    /// Time from submission to delivery, including the thinking delay.
    pub elapsed: Duration,
}
