use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::assistant::{Assistant, TurnResult};
use super::event::{Reply, TurnId};
use super::scheduler::ReplyScheduler;
use super::telemetry::{TelemetryEvent, TelemetryRecorder, TelemetrySnapshot};
use crate::config::AssistantConfig;
use crate::ledger::GpaLedger;
use crate::outputs::Outcome;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared pieces a deferred turn needs.
struct TurnContext<L> {
    assistant: Arc<Assistant>,
    ledger: Arc<Mutex<L>>,
    telemetry: Arc<Mutex<TelemetryRecorder>>,
}

impl<L> Clone for TurnContext<L> {
    fn clone(&self) -> Self {
        Self {
            assistant: self.assistant.clone(),
            ledger: self.ledger.clone(),
            telemetry: self.telemetry.clone(),
        }
    }
}

impl<L: GpaLedger> TurnContext<L> {
    /// One atomic turn: the ledger lock is held only for this synchronous step.
    fn run(&self, turn: TurnId, text: &str) -> TurnResult {
        let result = {
            let mut ledger = lock(&self.ledger);
            self.assistant.respond(text, &mut *ledger)
        };

        let mut telemetry = lock(&self.telemetry);
        telemetry.record(TelemetryEvent::IntentClassified {
            turn,
            intent: result.intent,
            numeric_tokens: result.numeric_tokens,
        });
        match &result.outcome {
            Outcome::MissingSlot(kind) => {
                telemetry.record(TelemetryEvent::SlotMissing { turn, kind: *kind })
            }
            Outcome::CollaboratorFailure => {
                telemetry.record(TelemetryEvent::CollaboratorFailure { turn })
            }
            _ => {}
        }
        if let Some(kind) = result.mutation {
            telemetry.record(TelemetryEvent::LedgerMutation { turn, kind });
        }
        result
    }

    fn delivered(&self, turn: TurnId, elapsed: Duration) {
        lock(&self.telemetry).record(TelemetryEvent::ReplyDelivered {
            turn,
            latency_ms: elapsed.as_millis() as u64,
        });
    }
}

/// Chat front door: accepts user messages and delivers replies on a channel
/// after the configured thinking delay.
pub struct ChatReactor<L> {
    ctx: TurnContext<L>,
    scheduler: ReplyScheduler,
    tx: mpsc::Sender<Reply>,
}

impl<L> ChatReactor<L>
where
    L: GpaLedger + Send + 'static,
{
    pub fn new(config: &AssistantConfig, ledger: L) -> (Self, mpsc::Receiver<Reply>) {
        let (tx, rx) = mpsc::channel(config.reply_buffer.max(1));
        let reactor = Self {
            ctx: TurnContext {
                assistant: Arc::new(Assistant::new(config)),
                ledger: Arc::new(Mutex::new(ledger)),
                telemetry: Arc::new(Mutex::new(TelemetryRecorder::new())),
            },
            scheduler: ReplyScheduler::new(Duration::from_millis(config.thinking_delay_ms)),
            tx,
        };
        info!(
            delay_ms = config.thinking_delay_ms,
            toolkit = config.numeric_toolkit,
            "Chat reactor ready"
        );
        (reactor, rx)
    }

    /// Queues a message; the reply arrives on the channel later. Blank input is ignored.
    ///
    /// Overlapping submissions are independent: no ordering, no coalescing.
    pub fn submit(&self, text: &str) -> Option<TurnId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let turn = TurnId::new();
        let submitted = Instant::now();
        lock(&self.ctx.telemetry).record(TelemetryEvent::TurnReceived { turn });

        let ctx = self.ctx.clone();
        let tx = self.tx.clone();
        let text = text.to_string();
        self.scheduler.schedule(async move {
            let result = ctx.run(turn, &text);
            let reply = Reply {
                turn,
                intent: result.intent,
                body: result.reply,
                elapsed: submitted.elapsed(),
            };
            ctx.delivered(turn, reply.elapsed);
            if tx.send(reply).await.is_err() {
                debug!(%turn, "reply receiver dropped");
            }
        });
        Some(turn)
    }

    /// Runs a turn immediately, bypassing the delay and the channel.
    pub fn process_now(&self, text: &str) -> Option<TurnResult> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let turn = TurnId::new();
        lock(&self.ctx.telemetry).record(TelemetryEvent::TurnReceived { turn });
        Some(self.ctx.run(turn, text))
    }

    /// Direct ledger access for the non-chat affordances (list, remove, reset).
    pub fn with_ledger<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        f(&mut *lock(&self.ctx.ledger))
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        lock(&self.ctx.telemetry).snapshot()
    }

    pub fn turn_trace(&self, turn: TurnId) -> Vec<TelemetryEvent> {
        lock(&self.ctx.telemetry).turn_trace(turn)
    }

    pub fn pending(&self) -> usize {
        self.scheduler.pending()
    }

    /// Waits until every submitted turn has delivered its reply.
    pub async fn drain(&self) {
        self.scheduler.drain().await;
    }
}
