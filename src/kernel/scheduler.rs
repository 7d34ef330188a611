use std::future::Future;
use std::time::Duration;
use tokio_util::task::TaskTracker;
use tracing::debug;

/// Runs deferred replies after the "thinking" delay.
///
/// Jobs are fire-and-forget: there is no handle to cancel one, and jobs that
/// overlap finish in whatever order their work completes. `drain` only waits.
#[derive(Debug, Clone)]
pub struct ReplyScheduler {
    delay: Duration,
    tracker: TaskTracker,
}

impl ReplyScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            tracker: TaskTracker::new(),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        self.tracker.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            job.await;
        });
    }

    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Waits for every scheduled job, then accepts new ones again.
    pub async fn drain(&self) {
        debug!(pending = self.tracker.len(), "draining scheduled replies");
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}
