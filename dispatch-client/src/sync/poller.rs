//! Fixed-interval poller
//!
//! One background task per polled feed. The task fetches immediately, then
//! once per period, and early whenever its refresh signal fires. A refresh
//! that arrives mid-fetch drops the in-flight fetch and starts a new one.
//! Dropping the [`Poller`] cancels the task along with any fetch in flight.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Handle to a running poll loop
#[derive(Debug)]
pub struct Poller {
    shutdown: CancellationToken,
    refresh: Arc<Notify>,
    task: JoinHandle<()>,
}

impl Poller {
    /// Spawn a poll loop running `tick` on every period
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let shutdown = CancellationToken::new();
        let refresh = Arc::new(Notify::new());

        let task = tokio::spawn({
            let shutdown = shutdown.clone();
            let refresh = refresh.clone();
            async move {
                tracing::info!(poller = name, ?period, "Poller started");
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                let mut superseded = false;

                loop {
                    if superseded {
                        ticker.reset();
                    } else {
                        tokio::select! {
                            _ = shutdown.cancelled() => break,
                            _ = ticker.tick() => {}
                            _ = refresh.notified() => {
                                // Restart the period from the out-of-band fetch
                                ticker.reset();
                            }
                        }
                    }

                    let fetch = tick();
                    tokio::pin!(fetch);
                    superseded = tokio::select! {
                        _ = shutdown.cancelled() => break,
                        _ = &mut fetch => false,
                        _ = refresh.notified() => {
                            tracing::debug!(poller = name, "Fetch superseded by refresh");
                            true
                        }
                    };
                }
                tracing::info!(poller = name, "Poller stopped");
            }
        });

        Self {
            shutdown,
            refresh,
            task,
        }
    }

    /// Fetch now instead of waiting for the next tick
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// Cancel the task. Idempotent.
    pub fn stop(&self) {
        self.shutdown.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.shutdown.is_cancelled() || self.task.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
