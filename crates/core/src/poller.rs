use crate::orchestrator::FetchOrchestrator;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy)]
pub struct PollScheduler {
    period: Duration,
}

impl PollScheduler {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Arms the timer. The first poll fires one period from now; callers fetch
    /// immediately themselves.
    pub fn start(&self, orchestrator: FetchOrchestrator) -> PollHandle {
        let token = CancellationToken::new();
        let period = self.period;
        let task = tokio::spawn(run(orchestrator, period, token.clone()));
        tracing::debug!(?period, "optimization status poll armed");
        PollHandle {
            token,
            task: Some(task),
        }
    }
}

async fn run(orchestrator: FetchOrchestrator, period: Duration, token: CancellationToken) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = orchestrator.fetch_optimization_status() => {}
        }
    }

    tracing::debug!("optimization status poll stopped");
}

/// Owning handle of a running poll. Dropping it stops the timer too.
#[derive(Debug)]
pub struct PollHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Stops the timer and waits until the poll task has exited.
    pub async fn cancel(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                tracing::warn!(error = %err, "optimization status poll task ended abnormally");
            }
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
