use crate::backend::AdvisorBackend;
use crate::domain::Market;
use crate::i18n::TextKey;
use crate::notify::Notifier;
use crate::state::SharedState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Failed,
    /// A newer request of the same kind was issued before this one settled.
    Superseded,
    /// Nothing to request (empty ticker).
    Skipped,
}

#[derive(Clone)]
pub struct FetchOrchestrator {
    backend: Arc<dyn AdvisorBackend>,
    notifier: Arc<dyn Notifier>,
    state: SharedState,
    recs_seq: Arc<AtomicU64>,
    predict_seq: Arc<AtomicU64>,
}

impl FetchOrchestrator {
    pub fn new(
        backend: Arc<dyn AdvisorBackend>,
        notifier: Arc<dyn Notifier>,
        state: SharedState,
    ) -> Self {
        Self {
            backend,
            notifier,
            state,
            recs_seq: Arc::new(AtomicU64::new(0)),
            predict_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replaces the list wholesale on success. Failures keep the last-known-good list.
    pub async fn fetch_recommendations(&self, market: Market) -> Outcome {
        let seq = self.recs_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.write().await.loading_recs = true;

        let res = self.backend.recommendations(market).await;

        let mut state = self.state.write().await;
        if self.recs_seq.load(Ordering::SeqCst) != seq || state.market != market {
            tracing::debug!(%market, seq, current = %state.market, "discarding superseded recommendations response");
            return Outcome::Superseded;
        }
        state.loading_recs = false;

        match res {
            Ok(resp) => {
                state.recommendations = resp.into_recommendations();
                tracing::info!(%market, count = state.recommendations.len(), "recommendations updated");
                Outcome::Applied
            }
            Err(err) => {
                tracing::warn!(%market, error = %format!("{err:#}"), "recommendations fetch failed; keeping last-known-good");
                Outcome::Failed
            }
        }
    }

    pub async fn fetch_optimization_status(&self) -> Outcome {
        match self.backend.optimization_status().await {
            Ok(status) => {
                self.state.write().await.optimization_status = Some(status);
                Outcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "optimization status fetch failed");
                Outcome::Failed
            }
        }
    }

    /// Clears the previous prediction before the request goes out. Only the latest
    /// request may write its result or clear the loading flag.
    pub async fn predict(&self, ticker: &str) -> Outcome {
        self.run_predict(ticker, false).await
    }

    /// Like `predict`, but also adopts `ticker` as the input value in the same write
    /// that clears the previous prediction.
    pub async fn select_and_predict(&self, ticker: &str) -> Outcome {
        self.run_predict(ticker, true).await
    }

    async fn run_predict(&self, ticker: &str, adopt_ticker: bool) -> Outcome {
        if ticker.trim().is_empty() {
            return Outcome::Skipped;
        }

        let seq = self.predict_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            if adopt_ticker {
                state.ticker = ticker.to_string();
            }
            state.loading_predict = true;
            state.prediction = None;
        }

        let res = self.backend.predict(ticker).await;

        let mut state = self.state.write().await;
        if self.predict_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(ticker, seq, "discarding superseded prediction response");
            return Outcome::Superseded;
        }
        state.loading_predict = false;

        match res {
            Ok(resp) => {
                state.prediction = Some(resp.into_prediction());
                tracing::info!(ticker, "prediction updated");
                Outcome::Applied
            }
            Err(err) => {
                let message = state.language.text(TextKey::PredictFailed);
                drop(state);
                tracing::error!(ticker, error = %format!("{err:#}"), "prediction failed");
                self.notifier.alert(message);
                Outcome::Failed
            }
        }
    }

    /// Posts a run, then re-reads status so the accepted run shows up immediately.
    pub async fn start_optimization(&self) -> Outcome {
        if let Err(err) = self.backend.run_optimization().await {
            tracing::warn!(error = %format!("{err:#}"), "optimization run failed");
            return Outcome::Failed;
        }

        let message = self.state.read().await.language.text(TextKey::OptimizationStarted);
        tracing::info!("optimization run accepted");
        self.notifier.alert(message);
        self.fetch_optimization_status().await
    }
}
