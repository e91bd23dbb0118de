use crate::backend::AdvisorBackend;
use crate::config::Settings;
use crate::domain::Market;
use crate::i18n::{Language, TextKey};
use crate::notify::Notifier;
use crate::orchestrator::{FetchOrchestrator, Outcome};
use crate::poller::{PollHandle, PollScheduler};
use crate::state::{SharedState, ViewState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub market: Market,
    pub language: Language,
    pub poll_interval: Duration,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            market: Market::default(),
            language: Language::default(),
            poll_interval: Duration::from_secs(crate::config::DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

impl DashboardOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            market: Market::default(),
            language: Language::from_locale(settings.locale.as_deref()),
            poll_interval: settings.poll_interval(),
        }
    }
}

pub struct Dashboard {
    state: SharedState,
    orchestrator: FetchOrchestrator,
    scheduler: PollScheduler,
    poll: Mutex<Option<PollHandle>>,
}

impl Dashboard {
    pub fn new(
        backend: Arc<dyn AdvisorBackend>,
        notifier: Arc<dyn Notifier>,
        options: DashboardOptions,
    ) -> Self {
        let state: SharedState = Arc::new(RwLock::new(ViewState::new(
            options.market,
            options.language,
        )));
        let orchestrator = FetchOrchestrator::new(backend, notifier, state.clone());

        Self {
            state,
            orchestrator,
            scheduler: PollScheduler::new(options.poll_interval),
            poll: Mutex::new(None),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub async fn text(&self, key: TextKey) -> &'static str {
        self.state.read().await.language.text(key)
    }

    pub async fn is_polling(&self) -> bool {
        self.poll
            .lock()
            .await
            .as_ref()
            .is_some_and(PollHandle::is_active)
    }

    /// Initial load for the current market plus the status poll.
    pub async fn mount(&self) {
        let market = self.state.read().await.market;
        tracing::info!(%market, "dashboard mounted");
        self.restart_market_cycle(market).await;
    }

    /// Stops the status poll. Safe to call more than once.
    pub async fn teardown(&self) {
        if let Some(handle) = self.poll.lock().await.take() {
            handle.cancel().await;
            tracing::info!("dashboard torn down");
        }
    }

    /// A market change always re-fetches the list and re-arms the status poll.
    /// Leaves `ticker` and `prediction` alone.
    pub async fn set_market(&self, market: Market) {
        {
            let mut state = self.state.write().await;
            if state.market == market {
                return;
            }
            state.market = market;
        }
        tracing::info!(%market, "market changed");
        self.restart_market_cycle(market).await;
    }

    pub async fn set_ticker(&self, raw: &str) {
        self.state.write().await.ticker = raw.to_uppercase();
    }

    /// Predicts with the ticker currently in the input.
    pub async fn submit_ticker(&self) -> Outcome {
        let ticker = self.state.read().await.ticker.clone();
        self.orchestrator.predict(&ticker).await
    }

    /// Click on a list item: adopt its ticker and analyze it right away.
    pub async fn select_recommendation(&self, ticker: &str) -> Outcome {
        self.orchestrator.select_and_predict(ticker).await
    }

    pub async fn refresh_recommendations(&self) -> Outcome {
        let market = self.state.read().await.market;
        self.orchestrator.fetch_recommendations(market).await
    }

    pub async fn start_optimization(&self) -> Outcome {
        self.orchestrator.start_optimization().await
    }

    pub async fn toggle_language(&self) -> Language {
        let mut state = self.state.write().await;
        state.language = state.language.toggled();
        state.language
    }

    async fn restart_market_cycle(&self, market: Market) {
        {
            let mut poll = self.poll.lock().await;
            if let Some(old) = poll.take() {
                old.cancel().await;
            }
            *poll = Some(self.scheduler.start(self.orchestrator.clone()));
        }

        tokio::join!(
            self.orchestrator.fetch_recommendations(market),
            self.orchestrator.fetch_optimization_status(),
        );
    }
}
