use crate::backend::AdvisorBackend;
use crate::domain::contract::{OptimizationStatus, PredictResponse, RecommendationsResponse};
use crate::domain::{Analysis, Market, Prediction, Recommendation};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Recommendations(Market),
    OptimizationStatus,
    RunOptimization,
    Predict(String),
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    recs: Mutex<HashMap<Market, Vec<Recommendation>>>,
    predictions: Mutex<HashMap<String, PredictResponse>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    status: Mutex<Value>,
    fail_recs: AtomicBool,
    fail_status: AtomicBool,
    fail_run: AtomicBool,
}

pub(crate) fn rec(ticker: &str) -> Recommendation {
    Recommendation {
        ticker: ticker.to_string(),
        name: None,
        total_score: None,
        analysis: Analysis {
            signal: "Buy".to_string(),
            score: 3.0,
            current_price: 100.0,
            details: Vec::new(),
            fundamental: None,
        },
    }
}

pub(crate) fn predict_response(current: f64, target: f64) -> PredictResponse {
    PredictResponse {
        prediction: Prediction {
            outlook: "Bullish".to_string(),
            current_price: Some(current),
            predicted_price_7d: Some(target),
            graph_data: Vec::new(),
            reasoning: "trend".to_string(),
            news_sentiment: None,
        },
        news_sentiment: None,
    }
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        let fake = Self::default();
        *fake.status.lock().unwrap() = json!({"running": false});
        fake
    }

    pub(crate) fn set_recs(&self, market: Market, tickers: &[&str]) {
        let recs = tickers.iter().map(|t| rec(t)).collect();
        self.recs.lock().unwrap().insert(market, recs);
    }

    pub(crate) fn set_prediction(&self, ticker: &str, current: f64, target: f64) {
        self.predictions
            .lock()
            .unwrap()
            .insert(ticker.to_string(), predict_response(current, target));
    }

    pub(crate) fn set_status(&self, status: Value) {
        *self.status.lock().unwrap() = status;
    }

    pub(crate) fn fail_recommendations(&self, fail: bool) {
        self.fail_recs.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_status(&self, fail: bool) {
        self.fail_status.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_run(&self, fail: bool) {
        self.fail_run.store(fail, Ordering::SeqCst);
    }

    /// Holds the next matching call until the returned sender fires or drops.
    pub(crate) fn gate(&self, call: &Call) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(gate_key(call), rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    async fn record(&self, call: Call) {
        let gate = self.gates.lock().unwrap().remove(&gate_key(&call));
        self.calls.lock().unwrap().push(call);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

fn gate_key(call: &Call) -> String {
    format!("{call:?}")
}

#[async_trait::async_trait]
impl AdvisorBackend for FakeBackend {
    async fn recommendations(&self, market: Market) -> anyhow::Result<RecommendationsResponse> {
        self.record(Call::Recommendations(market)).await;
        anyhow::ensure!(!self.fail_recs.load(Ordering::SeqCst), "recommendations unavailable");
        Ok(RecommendationsResponse {
            recommendations: self.recs.lock().unwrap().get(&market).cloned(),
        })
    }

    async fn optimization_status(&self) -> anyhow::Result<OptimizationStatus> {
        self.record(Call::OptimizationStatus).await;
        anyhow::ensure!(!self.fail_status.load(Ordering::SeqCst), "status unavailable");
        Ok(OptimizationStatus(self.status.lock().unwrap().clone()))
    }

    async fn run_optimization(&self) -> anyhow::Result<()> {
        self.record(Call::RunOptimization).await;
        anyhow::ensure!(!self.fail_run.load(Ordering::SeqCst), "run rejected");
        Ok(())
    }

    async fn predict(&self, ticker: &str) -> anyhow::Result<PredictResponse> {
        self.record(Call::Predict(ticker.to_string())).await;
        self.predictions
            .lock()
            .unwrap()
            .get(ticker)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no prediction for {ticker}"))
    }
}
