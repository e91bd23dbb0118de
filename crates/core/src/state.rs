use crate::domain::contract::OptimizationStatus;
use crate::domain::{Market, Prediction, Recommendation};
use crate::i18n::Language;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything the presentation layer reads. Only the dashboard's intents and the
/// fetch orchestrator write it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewState {
    pub market: Market,
    pub ticker: String,
    pub recommendations: Vec<Recommendation>,
    pub prediction: Option<Prediction>,
    pub optimization_status: Option<OptimizationStatus>,
    pub language: Language,
    pub loading_recs: bool,
    pub loading_predict: bool,
}

impl ViewState {
    pub fn new(market: Market, language: Language) -> Self {
        Self {
            market,
            language,
            ..Self::default()
        }
    }
}

pub type SharedState = Arc<RwLock<ViewState>>;
