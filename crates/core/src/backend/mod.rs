use crate::domain::contract::{OptimizationStatus, PredictResponse, RecommendationsResponse};
use crate::domain::Market;

pub mod error;
pub mod http;

#[cfg(test)]
pub(crate) mod fake;

/// Backend operation, used in logs and error diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Recommendations,
    OptimizationStatus,
    RunOptimization,
    Predict,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Recommendations => "recommendations",
            Operation::OptimizationStatus => "optimization_status",
            Operation::RunOptimization => "run_optimization",
            Operation::Predict => "predict",
        }
    }
}

/// The advisor backend that computes recommendations, predictions and sentiment.
#[async_trait::async_trait]
pub trait AdvisorBackend: Send + Sync {
    async fn recommendations(&self, market: Market) -> anyhow::Result<RecommendationsResponse>;

    async fn optimization_status(&self) -> anyhow::Result<OptimizationStatus>;

    /// Any 2xx is success; the body is ignored.
    async fn run_optimization(&self) -> anyhow::Result<()>;

    async fn predict(&self, ticker: &str) -> anyhow::Result<PredictResponse>;
}
