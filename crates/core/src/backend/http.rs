use crate::backend::error::BackendError;
use crate::backend::{AdvisorBackend, Operation};
use crate::config::Settings;
use crate::domain::contract::{
    OptimizationStatus, PredictRequest, PredictResponse, RecommendationsResponse,
};
use crate::domain::Market;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

const RECOMMENDATIONS_PATH: &str = "/recommendations";
const OPTIMIZATION_STATUS_PATH: &str = "/optimization/status";
const OPTIMIZATION_RUN_PATH: &str = "/optimization/run";
const PREDICT_PATH: &str = "/predict";

#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.api_base_url(), settings.http_timeout())
    }

    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .context("failed to build advisor http client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        operation: Operation,
        req: reqwest::RequestBuilder,
    ) -> Result<(reqwest::StatusCode, String)> {
        let res = req
            .send()
            .await
            .with_context(|| format!("{} request failed", operation.as_str()))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .with_context(|| format!("failed to read {} response", operation.as_str()))?;

        if !status.is_success() {
            return Err(BackendError {
                operation,
                status,
                body: text,
            }
            .into());
        }

        Ok((status, text))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        req: reqwest::RequestBuilder,
    ) -> Result<T> {
        let (_, text) = self.send(operation, req).await?;
        serde_json::from_str::<T>(&text).with_context(|| {
            format!(
                "{} response does not match the expected shape: {text}",
                operation.as_str()
            )
        })
    }
}

#[async_trait::async_trait]
impl AdvisorBackend for HttpBackend {
    async fn recommendations(&self, market: Market) -> Result<RecommendationsResponse> {
        let req = self
            .http
            .get(self.url(RECOMMENDATIONS_PATH))
            .query(&[("market", market.as_str())]);
        self.send_json(Operation::Recommendations, req).await
    }

    async fn optimization_status(&self) -> Result<OptimizationStatus> {
        let req = self.http.get(self.url(OPTIMIZATION_STATUS_PATH));
        self.send_json(Operation::OptimizationStatus, req).await
    }

    async fn run_optimization(&self) -> Result<()> {
        let req = self.http.post(self.url(OPTIMIZATION_RUN_PATH));
        let (status, _) = self.send(Operation::RunOptimization, req).await?;
        tracing::debug!(%status, "optimization run accepted");
        Ok(())
    }

    async fn predict(&self, ticker: &str) -> Result<PredictResponse> {
        let req = self
            .http
            .post(self.url(PREDICT_PATH))
            .json(&PredictRequest { ticker });
        self.send_json(Operation::Predict, req).await
    }
}
