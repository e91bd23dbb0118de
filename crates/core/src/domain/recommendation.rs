use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_score: Option<f64>,
    pub analysis: Analysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub signal: String,
    pub score: f64,
    pub current_price: f64,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub fundamental: Option<Fundamental>,
}

/// Backend-derived ratio labels; opaque strings to this layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fundamental {
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub key_metrics: KeyMetrics,
    #[serde(default)]
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyMetrics {
    #[serde(rename = "P/E", default)]
    pub pe: Option<f64>,
    #[serde(rename = "Profit Margin", default)]
    pub profit_margin: Option<f64>,
}
