use serde::{Deserialize, Serialize};
use std::fmt;

pub const BULLISH: &str = "Bullish";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub outlook: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub predicted_price_7d: Option<f64>,
    #[serde(default)]
    pub graph_data: Vec<PricePoint>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub news_sentiment: Option<NewsSentiment>,
}

impl Prediction {
    pub fn is_bullish(&self) -> bool {
        self.outlook == BULLISH
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub day: Day,
    pub price: f64,
}

/// Chart x-axis label: the backend sends either a day offset or a date string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Day {
    Offset(i64),
    Label(String),
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Day::Offset(n) => write!(f, "{n}"),
            Day::Label(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSentiment {
    pub sentiment: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub headlines: Vec<Headline>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}
