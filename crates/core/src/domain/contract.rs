use crate::domain::prediction::{NewsSentiment, Prediction};
use crate::domain::recommendation::Recommendation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl RecommendationsResponse {
    /// An absent list means "nothing recommended", not an error.
    pub fn into_recommendations(self) -> Vec<Recommendation> {
        self.recommendations.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest<'a> {
    pub ticker: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
    #[serde(default)]
    pub news_sentiment: Option<NewsSentiment>,
}

impl PredictResponse {
    /// Folds the top-level sentiment into the prediction, replacing any nested copy.
    pub fn into_prediction(self) -> Prediction {
        Prediction {
            news_sentiment: self.news_sentiment,
            ..self.prediction
        }
    }
}

/// Background state of the backend's optimizer. Kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimizationStatus(pub Value);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_recommendation_with_fundamentals() {
        let v = json!({
            "recommendations": [
                {
                    "ticker": "005930.KS",
                    "name": "Samsung Electronics",
                    "total_score": 82.345,
                    "analysis": {
                        "signal": "Buy",
                        "score": 4,
                        "current_price": 71500,
                        "details": ["RSI oversold", "Golden cross"],
                        "fundamental": {
                            "badges": ["Value"],
                            "key_metrics": {"P/E": 12.3, "Profit Margin": 0.151},
                            "insights": ["Cheap vs sector"]
                        }
                    }
                },
                {
                    "ticker": "AAPL",
                    "analysis": {"signal": "Hold", "score": 2.5, "current_price": 189.5}
                }
            ]
        });

        let parsed: RecommendationsResponse = serde_json::from_value(v).unwrap();
        let recs = parsed.into_recommendations();
        assert_eq!(recs.len(), 2);
        let fundamental = recs[0].analysis.fundamental.as_ref().unwrap();
        assert_eq!(fundamental.key_metrics.pe, Some(12.3));
        assert_eq!(fundamental.key_metrics.profit_margin, Some(0.151));
        assert!(recs[1].analysis.details.is_empty());
        assert!(recs[1].analysis.fundamental.is_none());
    }

    #[test]
    fn missing_recommendations_key_is_empty() {
        let parsed: RecommendationsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.into_recommendations().is_empty());
    }

    #[test]
    fn merges_top_level_news_sentiment_into_prediction() {
        let v = json!({
            "prediction": {
                "outlook": "Bullish",
                "current_price": 100.0,
                "predicted_price_7d": 110.0,
                "graph_data": [{"day": 1, "price": 101.0}, {"day": "2026-10-20", "price": 102.5}],
                "reasoning": "Uptrend"
            },
            "news_sentiment": {
                "sentiment": "Positive",
                "score": 0.4,
                "headlines": [{"title": "Beat estimates", "link": "https://news.example/1"}]
            }
        });

        let prediction = serde_json::from_value::<PredictResponse>(v)
            .unwrap()
            .into_prediction();
        assert!(prediction.is_bullish());
        assert_eq!(prediction.graph_data.len(), 2);
        assert_eq!(prediction.graph_data[1].day.to_string(), "2026-10-20");
        let sentiment = prediction.news_sentiment.unwrap();
        assert_eq!(sentiment.sentiment, "Positive");
        assert_eq!(sentiment.headlines[0].link, "https://news.example/1");
    }

    #[test]
    fn rejects_response_without_prediction() {
        let res = serde_json::from_value::<PredictResponse>(json!({"news_sentiment": null}));
        assert!(res.is_err());
    }
}
