use advisor_core::format::{self, PredictionView, RecommendationView};
use advisor_core::i18n::TextKey;
use advisor_core::state::ViewState;

pub fn recommendations(state: &ViewState) -> String {
    let t = |key| state.language.text(key);
    let mut lines = vec![
        format!("{} ({})", t(TextKey::AiRecs), state.market),
        t(TextKey::ScanMsg).to_string(),
        String::new(),
    ];

    if state.loading_recs {
        lines.push(t(TextKey::Scanning).to_string());
    } else if state.recommendations.is_empty() {
        lines.push(t(TextKey::NoBullish).to_string());
    }

    for rec in &state.recommendations {
        let view = RecommendationView::derive(rec, state.market);
        let mut header = format!(
            "{} [{}]",
            rec.name.as_deref().unwrap_or(&rec.ticker),
            rec.analysis.signal
        );
        if let Some(f) = &rec.analysis.fundamental {
            for badge in &f.badges {
                header.push_str(&format!(" <{badge}>"));
            }
        }
        lines.push(header);
        lines.push(format!("  {}", rec.ticker));
        lines.push(format!(
            "  {}: {} | {}: {}{}",
            t(TextKey::TotalScore),
            view.total_score,
            t(TextKey::PriceLabel),
            view.currency,
            view.price
        ));
        if let (Some(pe), Some(margin)) = (&view.pe, &view.margin) {
            lines.push(format!(
                "  {}: {pe} | {}: {margin}",
                t(TextKey::PeLabel),
                t(TextKey::MarginLabel)
            ));
        }
        if !view.summary.is_empty() {
            lines.push(format!("  {}", view.summary));
        }
    }

    finish(lines)
}

pub fn prediction(state: &ViewState) -> String {
    let t = |key| state.language.text(key);
    let mut lines = vec![t(TextKey::PredictionTitle).to_string()];

    let Some(p) = &state.prediction else {
        if state.loading_predict {
            lines.push(t(TextKey::AnalyzingBtn).to_string());
        }
        return finish(lines);
    };

    let view = PredictionView::derive(&state.ticker, p);
    let krw = format::is_krw_ticker(&state.ticker);
    lines.push(format!(
        "{} {} {} ({})",
        state.ticker,
        t(TextKey::OutlookLabel),
        p.outlook,
        view.outlook.hex()
    ));
    lines.push(format!(
        "  {}: {}{}",
        t(TextKey::CurrentPrice),
        view.currency,
        view.current_price
    ));
    lines.push(format!(
        "  {}: {}{} ({})",
        t(TextKey::TargetPrice),
        view.currency,
        view.target_price,
        view.trend.hex()
    ));
    lines.push(format!("  {}: {}", t(TextKey::Potential), view.potential));
    lines.push(format!("  {}", t(TextKey::BasedOn)));

    if let Some(sources) = p.news_sentiment.as_ref().and_then(|n| n.sources.as_ref()) {
        lines.push(format!("  {} {}", t(TextKey::SourcesLabel), sources.join(", ")));
    }

    if !p.graph_data.is_empty() {
        lines.push(String::new());
        for point in &p.graph_data {
            lines.push(format!(
                "  {:>12}  {}{}",
                point.day.to_string(),
                view.currency,
                format::rounded_price(Some(point.price), krw)
            ));
        }
    }

    if !p.reasoning.is_empty() {
        lines.push(String::new());
        lines.push(t(TextKey::AiReasoning).to_string());
        lines.push(format!("  {}", p.reasoning));
    }

    if let Some(news) = &p.news_sentiment {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            t(TextKey::NewsSentiment),
            t(TextKey::Last30Days)
        ));
        let score = format::sentiment_score(news.score)
            .map(|s| format!(" ({s})"))
            .unwrap_or_default();
        lines.push(format!(
            "  [{}] {}{score}",
            format::sentiment_tone(&news.sentiment).label(),
            news.sentiment
        ));

        if news.headlines.is_empty() {
            lines.push(format!(
                "  {}",
                format::news_fallback(news, state.language)
            ));
        }
        for h in &news.headlines {
            lines.push(format!(
                "  - {}",
                format::headline_title(h, state.language)
            ));
            lines.push(format!(
                "    [{}] {}  {}",
                format::headline_source(h),
                format::headline_date(h, state.language),
                h.link
            ));
        }
    }

    lines.push(String::new());
    lines.push(t(TextKey::Disclaimer).to_string());
    finish(lines)
}

pub fn optimization_status(state: &ViewState) -> String {
    state
        .optimization_status
        .as_ref()
        .map(|s| s.0.to_string())
        .unwrap_or_else(|| format::NOT_AVAILABLE.to_string())
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::domain::contract::OptimizationStatus;
    use advisor_core::domain::{
        Analysis, Headline, Market, NewsSentiment, Prediction, Recommendation,
    };
    use advisor_core::i18n::Language;
    use serde_json::json;

    fn state(language: Language) -> ViewState {
        ViewState::new(Market::KR, language)
    }

    #[test]
    fn empty_list_shows_no_signal_message() {
        let out = recommendations(&state(Language::En));
        assert!(out.starts_with("AI Recommendations (KR)"));
        assert!(out.contains("No bullish signals found yet."));

        let mut loading = state(Language::Ko);
        loading.loading_recs = true;
        assert!(recommendations(&loading).contains("시장 데이터 스캔 중"));
    }

    #[test]
    fn list_price_falls_back_to_market_currency() {
        let mut s = state(Language::En);
        s.recommendations = vec![Recommendation {
            ticker: "AAPL".to_string(),
            name: Some("Apple".to_string()),
            total_score: Some(77.0),
            analysis: Analysis {
                signal: "Buy".to_string(),
                score: 3.0,
                current_price: 1234.5,
                details: vec!["Golden cross".to_string()],
                fundamental: None,
            },
        }];

        let out = recommendations(&s);
        assert!(out.contains("Apple [Buy]"));
        assert!(out.contains("Total Score: 77.0 | Price: ₩1,234.5"));
        assert!(out.contains("  Golden cross"));
    }

    #[test]
    fn prediction_panel_uses_ticker_suffix_only() {
        let mut s = state(Language::En);
        s.ticker = "AAPL".to_string();
        s.prediction = Some(Prediction {
            outlook: "Bullish".to_string(),
            current_price: Some(100.0),
            predicted_price_7d: Some(110.0),
            graph_data: Vec::new(),
            reasoning: "Momentum".to_string(),
            news_sentiment: Some(NewsSentiment {
                sentiment: "Positive".to_string(),
                score: 0.4,
                sources: Some(vec!["Reuters".to_string()]),
                headlines: vec![Headline {
                    title: Some("Record quarter".to_string()),
                    title_en: None,
                    link: "https://news.example/1".to_string(),
                    source: None,
                    published: Some("2026-10-18".to_string()),
                }],
                message: None,
            }),
        });

        let out = prediction(&s);
        assert!(out.contains("AAPL Outlook: Bullish (#238636)"));
        assert!(out.contains("Current Price: $100"));
        assert!(out.contains("Potential: 10.00%"));
        assert!(out.contains("Sources: Reuters"));
        assert!(out.contains("[buy] Positive (+0.4)"));
        assert!(out.contains("[News] 2026-10-18  https://news.example/1"));
    }

    #[test]
    fn loading_prediction_shows_progress() {
        let mut s = state(Language::En);
        s.loading_predict = true;
        assert!(prediction(&s).contains("Analyzing..."));
    }

    #[test]
    fn status_renders_raw_json_or_fallback() {
        let mut s = state(Language::En);
        assert_eq!(optimization_status(&s), "N/A");
        s.optimization_status = Some(OptimizationStatus(json!({"running": true})));
        assert_eq!(optimization_status(&s), r#"{"running":true}"#);
    }
}
