use crate::domain::{Headline, KeyMetrics, Market, NewsSentiment, Prediction, Recommendation};
use crate::i18n::{Language, TextKey};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_NEWS_SOURCE: &str = "News";

const KRW: &str = "₩";
const USD: &str = "$";
const KRW_SUFFIXES: [&str; 2] = [".KS", ".KQ"];

/// Where a price is rendered. The two contexts resolve currency differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceContext {
    /// Market-scoped list: falls back to the selected market.
    RecommendationList,
    /// Free-form ticker: suffix only, market ignored.
    PredictionPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Success,
    Danger,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Success => "#238636",
            Color::Danger => "#da3633",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTone {
    Buy,
    Sell,
    Neutral,
}

impl SentimentTone {
    pub fn label(self) -> &'static str {
        match self {
            SentimentTone::Buy => "buy",
            SentimentTone::Sell => "sell",
            SentimentTone::Neutral => "neutral",
        }
    }
}

pub fn is_krw_ticker(ticker: &str) -> bool {
    KRW_SUFFIXES.iter().any(|suffix| ticker.ends_with(suffix))
}

pub fn currency_symbol(ticker: &str, market: Market, context: PriceContext) -> &'static str {
    let krw = match context {
        PriceContext::RecommendationList => is_krw_ticker(ticker) || market == Market::KR,
        PriceContext::PredictionPanel => is_krw_ticker(ticker),
    };
    if krw {
        KRW
    } else {
        USD
    }
}

/// `value` with thousands separators and at most `max_fraction_digits` decimals.
/// Trailing fractional zeros are dropped.
pub fn grouped_number(value: f64, max_fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

// Zero prices come back for missing quotes.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

pub fn rounded_price(value: Option<f64>, is_krw: bool) -> String {
    match present(value) {
        Some(v) => grouped_number(v, if is_krw { 0 } else { 2 }),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn list_price(value: f64) -> String {
    grouped_number(value, 3)
}

/// Signed percentage move from `current` to `target`, two decimals.
pub fn potential(current: Option<f64>, target: Option<f64>) -> String {
    match (present(current), present(target)) {
        (Some(current), Some(target)) => {
            format!("{:.2}%", (target - current) / current * 100.0)
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn trend_color(target: Option<f64>, current: Option<f64>) -> Color {
    match (target, current) {
        (Some(t), Some(c)) if t > c => Color::Success,
        _ => Color::Danger,
    }
}

pub fn outlook_color(outlook: &str) -> Color {
    if outlook == crate::domain::prediction::BULLISH {
        Color::Success
    } else {
        Color::Danger
    }
}

pub fn total_score(rec: &Recommendation) -> String {
    match present(rec.total_score) {
        Some(score) => format!("{score:.1}"),
        None => rec.analysis.score.to_string(),
    }
}

pub fn pe_ratio(metrics: &KeyMetrics) -> String {
    present(metrics.pe)
        .map(|pe| format!("{pe:.1}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn profit_margin(metrics: &KeyMetrics) -> String {
    present(metrics.profit_margin)
        .map(|m| format!("{:.1}%", m * 100.0))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Signed score, or `None` when neutral zero.
pub fn sentiment_score(score: f64) -> Option<String> {
    if score == 0.0 {
        return None;
    }
    let sign = if score > 0.0 { "+" } else { "" };
    Some(format!("{sign}{score}"))
}

pub fn sentiment_tone(sentiment: &str) -> SentimentTone {
    match sentiment {
        "Positive" => SentimentTone::Buy,
        "Negative" => SentimentTone::Sell,
        _ => SentimentTone::Neutral,
    }
}

pub fn headline_title(headline: &Headline, lang: Language) -> &str {
    [headline.title.as_deref(), headline.title_en.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| lang.text(TextKey::NoTitle))
}

pub fn headline_source(headline: &Headline) -> &str {
    headline
        .source
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_NEWS_SOURCE)
}

pub fn headline_date(headline: &Headline, lang: Language) -> String {
    match headline.published.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => parse_published(raw)
            .map(|d| d.to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => lang.text(TextKey::NoDate).to_string(),
    }
}

fn parse_published(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.date())
                .ok()
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Body text shown instead of headlines when the list is empty.
pub fn news_fallback(sentiment: &NewsSentiment, lang: Language) -> &str {
    sentiment
        .message
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| lang.text(TextKey::NoNewsFallback))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub currency: &'static str,
    pub current_price: String,
    pub target_price: String,
    pub potential: String,
    pub trend: Color,
    pub outlook: Color,
}

impl PredictionView {
    /// `ticker` is the current input value, not the one the prediction was requested for.
    pub fn derive(ticker: &str, prediction: &Prediction) -> Self {
        let krw = is_krw_ticker(ticker);
        Self {
            currency: currency_symbol(ticker, Market::US, PriceContext::PredictionPanel),
            current_price: rounded_price(prediction.current_price, krw),
            target_price: rounded_price(prediction.predicted_price_7d, krw),
            potential: potential(prediction.current_price, prediction.predicted_price_7d),
            trend: trend_color(prediction.predicted_price_7d, prediction.current_price),
            outlook: outlook_color(&prediction.outlook),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    pub currency: &'static str,
    pub price: String,
    pub total_score: String,
    pub pe: Option<String>,
    pub margin: Option<String>,
    pub summary: String,
}

impl RecommendationView {
    pub fn derive(rec: &Recommendation, market: Market) -> Self {
        let fundamental = rec.analysis.fundamental.as_ref();
        let mut summary = rec.analysis.details.join(", ");
        if let Some(f) = fundamental.filter(|f| !f.insights.is_empty()) {
            summary.push_str(" • ");
            summary.push_str(&f.insights.join(", "));
        }

        Self {
            currency: currency_symbol(&rec.ticker, market, PriceContext::RecommendationList),
            price: list_price(rec.analysis.current_price),
            total_score: total_score(rec),
            pe: fundamental.map(|f| pe_ratio(&f.key_metrics)),
            margin: fundamental.map(|f| profit_margin(&f.key_metrics)),
            summary,
        }
    }
}
