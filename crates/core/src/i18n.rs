use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    /// Initial language from the client locale. A missing locale counts as Korean.
    pub fn from_locale(locale: Option<&str>) -> Self {
        match locale {
            Some(l) if !l.contains("ko") => Language::En,
            _ => Language::Ko,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }

    pub fn text(self, key: TextKey) -> &'static str {
        match self {
            Language::Ko => ko(key),
            Language::En => en(key),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Ko => "ko",
            Language::En => "en",
        })
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            other => anyhow::bail!("unknown language: {other} (expected ko or en)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    SubtitleBrowse,
    SubtitleLookup,
    AiRecs,
    ScanMsg,
    RefreshBtn,
    Scanning,
    NoBullish,
    PredictionTitle,
    PredictionDesc,
    InputPlaceholder,
    PredictBtn,
    AnalyzingBtn,
    OutlookLabel,
    CurrentPrice,
    TargetPrice,
    Potential,
    BasedOn,
    AiReasoning,
    NewsSentiment,
    Last30Days,
    Disclaimer,
    TotalScore,
    PriceLabel,
    PeLabel,
    MarginLabel,
    SourcesLabel,
    NoTitle,
    NoDate,
    NoNewsFallback,
    LanguageToggle,
    PredictFailed,
    OptimizationStarted,
}

fn ko(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "주식 투자 어드바이저",
        TextKey::SubtitleBrowse => "1. 추천종목 확인 하거나,",
        TextKey::SubtitleLookup => "2. 종목을 입력해서 지표 및 최신 뉴스 확인 기능",
        TextKey::AiRecs => "AI 추천 종목",
        TextKey::ScanMsg => "AI가 기술적 지표(이평선, RSI)와 기업 가치(P/E, 이익률)를 종합 분석해 상승 확률이 높은 종목을 엄선했습니다. (Buy 신호 우선)",
        TextKey::RefreshBtn => "새로고침",
        TextKey::Scanning => "시장 데이터 스캔 중... 잠시만 기다려주세요...",
        TextKey::NoBullish => "주요 30개 종목 스캔 중... 강력한 매수 신호가 아직 없습니다.",
        TextKey::PredictionTitle => "🔮 주가 예측 & 인사이트",
        TextKey::PredictionDesc => "과거 30일 패턴과 최신 뉴스(Reuters, Bloomberg 등)를 분석해 향후 7일간의 주가 흐름을 예측합니다.",
        TextKey::InputPlaceholder => "종목코드 입력 (예: AAPL, 005930.KS)",
        TextKey::PredictBtn => "예측하기",
        TextKey::AnalyzingBtn => "분석 중...",
        TextKey::OutlookLabel => "전망:",
        TextKey::CurrentPrice => "현재가",
        TextKey::TargetPrice => "목표가 (7일)",
        TextKey::Potential => "예상 수익률",
        TextKey::BasedOn => "최근 30일간의 선형 회귀(Linear Regression) 추세 기반",
        TextKey::AiReasoning => "💡 AI 분석 결과:",
        TextKey::NewsSentiment => "📰 최신 뉴스 감성 분석",
        TextKey::Last30Days => "( 최근 30일 )",
        TextKey::Disclaimer => "⚠️ 투자 판단은 본인 책임! 수익은 보장되지 않아요.",
        TextKey::TotalScore => "종합 점수",
        TextKey::PriceLabel => "주가",
        TextKey::PeLabel => "P/E",
        TextKey::MarginLabel => "이익률",
        TextKey::SourcesLabel => "출처:",
        TextKey::NoTitle => "제목 없음",
        TextKey::NoDate => "날짜 없음",
        TextKey::NoNewsFallback => "최근 30일간 뉴스 없음",
        TextKey::LanguageToggle => "🇺🇸 English",
        TextKey::PredictFailed => "예측 정보를 가져오지 못했습니다",
        TextKey::OptimizationStarted => "최적화(Evolution)를 시작했습니다!",
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Stock Investment Advisor",
        TextKey::SubtitleBrowse => "1. Check recommended stocks,",
        TextKey::SubtitleLookup => "2. Or enter a ticker for analysis & news.",
        TextKey::AiRecs => "AI Recommendations",
        TextKey::ScanMsg => "AI analyzes technical indicators (RSI, MA) and fundamentals (P/E) to select stocks with high upside potential. (Buy signals prioritized)",
        TextKey::RefreshBtn => "Refresh",
        TextKey::Scanning => "Scanning market data... Please wait...",
        TextKey::NoBullish => "Scanning 30+ major stocks... No bullish signals found yet.",
        TextKey::PredictionTitle => "🔮 Price Prediction & Insight",
        TextKey::PredictionDesc => "Predicts 7-day price trends based on 30-day patterns and latest news (Reuters, Bloomberg, etc).",
        TextKey::InputPlaceholder => "Enter Ticker (e.g. AAPL)",
        TextKey::PredictBtn => "Predict",
        TextKey::AnalyzingBtn => "Analyzing...",
        TextKey::OutlookLabel => "Outlook:",
        TextKey::CurrentPrice => "Current Price",
        TextKey::TargetPrice => "Target Price (7d)",
        TextKey::Potential => "Potential",
        TextKey::BasedOn => "Based on Linear Regression trend of last 30 days.",
        TextKey::AiReasoning => "💡 AI Reasoning:",
        TextKey::NewsSentiment => "📰 Latest News Sentiment",
        TextKey::Last30Days => "( Last 30 Days )",
        TextKey::Disclaimer => "⚠️ Investment decisions are your responsibility. Returns are not guaranteed.",
        TextKey::TotalScore => "Total Score",
        TextKey::PriceLabel => "Price",
        TextKey::PeLabel => "P/E",
        TextKey::MarginLabel => "Margin",
        TextKey::SourcesLabel => "Sources:",
        TextKey::NoTitle => "No Title",
        TextKey::NoDate => "No Date",
        TextKey::NoNewsFallback => "No news found in the last 30 days.",
        TextKey::LanguageToggle => "🇰🇷 한국어",
        TextKey::PredictFailed => "Error fetching prediction",
        TextKey::OptimizationStarted => "Optimization (Evolution) started!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_korean_when_locale_mentions_ko() {
        assert_eq!(Language::from_locale(Some("ko-KR")), Language::Ko);
        assert_eq!(Language::from_locale(Some("ko_KR.UTF-8")), Language::Ko);
        assert_eq!(Language::from_locale(Some("en-US")), Language::En);
        assert_eq!(Language::from_locale(Some("C")), Language::En);
        assert_eq!(Language::from_locale(None), Language::Ko);
    }

    #[test]
    fn toggle_flips_between_both_languages() {
        assert_eq!(Language::Ko.toggled(), Language::En);
        assert_eq!(Language::Ko.toggled().toggled(), Language::Ko);
    }

    #[test]
    fn resolves_keys_per_language() {
        assert_eq!(Language::En.text(TextKey::PredictBtn), "Predict");
        assert_eq!(Language::Ko.text(TextKey::PredictBtn), "예측하기");
        assert_eq!(Language::En.text(TextKey::PeLabel), Language::Ko.text(TextKey::PeLabel));
    }
}
