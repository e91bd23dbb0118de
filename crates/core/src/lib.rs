pub mod backend;
pub mod dashboard;
pub mod domain;
pub mod format;
pub mod i18n;
pub mod notify;
pub mod orchestrator;
pub mod poller;
pub mod state;

pub mod config {
    use anyhow::Context;
    use std::time::Duration;

    pub const DEFAULT_API_URL: &str = "/api";
    pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";
    pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub api_url: Option<String>,
        pub origin: Option<String>,
        pub poll_interval_secs: Option<u64>,
        pub http_timeout_secs: Option<u64>,
        pub locale: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                api_url: non_blank_var("ADVISOR_API_URL"),
                origin: non_blank_var("ADVISOR_ORIGIN"),
                poll_interval_secs: parse_var("ADVISOR_POLL_INTERVAL_SECS")?,
                http_timeout_secs: parse_var("ADVISOR_HTTP_TIMEOUT_SECS")?,
                locale: ["ADVISOR_LOCALE", "LC_ALL", "LANG"]
                    .into_iter()
                    .find_map(non_blank_var),
                sentry_dsn: non_blank_var("SENTRY_DSN"),
            })
        }

        /// Backend base URL with a relative path resolved against the origin.
        pub fn api_base_url(&self) -> String {
            let api_url = self.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
            if api_url.starts_with("http://") || api_url.starts_with("https://") {
                return api_url.trim_end_matches('/').to_string();
            }

            let origin = self.origin.as_deref().unwrap_or(DEFAULT_ORIGIN);
            format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                api_url.trim_matches('/')
            )
        }

        pub fn poll_interval(&self) -> Duration {
            Duration::from_secs(
                self.poll_interval_secs
                    .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
                    .max(1),
            )
        }

        /// No timeout unless explicitly configured; a hung request keeps its loading flag set.
        pub fn http_timeout(&self) -> Option<Duration> {
            self.http_timeout_secs.map(Duration::from_secs)
        }

        pub fn require_sentry_dsn(&self) -> anyhow::Result<&str> {
            self.sentry_dsn.as_deref().context("SENTRY_DSN is required")
        }
    }

    fn non_blank_var(name: &str) -> Option<String> {
        std::env::var(name)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn parse_var(name: &str) -> anyhow::Result<Option<u64>> {
        non_blank_var(name)
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("{name} must be a non-negative integer (got {s})"))
            })
            .transpose()
    }

}
