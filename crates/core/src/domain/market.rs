use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Market {
    #[default]
    KR,
    US,
}

impl Market {
    pub fn as_str(self) -> &'static str {
        match self {
            Market::KR => "KR",
            Market::US => "US",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KR" => Ok(Market::KR),
            "US" => Ok(Market::US),
            other => anyhow::bail!("unknown market: {other} (expected KR or US)"),
        }
    }
}
