use crate::error::Result;
use crate::utils::normalize_url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Device emulation profile used by PageSpeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Mobile,
    Desktop,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Mobile, Strategy::Desktop];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Strategy::Mobile),
            "desktop" => Ok(Strategy::Desktop),
            other => Err(format!(
                "unknown strategy '{}' (expected 'mobile' or 'desktop')",
                other
            )),
        }
    }
}

/// One audit of one URL under one strategy.
///
/// The URL is normalized on construction: a bare host gets `https://`
/// prepended and anything that does not parse as an absolute http(s) URL
/// is rejected.
#[derive(Clone, PartialEq, Eq)]
pub struct AuditRequest {
    url: String,
    strategy: Strategy,
    api_key: Option<String>,
}

impl AuditRequest {
    pub fn new(url: &str, strategy: Strategy) -> Result<Self> {
        Ok(Self {
            url: normalize_url(url)?,
            strategy,
            api_key: None,
        })
    }

    /// Blank keys are treated as no key at all.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    /// Same URL and key under another strategy.
    pub fn with_strategy(&self, strategy: Strategy) -> Self {
        Self {
            strategy,
            ..self.clone()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

// Keeps API keys out of logs
impl fmt::Debug for AuditRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditRequest")
            .field("url", &self.url)
            .field("strategy", &self.strategy)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
