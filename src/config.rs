use std::time::Duration;

pub const PAGESPEED_API_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

// Upstream runs a full Lighthouse pass per request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings shared by every request an [`crate::Auditor`] makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditorConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AuditorConfig {
    fn default() -> Self {
        Self {
            endpoint: PAGESPEED_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AuditorConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
