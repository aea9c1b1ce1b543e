use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client itself could not be built (TLS backend, bad settings).
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// Connection failures, timeouts and body read errors.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Rate limited by PageSpeed Insights: {message}")]
    RateLimited { message: String },

    #[error("HTTP {status} from PageSpeed Insights: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuditError {
    pub fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        AuditError::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AuditError::RateLimited { .. })
    }
}
