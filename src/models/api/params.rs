use serde::Deserialize;

// Query string of `GET /audit`
#[derive(Debug, Deserialize)]
pub struct ParamsRunAudit {
    pub url: String,
    /// `mobile`, `desktop` or `both`; defaults to mobile.
    pub strategy: Option<String>,
}
