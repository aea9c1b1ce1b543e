use crate::services::Auditor;

#[derive(Clone)]
pub struct AppState {
    pub auditor: Auditor,
    /// Applied to every upstream request made on behalf of HTTP clients.
    pub api_key: Option<String>,
}

impl AppState {
    pub fn new(auditor: Auditor, api_key: Option<String>) -> Self {
        Self { auditor, api_key }
    }
}
