use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// Top level body of a runPagespeed response
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagespeedResponse {
    pub id: Option<String>,
    pub lighthouse_result: Option<LighthouseResult>,
    #[serde(rename = "analysisUTCTimestamp")]
    pub analysis_utc_timestamp: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    pub requested_url: Option<String>,
    pub final_url: Option<String>,
    // Newer Lighthouse versions report this alongside or instead of finalUrl
    pub final_displayed_url: Option<String>,
    pub fetch_time: Option<String>,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
}

impl LighthouseResult {
    pub fn resolved_final_url(&self) -> Option<&str> {
        self.final_url
            .as_deref()
            .or(self.final_displayed_url.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub id: Option<String>,
    pub title: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub id: Option<String>,
    pub title: Option<String>,
    pub score: Option<f64>,
    pub numeric_value: Option<f64>,
    pub display_value: Option<String>,
    // Shape depends on the audit type
    pub details: Option<Value>,
}

impl Audit {
    /// Rows of a table-style `details` block.
    pub fn detail_items(&self) -> &[Value] {
        self.details
            .as_ref()
            .and_then(|details| details.get("items"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct PagespeedErrorBody {
    pub error: Option<PagespeedErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct PagespeedErrorDetail {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub status: Option<String>,
}
