use crate::models::audit::request::Strategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Normalized outcome of one PageSpeed audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub url: String,
    pub strategy: Strategy,
    pub timestamp: DateTime<Utc>,
    pub final_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_time: Option<String>,
    pub scores: Scores,
    /// Keyed by the upstream audit id, e.g. `first-contentful-paint`.
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricValue>,
    #[serde(default)]
    pub tech_stack: TechStack,
}

// Category scores on a 0-100 scale, absent when upstream did not report them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<f64>,
}

impl Scores {
    /// Display label and score for every reported category, in report order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        [
            ("Performance", self.performance),
            ("Accessibility", self.accessibility),
            ("Best Practices", self.best_practices),
            ("SEO", self.seo),
        ]
        .into_iter()
        .filter_map(|(label, score)| score.map(|s| (label, s)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    /// Upstream 0-1 score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    #[serde(default)]
    pub frameworks: BTreeSet<String>,
    #[serde(default)]
    pub libraries: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cms: Option<String>,
}

impl TechStack {
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
            && self.libraries.is_empty()
            && self.server.is_none()
            && self.cms.is_none()
    }
}

/// Output of a mobile + desktop run. A branch that failed is left out and its
/// error message recorded under `errors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<AuditResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<AuditResult>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<Strategy, String>,
}

impl CombinedResults {
    pub fn is_complete(&self) -> bool {
        self.mobile.is_some() && self.desktop.is_some()
    }

    pub fn results(&self) -> impl Iterator<Item = &AuditResult> {
        self.mobile.iter().chain(self.desktop.iter())
    }
}
