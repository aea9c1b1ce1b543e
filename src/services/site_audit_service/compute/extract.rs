use crate::error::{AuditError, Result};
use crate::models::pagespeed::{Audit, Categories, Category};
use crate::models::{AuditRequest, AuditResult, MetricValue, PagespeedResponse, Scores};
use crate::services::site_audit_service::compute::tech_stack::TechStackDetector;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

// Upstream category ids, sent as `category` query params
pub const CATEGORY_KEYS: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

// Upstream audit ids, in report order
pub const METRIC_KEYS: [&str; 5] = [
    "first-contentful-paint",
    "largest-contentful-paint",
    "total-blocking-time",
    "cumulative-layout-shift",
    "speed-index",
];

const NETWORK_REQUESTS_AUDIT: &str = "network-requests";

/// Projects a raw PageSpeed response into an [`AuditResult`].
pub fn extract_result(
    response: PagespeedResponse,
    request: &AuditRequest,
    timestamp: DateTime<Utc>,
) -> Result<AuditResult> {
    let lighthouse = response
        .lighthouse_result
        .ok_or_else(|| AuditError::Parse("response is missing lighthouseResult".to_string()))?;

    let final_url = lighthouse
        .resolved_final_url()
        .unwrap_or(request.url())
        .to_string();

    Ok(AuditResult {
        url: request.url().to_string(),
        strategy: request.strategy(),
        timestamp,
        final_url,
        fetch_time: lighthouse.fetch_time.clone(),
        scores: extract_scores(&lighthouse.categories),
        metrics: extract_metrics(&lighthouse.audits),
        tech_stack: detect_from_audits(&lighthouse.audits),
    })
}

pub fn extract_scores(categories: &Categories) -> Scores {
    Scores {
        performance: category_score(categories.performance.as_ref()),
        accessibility: category_score(categories.accessibility.as_ref()),
        best_practices: category_score(categories.best_practices.as_ref()),
        seo: category_score(categories.seo.as_ref()),
    }
}

/// Picks the fixed metric audits. An audit without a `numericValue` is
/// treated as not available and left out.
pub fn extract_metrics(audits: &HashMap<String, Audit>) -> BTreeMap<String, MetricValue> {
    METRIC_KEYS
        .iter()
        .filter_map(|key| {
            let audit = audits.get(*key)?;
            let value = audit.numeric_value.filter(|v| v.is_finite())?;
            Some((
                key.to_string(),
                MetricValue {
                    value,
                    display_value: audit.display_value.clone(),
                    score: audit
                        .score
                        .filter(|s| s.is_finite())
                        .map(|s| s.clamp(0.0, 1.0)),
                },
            ))
        })
        .collect()
}

fn category_score(category: Option<&Category>) -> Option<f64> {
    category
        .and_then(|c| c.score)
        .filter(|s| s.is_finite())
        .map(to_percent)
}

/// Scales a 0-1 category score to 0-100, rounded to two decimals and
/// clamped. Lighthouse reports category scores with two decimals, so real
/// values come through exact (0.29 reads as 29.0, not 28.999...). Finer
/// input loses precision past the second decimal: 0.123456 becomes 12.35.
fn to_percent(score: f64) -> f64 {
    ((score * 10_000.0).round() / 100.0).clamp(0.0, 100.0)
}

// PageSpeed exposes no response headers or markup, so only request URLs
// are fed here and `server` can only come from URL fingerprints.
fn detect_from_audits(audits: &HashMap<String, Audit>) -> crate::models::TechStack {
    let mut detector = TechStackDetector::new();
    if let Some(network) = audits.get(NETWORK_REQUESTS_AUDIT) {
        for url in network
            .detail_items()
            .iter()
            .filter_map(|item| item.get("url").and_then(Value::as_str))
        {
            detector.observe_url(url);
        }
    }
    detector.finish()
}
