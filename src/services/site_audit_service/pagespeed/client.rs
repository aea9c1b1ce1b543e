use crate::config::AuditorConfig;
use crate::error::{AuditError, Result};
use crate::models::pagespeed::PagespeedErrorBody;
use crate::models::{AuditRequest, AuditResult, CombinedResults, PagespeedResponse, Strategy};
use crate::services::site_audit_service::compute::{extract_result, CATEGORY_KEYS};
use chrono::Utc;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};

// Longest upstream body echoed back in an error message
const MAX_ERROR_BODY: usize = 300;

/// Client for the PageSpeed Insights runPagespeed endpoint.
///
/// Each call to [`Auditor::audit`] is exactly one GET request. There is no
/// retry; failures come back classified as [`AuditError`].
#[derive(Debug, Clone)]
pub struct Auditor {
    client: Client,
    config: AuditorConfig,
}

/// Per-strategy outcome of [`Auditor::audit_both`].
#[derive(Debug)]
pub struct StrategyOutcomes {
    pub mobile: Result<AuditResult>,
    pub desktop: Result<AuditResult>,
}

impl StrategyOutcomes {
    /// Splits into the successful results and the errors of failed branches.
    pub fn into_combined(self) -> (CombinedResults, Vec<(Strategy, AuditError)>) {
        let mut combined = CombinedResults::default();
        let mut failures = Vec::new();

        match self.mobile {
            Ok(result) => combined.mobile = Some(result),
            Err(e) => failures.push((Strategy::Mobile, e)),
        }
        match self.desktop {
            Ok(result) => combined.desktop = Some(result),
            Err(e) => failures.push((Strategy::Desktop, e)),
        }
        for (strategy, e) in &failures {
            combined.errors.insert(*strategy, e.to_string());
        }

        (combined, failures)
    }
}

impl Auditor {
    pub fn new(config: AuditorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("siteaudit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AuditError::ClientSetup)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AuditorConfig {
        &self.config
    }

    pub async fn audit(&self, request: &AuditRequest) -> Result<AuditResult> {
        info!(
            "🔍 Auditing {} ({} view)...",
            request.url(),
            request.strategy()
        );
        let response = self.fetch(request).await?;
        let result = extract_result(response, request, Utc::now())?;
        debug!(
            "Extracted {} metrics for {} ({})",
            result.metrics.len(),
            result.url,
            result.strategy
        );
        Ok(result)
    }

    /// Audits the request's URL under both strategies concurrently. One
    /// branch failing leaves the other untouched.
    pub async fn audit_both(&self, request: &AuditRequest) -> StrategyOutcomes {
        let mobile = request.with_strategy(Strategy::Mobile);
        let desktop = request.with_strategy(Strategy::Desktop);
        let (mobile, desktop) = futures::join!(self.audit(&mobile), self.audit(&desktop));
        StrategyOutcomes { mobile, desktop }
    }

    async fn fetch(&self, request: &AuditRequest) -> Result<PagespeedResponse> {
        let mut query: Vec<(&str, &str)> = vec![
            ("url", request.url()),
            ("strategy", request.strategy().as_str()),
        ];
        query.extend(CATEGORY_KEYS.iter().map(|category| ("category", *category)));
        if let Some(key) = request.api_key() {
            query.push(("key", key));
        }

        // The query string carries the API key, keep the URL out of errors
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| AuditError::Network(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuditError::Network(e.without_url()))?;

        if !status.is_success() {
            let err = classify_http_error(status, &body);
            warn!("❌ PageSpeed request for {} failed: {}", request.url(), err);
            return Err(err);
        }

        parse_response(&body)
    }
}

pub fn parse_response(body: &str) -> Result<PagespeedResponse> {
    serde_json::from_str(body)
        .map_err(|e| AuditError::Parse(format!("invalid PageSpeed response: {}", e)))
}

/// Maps a non-2xx response to an error, preferring the message inside
/// the upstream `{"error": {...}}` envelope.
pub fn classify_http_error(status: StatusCode, body: &str) -> AuditError {
    let message = serde_json::from_str::<PagespeedErrorBody>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| fallback_message(status, body));

    if status == StatusCode::TOO_MANY_REQUESTS {
        AuditError::RateLimited { message }
    } else {
        AuditError::Http {
            status: status.as_u16(),
            message,
        }
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string();
    }
    body.chars().take(MAX_ERROR_BODY).collect()
}
