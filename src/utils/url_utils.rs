use crate::error::{AuditError, Result};
use reqwest::Url;

/// Prepends `https://` to scheme-less input and checks that the result is an
/// absolute http(s) URL with a host. The string is otherwise returned as
/// given (no trailing slash is added).
pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuditError::invalid_url(raw, "URL is empty"));
    }

    let lower = trimmed.to_ascii_lowercase();
    let url = if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        return Err(AuditError::invalid_url(
            raw,
            "only http and https URLs can be audited",
        ));
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&url).map_err(|e| AuditError::invalid_url(raw, e.to_string()))?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(AuditError::invalid_url(raw, "URL has no host")),
    }
}
