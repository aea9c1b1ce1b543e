use crate::error::AuditError;
use crate::models::{AppState, AuditRequest, ParamsRunAudit, Strategy};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use serde_json::json;
use std::sync::Arc;

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// `GET /audit?url=<url>&strategy=mobile|desktop|both`
pub async fn run_audit_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ParamsRunAudit>, QueryRejection>,
) -> Response {
    // A missing or malformed `url` still gets the JSON error envelope
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, &rejection.body_text()),
    };
    info!(
        "Started audit handler for {} ({})",
        params.url,
        params.strategy.as_deref().unwrap_or("mobile")
    );

    let requested = params.strategy.as_deref().unwrap_or("mobile").trim();
    let run_both = requested.eq_ignore_ascii_case("both");
    let strategy = if run_both {
        Strategy::Mobile
    } else {
        match requested.parse::<Strategy>() {
            Ok(strategy) => strategy,
            Err(message) => return error_response(StatusCode::BAD_REQUEST, &message),
        }
    };

    let request = match AuditRequest::new(&params.url, strategy) {
        Ok(request) => request.with_api_key(state.api_key.clone()),
        Err(e) => return audit_error_response(&e),
    };

    if run_both {
        let (combined, failures) = state.auditor.audit_both(&request).await.into_combined();
        if combined.mobile.is_none() && combined.desktop.is_none() {
            if let Some((_, e)) = failures.first() {
                return audit_error_response(e);
            }
        }
        return (StatusCode::OK, Json(combined)).into_response();
    }

    match state.auditor.audit(&request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => audit_error_response(&e),
    }
}

pub fn status_for(err: &AuditError) -> StatusCode {
    match err {
        AuditError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
        AuditError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        AuditError::Network(_) => StatusCode::GATEWAY_TIMEOUT,
        AuditError::Http { .. } | AuditError::Parse(_) => StatusCode::BAD_GATEWAY,
        AuditError::ClientSetup(_) | AuditError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn audit_error_response(err: &AuditError) -> Response {
    let status = status_for(err);
    if status.is_server_error() {
        error!("❌ Audit failed: {}", err);
    }
    error_response(status, &err.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "status": "error",
            "message": message
        })),
    )
        .into_response()
}
