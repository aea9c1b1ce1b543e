//! Shared helpers: a fake PageSpeed endpoint served on a local port.

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use siteaudit::{Auditor, AuditorConfig};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub type QueryPairs = Vec<(String, String)>;
type Responder = Arc<dyn Fn(&QueryPairs) -> (u16, String) + Send + Sync>;

#[derive(Clone)]
struct FakeState {
    responder: Responder,
    requests: Arc<Mutex<Vec<QueryPairs>>>,
}

/// Local stand-in for runPagespeed. Every request's query string is recorded.
pub struct FakePagespeed {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<QueryPairs>>>,
}

impl FakePagespeed {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&QueryPairs) -> (u16, String) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            responder: Arc::new(responder),
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/pagespeedonline/v5/runPagespeed", get(handle))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}/pagespeedonline/v5/runPagespeed", addr),
            requests,
        }
    }

    /// Always answers 200 with `body`.
    pub async fn returning(body: Value) -> Self {
        let body = body.to_string();
        Self::start(move |_| (200, body.clone())).await
    }

    pub async fn failing(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::start(move |_| (status, body.clone())).await
    }

    pub fn requests(&self) -> Vec<QueryPairs> {
        self.requests.lock().unwrap().clone()
    }

    pub fn auditor(&self) -> Auditor {
        Auditor::new(
            AuditorConfig::default()
                .with_endpoint(self.endpoint.clone())
                .with_timeout(Duration::from_secs(10)),
        )
        .unwrap()
    }
}

async fn handle(
    State(state): State<FakeState>,
    Query(params): Query<QueryPairs>,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(params.clone());
    let (status, body) = (state.responder)(&params);
    (StatusCode::from_u16(status).unwrap(), body)
}

pub fn param<'a>(pairs: &'a QueryPairs, name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

pub fn params<'a>(pairs: &'a QueryPairs, name: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .collect()
}

/// A trimmed runPagespeed body with all four categories and five metrics.
pub fn sample_response() -> Value {
    json!({
        "id": "https://example.com/",
        "analysisUTCTimestamp": "2025-01-08T12:00:05.000Z",
        "lighthouseResult": {
            "requestedUrl": "https://example.com",
            "finalUrl": "https://example.com/",
            "fetchTime": "2025-01-08T12:00:00.000Z",
            "categories": {
                "performance": {"id": "performance", "title": "Performance", "score": 0.92},
                "accessibility": {"id": "accessibility", "title": "Accessibility", "score": 0.95},
                "best-practices": {"id": "best-practices", "title": "Best Practices", "score": 0.91},
                "seo": {"id": "seo", "title": "SEO", "score": 0.88}
            },
            "audits": {
                "first-contentful-paint": {
                    "id": "first-contentful-paint",
                    "numericValue": 1200,
                    "displayValue": "1.2 s",
                    "score": 0.95
                },
                "largest-contentful-paint": {
                    "numericValue": 2100,
                    "displayValue": "2.1 s",
                    "score": 0.92
                },
                "total-blocking-time": {
                    "numericValue": 150,
                    "displayValue": "150 ms",
                    "score": 0.98
                },
                "cumulative-layout-shift": {
                    "numericValue": 0.05,
                    "displayValue": "0.05",
                    "score": 0.96
                },
                "speed-index": {
                    "numericValue": 2300,
                    "displayValue": "2.3 s",
                    "score": 0.94
                },
                "network-requests": {
                    "details": {
                        "type": "table",
                        "items": [
                            {"url": "https://example.com/", "resourceType": "Document"},
                            {"url": "https://example.com/jquery.min.js", "resourceType": "Script"},
                            {"url": "https://example.com/bootstrap.min.css", "resourceType": "Stylesheet"},
                            {"url": "https://example.com/react.production.min.js", "resourceType": "Script"}
                        ]
                    }
                }
            }
        }
    })
}

/// `sample_response` with the given audit ids removed.
pub fn response_without_audits(ids: &[&str]) -> Value {
    let mut body = sample_response();
    let audits = body["lighthouseResult"]["audits"].as_object_mut().unwrap();
    for id in ids {
        audits.remove(*id);
    }
    body
}
