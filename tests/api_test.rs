mod common;

use common::{param, sample_response, FakePagespeed};
use serde_json::Value;
use siteaudit::api;
use siteaudit::models::AppState;
use siteaudit::{Auditor, AuditorConfig};
use tokio::net::TcpListener;

/// Starts the audit API in front of `fake` and returns its base URL.
async fn start_api(fake: &FakePagespeed, api_key: Option<&str>) -> String {
    serve_auditor(fake.auditor(), api_key).await
}

async fn serve_auditor(auditor: Auditor, api_key: Option<&str>) -> String {
    let state = AppState::new(auditor, api_key.map(str::to_string));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api::router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn get(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let fake = FakePagespeed::returning(sample_response()).await;
    let base = start_api(&fake, None).await;

    let (status, body) = get(&format!("{}/health", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn audit_endpoint_returns_normalized_record() {
    let fake = FakePagespeed::returning(sample_response()).await;
    let base = start_api(&fake, Some("server-key")).await;

    let (status, body) = get(&format!("{}/audit?url=example.com&strategy=desktop", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["strategy"], "desktop");
    assert_eq!(body["scores"]["performance"], 92.0);
    assert_eq!(
        body["metrics"]["first-contentful-paint"]["displayValue"],
        "1.2 s"
    );
    assert_eq!(param(&fake.requests()[0], "key"), Some("server-key"));
}

#[tokio::test]
async fn audit_endpoint_defaults_to_mobile() {
    let fake = FakePagespeed::returning(sample_response()).await;
    let base = start_api(&fake, None).await;

    let (status, body) = get(&format!("{}/audit?url=https://example.com", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["strategy"], "mobile");
}

#[tokio::test]
async fn both_strategies_are_combined() {
    let fake = FakePagespeed::returning(sample_response()).await;
    let base = start_api(&fake, None).await;

    let (status, body) = get(&format!("{}/audit?url=example.com&strategy=both", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["mobile"]["strategy"], "mobile");
    assert_eq!(body["desktop"]["strategy"], "desktop");
    assert!(body.get("errors").is_none());
    assert_eq!(fake.requests().len(), 2);
}

#[tokio::test]
async fn unknown_strategy_is_rejected() {
    let fake = FakePagespeed::returning(sample_response()).await;
    let base = start_api(&fake, None).await;

    let (status, body) = get(&format!("{}/audit?url=example.com&strategy=tablet", base)).await;

    assert_eq!(status, 400);
    assert_eq!(body["status"], "error");
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn invalid_url_is_rejected() {
    let fake = FakePagespeed::returning(sample_response()).await;
    let base = start_api(&fake, None).await;

    let (status, body) = get(&format!("{}/audit?url=ftp://example.com", base)).await;

    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().contains("Invalid URL"));
}

#[tokio::test]
async fn upstream_rate_limit_passes_through() {
    let fake = FakePagespeed::failing(
        429,
        r#"{"error": {"code": 429, "message": "Quota exceeded"}}"#,
    )
    .await;
    let base = start_api(&fake, None).await;

    let (status, body) = get(&format!("{}/audit?url=example.com", base)).await;

    assert_eq!(status, 429);
    assert_eq!(
        body["message"],
        "Rate limited by PageSpeed Insights: Quota exceeded"
    );
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let fake = FakePagespeed::failing(503, "").await;
    let base = start_api(&fake, None).await;

    let (status, body) = get(&format!("{}/audit?url=example.com", base)).await;

    assert_eq!(status, 502);
    assert_eq!(
        body["message"],
        "HTTP 503 from PageSpeed Insights: Service Unavailable"
    );
}

#[tokio::test]
async fn missing_url_gets_json_error() {
    let fake = FakePagespeed::returning(sample_response()).await;
    let base = start_api(&fake, None).await;

    for path in ["/audit", "/audit?strategy=desktop"] {
        let (status, body) = get(&format!("{}{}", base, path)).await;

        assert_eq!(status, 400, "{}", path);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("url"));
    }
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn unreachable_upstream_is_gateway_timeout() {
    // Nothing listens on a port we bound and released
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let auditor = Auditor::new(
        AuditorConfig::default()
            .with_endpoint(format!("http://127.0.0.1:{}/runPagespeed", port)),
    )
    .unwrap();
    let base = serve_auditor(auditor, None).await;

    let (status, body) = get(&format!("{}/audit?url=example.com", base)).await;

    assert_eq!(status, 504);
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Network error"));
}
