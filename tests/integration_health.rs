// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for health probes using wiremock.
//!
//! Covers:
//! - JSON health bodies
//! - Non-200 statuses
//! - Timeouts and refused connections
//! - Report ordering in `run_checks`

use std::time::Duration;

use envdesk::config::Settings;
use envdesk::health::{
    HealthBody, ProbeStatus, ServiceTarget, http_client, probe_http, probe_tcp, run_checks,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

// =============================================================================
// probe_http tests
// =============================================================================

#[tokio::test]
async fn test_probe_http_up_with_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ok", "service": "chatbot-api"})),
        )
        .mount(&mock_server)
        .await;

    let client = http_client(Duration::from_secs(3)).unwrap();
    let target = ServiceTarget::new("Backend API", format!("{}/api/health", mock_server.uri()));
    let report = probe_http(&client, &target).await;

    assert_eq!(report.status, ProbeStatus::Up);
    assert_eq!(
        report.body,
        Some(HealthBody {
            status: Some("ok".to_string()),
            service: Some("chatbot-api".to_string()),
        })
    );
    assert!(report.format_line().ends_with("status=ok service=chatbot-api"));
}

#[tokio::test]
async fn test_probe_http_up_without_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let client = http_client(Duration::from_secs(3)).unwrap();
    let target = ServiceTarget::new("Frontend (Local)", mock_server.uri());
    let report = probe_http(&client, &target).await;

    assert_eq!(report.status, ProbeStatus::Up);
    assert!(report.body.is_none());
}

#[tokio::test]
async fn test_probe_http_warn_on_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = http_client(Duration::from_secs(3)).unwrap();
    let target = ServiceTarget::new("Backend API", format!("{}/api/health", mock_server.uri()));
    let report = probe_http(&client, &target).await;

    assert_eq!(report.status, ProbeStatus::Warn(503));
    assert_eq!(report.status.to_string(), "WARN (503)");
}

#[tokio::test]
async fn test_probe_http_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = http_client(Duration::from_millis(200)).unwrap();
    let target = ServiceTarget::new("Slow", mock_server.uri());
    let report = probe_http(&client, &target).await;

    assert_eq!(report.status, ProbeStatus::Timeout);
}

#[tokio::test]
async fn test_probe_http_down_when_refused() {
    let port = closed_port().await;
    let client = http_client(Duration::from_secs(3)).unwrap();
    let target = ServiceTarget::new("Gone", format!("http://127.0.0.1:{port}/api/health"));
    let report = probe_http(&client, &target).await;

    assert_eq!(report.status, ProbeStatus::Down);
    assert!(!report.status.is_up());
}

// =============================================================================
// probe_tcp tests
// =============================================================================

#[tokio::test]
async fn test_probe_tcp_up() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let report = probe_tcp("MongoDB", "127.0.0.1", port, Duration::from_secs(3)).await;
    assert_eq!(report.status, ProbeStatus::Up);
    assert_eq!(report.target, format!("127.0.0.1:{port}"));
}

// =============================================================================
// run_checks tests
// =============================================================================

#[tokio::test]
async fn test_run_checks_reports_in_target_order() {
    let healthy = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(100)))
        .mount(&healthy)
        .await;
    let failing = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&failing)
        .await;
    let mongo = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let mut settings = Settings::default();
    settings.health.services = vec![
        ServiceTarget::new("First", healthy.uri()),
        ServiceTarget::new("Second", failing.uri()),
    ];
    settings.mongo.host = "127.0.0.1".to_string();
    settings.mongo.port = mongo.local_addr().unwrap().port();

    let summary = run_checks(&settings, true).await.unwrap();
    let names: Vec<&str> = summary.reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "MongoDB"]);
    assert!(!summary.all_healthy());
    let unhealthy: Vec<&str> = summary.unhealthy().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(unhealthy, ["Second"]);

    let without_mongo = run_checks(&settings, false).await.unwrap();
    assert_eq!(without_mongo.reports.len(), 2);
}

#[tokio::test]
async fn test_run_checks_rejects_bad_url() {
    let mut settings = Settings::default();
    settings.health.services = vec![ServiceTarget::new("Broken", "not a url")];
    assert!(run_checks(&settings, false).await.is_err());
}
