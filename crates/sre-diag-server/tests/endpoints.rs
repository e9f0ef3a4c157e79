//! HTTP contract tests for `/health`, `/info` and `/metrics`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use serial_test::serial;
use tower::ServiceExt;

use sre_diag_core::report::RuntimeSnapshot;
use sre_diag_core::FixedStats;
use sre_diag_server::{app_state::AppState, config, router};

fn snapshot() -> RuntimeSnapshot {
    RuntimeSnapshot {
        heap_used: 52_428_800,
        heap_max: 4_294_967_296,
        heap_committed: 134_217_728,
        non_heap_used: 0,
        processor_count: 8,
        load_average: 0.75,
        uptime_seconds: 3_661.25,
        gc_collection_count: 0,
        gc_collection_time_seconds: 0.0,
    }
}

fn app_with(cfg: config::ServerConfig) -> Router {
    let state = AppState::with_stats(cfg, Arc::new(FixedStats::new(snapshot())));
    router::build_router(state)
}

fn app() -> Router {
    app_with(config::ServerConfig::default())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String, String) {
    let res = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_is_static_and_healthy() {
    let (status, ct, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct, "application/json");

    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "healthy");
    assert_eq!(v["service"], "backend-service");
    assert_eq!(v["version"], "1.0.0");
    assert_eq!(v["uptime"], "3661 seconds");
    assert!(v["timestamp"].is_string());
    assert_eq!(v["checks"], json!({ "database": "ok", "memory": "ok", "disk": "ok" }));
    assert_eq!(v["checks"].as_object().unwrap().len(), 3);
}

#[tokio::test]
#[serial]
async fn info_lists_endpoints_and_memory() {
    std::env::remove_var("ENVIRONMENT");
    let (status, ct, body) = get(&app(), "/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ct, "application/json");

    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["application"], "Veeva SRE Backend");
    assert_eq!(v["version"], "1.0.0");
    assert_eq!(v["environment"], "dev");
    assert_eq!(v["java_version"], "fixed");
    assert!(v.get("runtime_version").is_none());
    assert_eq!(v["server_info"], "fixed-stats");
    assert_eq!(v["endpoints"], json!(["/health", "/info", "/metrics"]));
    assert_eq!(
        v["memory"],
        json!({ "total": 134_217_728u64, "free": 81_788_928u64, "max": 4_294_967_296u64 })
    );
}

#[tokio::test]
#[serial]
async fn info_reads_environment_per_request() {
    let app = app();

    std::env::set_var("ENVIRONMENT", "staging");
    let (_, _, body) = get(&app, "/info").await;
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["environment"], "staging");

    std::env::set_var("ENVIRONMENT", "");
    let (_, _, body) = get(&app, "/info").await;
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["environment"], "dev");

    std::env::remove_var("ENVIRONMENT");
}

#[tokio::test]
async fn metrics_prometheus_text() {
    let (status, ct, body) = get(&app(), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ct.starts_with("text/plain"), "content-type={ct}");

    assert_eq!(body.lines().count(), 27);
    assert_eq!(body.matches("# HELP ").count(), 9);
    assert_eq!(body.matches("# TYPE ").count(), 9);
    assert!(body.contains("\njvm_memory_heap_used_bytes 52428800\n"));
    assert!(body.contains("\nsystem_cpu_count 8\n"));
    assert!(body.contains("\nsystem_load_average 0.75\n"));
    assert!(body.contains("# TYPE jvm_uptime_seconds counter\njvm_uptime_seconds 3661.25\n"));
    assert!(body.ends_with("jvm_gc_collection_time_seconds 0.0\n"));
}

#[tokio::test]
async fn routes_mounted_under_prefix() {
    let cfg = config::load_from_str("version: 1\nserver:\n  api_prefix: \"/api\"\n").unwrap();
    let app = app_with(cfg);

    for uri in ["/health", "/api/health", "/api/info", "/api/metrics"] {
        let (status, _, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "uri={uri}");
    }
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, _, _) = get(&app(), "/healthz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let res = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn concurrent_requests_stay_well_formed() {
    let app = app();
    let mut tasks = Vec::new();

    for i in 0..48 {
        let app = app.clone();
        let uri = ["/health", "/info", "/metrics"][i % 3];
        tasks.push(tokio::spawn(async move { (uri, get(&app, uri).await) }));
    }

    for task in tasks {
        let (uri, (status, _, body)) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK, "uri={uri}");
        match uri {
            "/metrics" => assert_eq!(body.lines().count(), 27),
            _ => {
                let v: Value = serde_json::from_str(&body).unwrap();
                assert!(v.is_object(), "uri={uri}");
            }
        }
    }
}
