//! End-to-end tests for the `/api/*` pass-through routes.

mod common;

use std::time::Duration;

use common::{
    start_gateway, start_gateway_with, start_mock_upstream, start_silent_upstream, test_config,
    unreachable_addr,
};
use content_agent::config::{UpstreamConfig, UpstreamsConfig};

#[tokio::test]
async fn relays_upstream_body_exactly() {
    let upstream_body = r#"{"success":true,"data":{"topic":"AI","zeta":1,"alpha":[1,2]},"extra":"kept"}"#;
    let upstream = start_mock_upstream(200, upstream_body).await;
    let gateway = start_gateway(upstream.upstreams()).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/research"))
        .header("content-type", "application/json")
        .body(r#"{"topic":"AI"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(res.text().await.unwrap(), upstream_body);

    let requests = upstream.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/v1/research");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].body, r#"{"topic":"AI"}"#);

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn logical_failure_is_relayed_with_200() {
    let upstream_body = r#"{"success":false,"message":"quota exceeded"}"#;
    let upstream = start_mock_upstream(200, upstream_body).await;
    let gateway = start_gateway(upstream.upstreams()).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/script"))
        .json(&serde_json::json!({ "niche": "tech", "topic": "rust", "platform": "youtube" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), upstream_body);
    assert_eq!(upstream.requests()[0].path, "/api/v1/script");

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn upstream_status_is_not_interpreted() {
    let upstream_body = r#"{"success":false,"message":"bad niche"}"#;
    let upstream = start_mock_upstream(400, upstream_body).await;
    let gateway = start_gateway(upstream.upstreams()).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/topics"))
        .json(&serde_json::json!({ "niche": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), upstream_body);

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn non_json_upstream_gives_fixed_500() {
    let upstream = start_mock_upstream(502, "<html>Bad Gateway</html>").await;
    let gateway = start_gateway(upstream.upstreams()).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/research"))
        .json(&serde_json::json!({ "topic": "AI" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"success":false,"message":"Failed to fetch research data"}"#
    );

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn unreachable_upstream_gives_fixed_500() {
    let dead = unreachable_addr().await;
    let upstreams = UpstreamsConfig {
        research: UpstreamConfig::new(format!("http://{}/api/v1/research", dead)),
        script: UpstreamConfig::new(format!("http://{}/api/v1/script", dead)),
        topics: UpstreamConfig::new(format!("http://{}/api/v1/topics", dead)),
    };
    let gateway = start_gateway(upstreams).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/script"))
        .json(&serde_json::json!({ "niche": "n", "topic": "t", "platform": "tiktok" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"success":false,"message":"Failed to generate script"}"#
    );

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn invalid_request_json_never_reaches_upstream() {
    let upstream = start_mock_upstream(200, r#"{"success":true,"data":{}}"#).await;
    let gateway = start_gateway(upstream.upstreams()).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/topics"))
        .header("content-type", "application/json")
        .body("niche=travel")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"success":false,"message":"Failed to fetch topics"}"#
    );
    assert!(upstream.requests().is_empty());

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn reloaded_upstreams_take_effect() {
    let old = start_mock_upstream(200, r#"{"from":"old"}"#).await;
    let new = start_mock_upstream(200, r#"{"from":"new"}"#).await;
    let gateway = start_gateway(old.upstreams()).await;
    let client = reqwest::Client::new();

    let body = client
        .post(gateway.url("/api/topics"))
        .json(&serde_json::json!({ "niche": "x" }))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, r#"{"from":"old"}"#);

    gateway.upstream_updates.send(new.upstreams()).unwrap();

    let mut switched = false;
    for _ in 0..50 {
        let body = client
            .post(gateway.url("/api/topics"))
            .json(&serde_json::json!({ "niche": "x" }))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        if body == r#"{"from":"new"}"# {
            switched = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(switched, "gateway never picked up the new upstream table");

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn health_reports_ok() {
    let upstream = start_mock_upstream(200, "{}").await;
    let gateway = start_gateway(upstream.upstreams()).await;

    let res = reqwest::get(gateway.url("/health")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    let json: serde_json::Value = res.json().await.unwrap();
    assert_eq!(json["status"], "ok");

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn upstream_deadline_gives_fixed_500() {
    let upstream = start_silent_upstream().await;
    let mut config = test_config(upstream.upstreams());
    config.timeouts.upstream_secs = 1;
    config.timeouts.request_secs = 5;
    let gateway = start_gateway_with(config).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/research"))
        .json(&serde_json::json!({ "topic": "AI" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"success":false,"message":"Failed to fetch research data"}"#
    );

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn request_deadline_answers_408() {
    let upstream = start_silent_upstream().await;
    let mut config = test_config(upstream.upstreams());
    config.timeouts.upstream_secs = 30;
    config.timeouts.request_secs = 1;
    let gateway = start_gateway_with(config).await;

    let res = reqwest::Client::new()
        .post(gateway.url("/api/topics"))
        .json(&serde_json::json!({ "niche": "x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 408);

    gateway.shutdown.trigger();
}
