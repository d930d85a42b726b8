//! Deploy client against a stub deployment API.

use serde_json::json;
use sitegen_core::{SiteDescriptor, SiteKind};
use sitegen_deploy::{DeployClient, DeployPhase, DeploymentResult};
use sitegen_renderer::{render, RenderedDocument};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEPLOY_PATH: &str = "/v13/deployments";

fn document() -> RenderedDocument {
    render(
        &SiteDescriptor::new()
            .with("name", "My Site")
            .with("description", "hello")
            .with("color", "#f0f0f0"),
        SiteKind::Landing,
    )
}

async fn run_deploy(server: &MockServer, token: &str, project: &str) -> DeploymentResult {
    let client = DeployClient::new(format!("{}{DEPLOY_PATH}", server.uri()));
    let token = token.to_string();
    let project = project.to_string();
    tokio::task::spawn_blocking(move || client.deploy(&document(), &token, &project))
        .await
        .expect("deploy task panicked")
}

#[tokio::test]
async fn success_returns_https_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEPLOY_PATH))
        .and(header("authorization", "Bearer tok_123"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "my-site",
            "files": [{ "file": "index.html", "data": document().as_str() }],
            "target": "production"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "url": "my-site-abc123.example.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = run_deploy(&server, "tok_123", "my-site").await;
    assert_eq!(
        result,
        DeploymentResult::Success { url: "https://my-site-abc123.example.com".into() }
    );
}

#[tokio::test]
async fn unauthorized_is_failure_with_authorization_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEPLOY_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let result = run_deploy(&server, "bad", "my-site").await;
    let reason = result.reason().expect("failure");
    assert!(reason.contains("authorization"), "reason: {reason}");
    assert!(reason.contains("401"), "reason: {reason}");
}

#[tokio::test]
async fn empty_credential_still_sends_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(DEPLOY_PATH))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": "forbidden", "message": "Missing token" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = run_deploy(&server, "", "my-site").await;
    let reason = result.reason().expect("failure");
    assert!(reason.contains("Missing token"), "reason: {reason}");
}

#[tokio::test]
async fn server_error_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let result = run_deploy(&server, "tok", "my-site").await;
    let reason = result.reason().expect("failure");
    assert!(reason.contains("500"));
    assert!(reason.contains("upstream exploded"));
}

#[tokio::test]
async fn success_without_url_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "dpl_1" })))
        .mount(&server)
        .await;

    let result = run_deploy(&server, "tok", "my-site").await;
    assert!(result.reason().expect("failure").contains("no `url`"));
}

#[tokio::test]
async fn success_with_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_string("ok"))
        .mount(&server)
        .await;

    let result = run_deploy(&server, "tok", "my-site").await;
    assert!(result.reason().expect("failure").contains("invalid JSON"));
}

#[tokio::test]
async fn observer_sees_in_flight_then_succeeded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "x.example.com" })))
        .mount(&server)
        .await;

    let client = DeployClient::new(format!("{}{DEPLOY_PATH}", server.uri()));
    let phases = tokio::task::spawn_blocking(move || {
        let mut phases = Vec::new();
        client.deploy_observed(&document(), "tok", "p", |p| phases.push(p.clone()));
        phases
    })
    .await
    .unwrap();

    assert_eq!(
        phases,
        vec![
            DeployPhase::InFlight,
            DeployPhase::Succeeded { url: "https://x.example.com".into() },
        ]
    );
}

#[tokio::test]
async fn overlapping_deploys_race_independently() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": "x.example.com" })))
        .expect(2)
        .mount(&server)
        .await;

    let client = DeployClient::new(format!("{}{DEPLOY_PATH}", server.uri()));
    let a = {
        let c = client.clone();
        tokio::task::spawn_blocking(move || c.deploy(&document(), "tok", "p"))
    };
    let b = tokio::task::spawn_blocking(move || client.deploy(&document(), "tok", "p"));
    assert!(a.await.unwrap().is_success());
    assert!(b.await.unwrap().is_success());
}
