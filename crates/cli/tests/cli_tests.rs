use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn helpcenter() -> Command {
    let mut cmd = Command::cargo_bin("helpcenter").unwrap();
    cmd.env_remove("HELPCENTER_SUBDOMAIN")
        .env_remove("HELPCENTER_LOCALE")
        .env_remove("HELPCENTER_BASE_URL");
    cmd
}

#[test]
fn test_cli_help() {
    helpcenter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse and search a Zendesk help center"));
}

#[test]
fn test_cli_search_help() {
    helpcenter()
        .arg("search")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Text to search for"));
}

#[test]
fn test_cli_requires_subdomain() {
    helpcenter().arg("home").assert().failure().stderr(predicate::str::contains("subdomain"));
}

#[test]
fn test_cli_rejects_invalid_subdomain() {
    helpcenter().args(["--subdomain", "not a host", "home"]).assert().failure();
}

#[test]
fn test_cli_short_search_fails_without_request() {
    helpcenter()
        .args(["--subdomain", "acme", "--base-url", "http://127.0.0.1:9", "search", "in"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 characters"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_home_text_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-us/categories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [{"id": 1, "name": "Billing"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/en-us/categories/1/sections.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sections": [{"id": 10, "name": "Invoices"}]
        })))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        helpcenter()
            .args(["--subdomain", "acme", "--base-url", &base_url, "--format", "text", "home"])
            .assert()
    })
    .await
    .unwrap();
    assert.success().stdout(predicate::str::contains("[1] Invoices (section-item)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_reads_environment_and_fails_on_missing_article() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-us/articles/404.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        helpcenter()
            .env("HELPCENTER_SUBDOMAIN", "acme")
            .env("HELPCENTER_BASE_URL", &base_url)
            .args(["article", "404"])
            .assert()
    })
    .await
    .unwrap();
    assert
        .failure()
        .stdout(predicate::str::contains("Failed to load article. Please try again later."));
}
