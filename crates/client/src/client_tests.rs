use helpcenter_core::{ContentGateway, FetchError, HelpCenterApi, Resource, WidgetConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::{HelpCenterClient, truncate};

fn client_for(server: &MockServer, locale: &str) -> HelpCenterClient {
    let config = WidgetConfig::new("acme").unwrap().with_locale(locale).with_base_url(&server.uri());
    HelpCenterClient::new(&config).unwrap()
}

#[test]
fn test_default_url_shapes() {
    let config = WidgetConfig::new("acme").unwrap();
    let client = HelpCenterClient::new(&config).unwrap();
    assert_eq!(
        client.url_for(&Resource::Categories),
        "https://acme.zendesk.com/api/v2/help_center/en-us/categories.json"
    );
    assert_eq!(
        client.url_for(&Resource::Search { query: "inv".to_owned() }),
        "https://acme.zendesk.com/api/v2/help_center/articles/search"
    );
}

#[tokio::test]
async fn test_locale_scoped_request_sends_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fr-fr/sections/10/articles.json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "articles": [{"id": 5, "title": "Invoice FAQ", "body": "<p>x</p>"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "fr-fr");
    let articles = client.section_articles(10).await.unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Invoice FAQ");
}

#[tokio::test]
async fn test_search_is_not_locale_scoped_and_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/articles/search"))
        .and(query_param("query", "reset password & 2fa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"id": 7, "title": "Two-factor auth"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "de");
    let results = client.search("reset password & 2fa").await.unwrap();
    assert_eq!(results[0].id, 7);
}

#[tokio::test]
async fn test_non_success_status_carries_code_and_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-us/categories.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "en-us");
    let err = client.fetch(&Resource::Categories).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    match err {
        FetchError::Status { body, .. } => assert_eq!(body, "maintenance"),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en-us/articles/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, "en-us");
    let err = client.fetch(&Resource::Article { article_id: 5 }).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = WidgetConfig::new("acme").unwrap().with_base_url(&uri);
    let client = HelpCenterClient::new(&config).unwrap();
    let err = client.fetch(&Resource::Categories).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[test]
fn test_truncate_unicode_boundary() {
    let s = "привет";
    assert_eq!(truncate(s, 3), "п");
    assert_eq!(truncate(s, 4), "пр");
    assert_eq!(truncate("hello", 10), "hello");
}
