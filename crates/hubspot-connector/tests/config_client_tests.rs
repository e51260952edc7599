//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hubspot_connector::client::HubSpotClient;
use hubspot_connector::config::{Config, api};
use hubspot_connector::error::ClientError;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_empty_scopes_use_defaults() {
    let config = Config::new("id", "secret", "http://localhost/cb", Vec::new());
    assert_eq!(config.scopes.len(), api::DEFAULT_SCOPES.len());
    assert!(config.scope_param().contains("crm.objects.contacts.read"));
}

#[test]
fn test_config_explicit_scopes_are_kept() {
    let config = Config::new("id", "secret", "http://localhost/cb", vec!["a".into(), "b".into()]);
    assert_eq!(config.scope_param(), "a b");
}

#[test]
fn test_config_urls_follow_base() {
    let config = Config::for_testing("http://127.0.0.1:9999");
    assert_eq!(config.token_url(), "http://127.0.0.1:9999/oauth/v1/token");
    assert_eq!(config.contacts_url(), "http://127.0.0.1:9999/crm/v3/objects/contacts");
}

#[test]
fn test_config_debug_hides_secret() {
    let config = Config::new("id", "super-secret-value", "http://localhost/cb", Vec::new());
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-value"));
    assert!(debug.contains("client_id"));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_debug_hides_secret() {
    let config = Config::new("id", "super-secret-value", "http://localhost/cb", Vec::new());
    let client = HubSpotClient::new(&config).unwrap();
    assert!(!format!("{client:?}").contains("super-secret-value"));
}

#[test]
fn test_authorization_url_encodes_state() {
    let config = Config::for_testing("http://127.0.0.1:9999");
    let client = HubSpotClient::new(&config).unwrap();

    let state = r#"{"state":"a b&c","user_id":"u1","org_id":"o1"}"#;
    let url = client.authorization_url(state).unwrap();

    let (_, decoded) = url.query_pairs().find(|(k, _)| k == "state").unwrap();
    assert_eq!(decoded, state);
    assert!(!url.as_str().contains("a b&c"));
}

#[test]
fn test_authorization_url_rejects_bad_base() {
    let mut config = Config::for_testing("http://127.0.0.1:9999");
    config.authorize_url = "not a url".to_string();
    let client = HubSpotClient::new(&config).unwrap();

    assert!(matches!(client.authorization_url("s"), Err(ClientError::Url(_))));
}

#[tokio::test]
async fn test_exchange_code_returns_raw_body() {
    let mock_server = MockServer::start().await;
    let body = json!({"access_token": "a", "refresh_token": "r", "expires_in": 1800, "extra": [1, 2]});
    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let client = HubSpotClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    assert_eq!(client.exchange_code("c").await.unwrap(), body);
}

#[tokio::test]
async fn test_exchange_code_failure_keeps_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = HubSpotClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    match client.exchange_code("c").await {
        Err(ClientError::Upstream { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to exchange authorization code");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}
