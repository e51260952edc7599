//! HubSpot API client.
//!
//! Provides async HTTP access to:
//! - the consent screen URL (built locally, never fetched)
//! - the OAuth token endpoint (authorization-code exchange)
//! - the CRM contacts listing (single page)
//!
//! Requests are sent once; there is no retry or rate limiting.

use reqwest::Client;
use url::Url;

use crate::config::{Config, fields};
use crate::error::{CONTACTS_FALLBACK_MESSAGE, ClientError, ClientResult};
use crate::models::ContactPage;

/// HubSpot API client.
#[derive(Clone)]
pub struct HubSpotClient {
    /// HTTP client.
    client: Client,

    /// App client id.
    client_id: String,

    /// App client secret.
    client_secret: String,

    /// Registered redirect URI.
    redirect_uri: String,

    /// Space-joined scope list.
    scope: String,

    /// Consent screen URL.
    authorize_url: String,

    /// Token endpoint URL.
    token_url: String,

    /// Contacts listing URL.
    contacts_url: String,

    /// Contacts page size.
    page_limit: u32,
}

impl HubSpotClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope_param(),
            authorize_url: config.authorize_url.clone(),
            token_url: config.token_url(),
            contacts_url: config.contacts_url(),
            page_limit: config.contacts_page_limit,
        })
    }

    /// Build the consent screen URL carrying `state`.
    ///
    /// # Errors
    ///
    /// Returns error if the configured authorize URL is invalid.
    pub fn authorization_url(&self, state: &str) -> ClientResult<Url> {
        let url = Url::parse_with_params(
            &self.authorize_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("scope", self.scope.as_str()),
                ("state", state),
            ],
        )?;
        Ok(url)
    }

    /// Exchange an authorization code for the raw token response.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn exchange_code(&self, code: &str) -> ClientResult<serde_json::Value> {
        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self.client.post(&self.token_url).form(&form).send().await?;
        let response = handle_response(response, "Failed to exchange authorization code").await?;

        Ok(response.json().await?)
    }

    /// Fetch the first page of contacts.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-success status, or an
    /// unparseable body.
    pub async fn list_contacts(&self, access_token: &str) -> ClientResult<ContactPage> {
        let mut params = vec![("limit", self.page_limit.to_string())];
        params.extend(fields::CONTACT.iter().map(|p| ("properties", (*p).to_string())));

        let response = self
            .client
            .get(&self.contacts_url)
            .bearer_auth(access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(&params)
            .send()
            .await?;

        let response = handle_response(response, CONTACTS_FALLBACK_MESSAGE).await?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Map non-success statuses to [`ClientError::Upstream`].
///
/// The message is taken from HubSpot's `message` field, or `fallback` when the
/// body has none.
async fn handle_response(
    response: reqwest::Response,
    fallback: &str,
) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = upstream_message(&text).unwrap_or_else(|| fallback.to_string());

    Err(ClientError::upstream(status.as_u16(), message))
}

fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message").and_then(|m| m.as_str()).map(str::to_string)
}

impl std::fmt::Debug for HubSpotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubSpotClient")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message() {
        assert_eq!(upstream_message(r#"{"message":"forbidden"}"#).as_deref(), Some("forbidden"));
        assert!(upstream_message(r#"{"status":"error"}"#).is_none());
        assert!(upstream_message("<html>").is_none());
        assert!(upstream_message(r#"{"message": 5}"#).is_none());
    }

    #[test]
    fn test_authorization_url_params() {
        let config = Config::for_testing("http://localhost:1234");
        let client = HubSpotClient::new(&config).unwrap();
        let url = client.authorization_url(r#"{"state":"x"}"#).unwrap();

        let pairs: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["client_id"], "test-client-id");
        assert_eq!(pairs["redirect_uri"], config.redirect_uri);
        assert_eq!(pairs["scope"], "crm.objects.contacts.read");
        assert_eq!(pairs["state"], r#"{"state":"x"}"#);
        assert!(url.as_str().starts_with("http://localhost:1234/oauth/authorize?"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = HubSpotClient::new(&Config::for_testing("http://localhost")).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-client-secret"));
        assert!(debug.contains("client_id"));
    }
}
