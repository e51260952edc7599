//! Configuration for the HubSpot connector.

use std::time::Duration;

use anyhow::Context;

/// HubSpot endpoint and lifecycle constants.
pub mod api {
    use std::time::Duration;

    /// Consent screen shown to the end user.
    pub const AUTHORIZE_URL: &str = "https://app.hubspot.com/oauth/authorize";

    /// Base URL for server-to-server API calls (token exchange, CRM objects).
    pub const API_BASE_URL: &str = "https://api.hubapi.com";

    /// Base path for links to contacts in the HubSpot web app.
    pub const CONTACT_URL_BASE: &str = "https://app.hubspot.com/contacts";

    /// Token endpoint path, relative to the API base.
    pub const TOKEN_PATH: &str = "/oauth/v1/token";

    /// Contacts listing path, relative to the API base.
    pub const CONTACTS_PATH: &str = "/crm/v3/objects/contacts";

    /// Scopes requested when none are configured.
    pub const DEFAULT_SCOPES: &[&str] =
        &["crm.objects.contacts.read", "crm.schemas.contacts.read", "crm.objects.contacts.write"];

    /// Lifetime of a pending authorization state (10 minutes).
    pub const STATE_TTL: Duration = Duration::from_secs(600);

    /// Lifetime of an unread credential payload (10 minutes).
    pub const CREDENTIALS_TTL: Duration = Duration::from_secs(600);

    /// Records requested from the contacts listing. Only one page is fetched.
    pub const CONTACTS_PAGE_LIMIT: u32 = 100;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Contact property sets for API requests.
pub mod fields {
    /// Properties requested for every contact.
    pub const CONTACT: &[&str] = &[
        "firstname",
        "lastname",
        "email",
        "company",
        "phone",
        "createdate",
        "lastmodifieddate",
    ];
}

/// Connector configuration.
///
/// Client credentials are always supplied from outside (environment or
/// flags); only the public HubSpot endpoints have built-in defaults.
#[derive(Clone)]
pub struct Config {
    /// HubSpot app client id.
    pub client_id: String,

    /// HubSpot app client secret.
    pub client_secret: String,

    /// Redirect URI registered with the HubSpot app.
    pub redirect_uri: String,

    /// Scopes requested on the consent screen.
    pub scopes: Vec<String>,

    /// Consent screen URL (for testing with mock servers).
    pub authorize_url: String,

    /// API base URL (for testing with mock servers).
    pub api_base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Lifetime of a pending authorization state.
    pub state_ttl: Duration,

    /// Lifetime of an unread credential payload.
    pub credentials_ttl: Duration,

    /// Page size for the contacts listing.
    pub contacts_page_limit: u32,
}

impl Config {
    /// Create a configuration for the given HubSpot app.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        scopes: Vec<String>,
    ) -> Self {
        let scopes = if scopes.is_empty() {
            api::DEFAULT_SCOPES.iter().map(|s| (*s).to_string()).collect()
        } else {
            scopes
        };

        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes,
            authorize_url: api::AUTHORIZE_URL.to_string(),
            api_base_url: api::API_BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            state_ttl: api::STATE_TTL,
            credentials_ttl: api::CREDENTIALS_TTL,
            contacts_page_limit: api::CONTACTS_PAGE_LIMIT,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
            redirect_uri: "http://localhost:8000/integrations/hubspot/oauth2callback".to_string(),
            scopes: vec!["crm.objects.contacts.read".to_string()],
            authorize_url: format!("{}/oauth/authorize", base_url),
            api_base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            state_ttl: api::STATE_TTL,
            credentials_ttl: api::CREDENTIALS_TTL,
            contacts_page_limit: api::CONTACTS_PAGE_LIMIT,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `HUBSPOT_CLIENT_ID`, `HUBSPOT_CLIENT_SECRET` and
    /// `HUBSPOT_REDIRECT_URI` (required) and `HUBSPOT_SCOPES`
    /// (optional, space separated).
    ///
    /// # Errors
    ///
    /// Returns error if a required variable is missing.
    pub fn from_env() -> anyhow::Result<Self> {
        let client_id = required_var("HUBSPOT_CLIENT_ID")?;
        let client_secret = required_var("HUBSPOT_CLIENT_SECRET")?;
        let redirect_uri = required_var("HUBSPOT_REDIRECT_URI")?;
        let scopes = std::env::var("HUBSPOT_SCOPES")
            .map(|s| parse_scopes(&s))
            .unwrap_or_default();

        Ok(Self::new(client_id, client_secret, redirect_uri, scopes))
    }

    /// Scopes joined the way the consent screen expects them.
    #[must_use]
    pub fn scope_param(&self) -> String {
        self.scopes.join(" ")
    }

    /// Full token endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}{}", self.api_base_url, api::TOKEN_PATH)
    }

    /// Full contacts listing URL.
    #[must_use]
    pub fn contacts_url(&self) -> String {
        format!("{}{}", self.api_base_url, api::CONTACTS_PATH)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn required_var(name: &str) -> anyhow::Result<String> {
    let value = std::env::var(name).with_context(|| format!("{name} must be set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("{name} must not be empty");
    }
    Ok(value)
}

/// Split a space or comma separated scope list.
fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
