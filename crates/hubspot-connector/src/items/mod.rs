//! Contact fetching and normalization.
//!
//! Only the first page of contacts is fetched (up to the configured limit).
//! A `paging.next` cursor in the response is logged and otherwise ignored.

pub mod normalize;

use serde_json::Value;

use crate::client::HubSpotClient;
use crate::error::{IntegrationError, IntegrationResult};
use crate::models::IntegrationItem;

pub use normalize::{UNNAMED_CONTACT, contact_url, normalize_contact};

/// Loads HubSpot contacts as integration items.
#[derive(Clone, Debug)]
pub struct ItemFetcher {
    client: HubSpotClient,
}

impl ItemFetcher {
    #[must_use]
    pub fn new(client: HubSpotClient) -> Self {
        Self { client }
    }

    /// Fetch contacts using a serialized token response.
    pub async fn fetch(&self, credentials: &str) -> IntegrationResult<Vec<IntegrationItem>> {
        let payload: Value = serde_json::from_str(credentials)
            .map_err(|_| IntegrationError::bad_request("Invalid credentials format"))?;

        let access_token = payload
            .get("access_token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| IntegrationError::bad_request("Invalid credentials"))?;

        let page = self.client.list_contacts(access_token).await.map_err(|e| {
            tracing::error!(error = %e, "HubSpot contacts request failed");
            IntegrationError::from(e)
        })?;

        if page.has_more() {
            tracing::debug!(fetched = page.results.len(), "More contacts available; not fetched");
        }

        let items: Vec<IntegrationItem> = page.results.iter().map(normalize_contact).collect();

        tracing::info!(count = items.len(), "Fetched HubSpot contacts");
        Ok(items)
    }
}
