//! HubSpot OAuth 2.0 authorization-code flow.
//!
//! 1. [`OAuthFlow::authorize`] stores a random state and returns the consent URL
//! 2. HubSpot redirects back; [`OAuthFlow::callback`] verifies the state,
//!    exchanges the code and stores the token response
//! 3. [`OAuthFlow::credentials`] hands the token response out exactly once
//!
//! States and credentials both expire after ten minutes if never consumed.

pub mod credentials;
pub mod state;

use std::sync::Arc;

use futures::future;
use serde_json::Value;

use crate::client::HubSpotClient;
use crate::config::Config;
use crate::error::{ClientError, IntegrationError, IntegrationResult};
use crate::models::{CallbackQuery, Identity};
use crate::store::KeyValueStore;

pub use credentials::CredentialStore;
pub use state::{StateManager, VerifiedCallback};

/// The complete authorization flow for one HubSpot app.
#[derive(Clone, Debug)]
pub struct OAuthFlow {
    client: HubSpotClient,
    states: StateManager,
    credentials: CredentialStore,
}

impl OAuthFlow {
    #[must_use]
    pub fn new(config: &Config, client: HubSpotClient, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            states: StateManager::new(Arc::clone(&store), client.clone(), config.state_ttl),
            credentials: CredentialStore::new(store, config.credentials_ttl),
            client,
        }
    }

    /// Begin authorization for a user and return the consent screen URL.
    pub async fn authorize(&self, user_id: &str, org_id: &str) -> IntegrationResult<String> {
        self.states.begin(&Identity::new(user_id, org_id)).await
    }

    /// Complete authorization from HubSpot's redirect.
    ///
    /// The state is consumed while the code is exchanged. Both must succeed
    /// before the token response is stored.
    pub async fn callback(&self, query: &CallbackQuery) -> IntegrationResult<Identity> {
        let verified = self.states.verify(query).await?;

        let (exchanged, consumed) =
            future::join(self.client.exchange_code(&verified.code), self.states.consume(&verified))
                .await;

        let payload = exchanged.map_err(exchange_error)?;
        consumed?;

        self.credentials.save(&verified.identity, &payload).await?;

        tracing::info!(
            user_id = %verified.identity.user_id,
            org_id = %verified.identity.org_id,
            "Completed authorization"
        );

        Ok(verified.identity)
    }

    /// Take the stored token response for a user. Succeeds once per authorization.
    pub async fn credentials(&self, user_id: &str, org_id: &str) -> IntegrationResult<Value> {
        self.credentials.take(&Identity::new(user_id, org_id)).await
    }
}

/// A rejected code is the caller's problem; transport failures are ours.
fn exchange_error(err: ClientError) -> IntegrationError {
    match err {
        ClientError::Upstream { status, message } => {
            tracing::warn!(status, message = %message, "Token exchange rejected");
            IntegrationError::bad_request(message)
        }
        other => IntegrationError::internal(other.to_string()),
    }
}
