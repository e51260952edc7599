//! Authorization state: generation, verification and one-time consumption.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::client::HubSpotClient;
use crate::error::{IntegrationError, IntegrationResult};
use crate::models::{AuthorizationState, CallbackQuery, Identity};
use crate::store::KeyValueStore;

/// Detail returned for every state mismatch, so callers learn nothing about
/// which check failed.
pub const STATE_MISMATCH: &str = "State does not match.";

/// Bytes of entropy in a state token.
const TOKEN_BYTES: usize = 32;

/// A callback whose state matched the stored one.
#[derive(Debug, Clone)]
pub struct VerifiedCallback {
    /// Who started the authorization.
    pub identity: Identity,
    /// Authorization code to exchange.
    pub code: String,
    /// Token from the state blob, checked again on consumption.
    pub token: String,
}

/// Issues and verifies authorization states.
#[derive(Clone)]
pub struct StateManager {
    store: Arc<dyn KeyValueStore>,
    client: HubSpotClient,
    ttl: Duration,
}

impl StateManager {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, client: HubSpotClient, ttl: Duration) -> Self {
        Self { store, client, ttl }
    }

    /// Start an authorization for `identity` and return the consent screen URL.
    ///
    /// Replaces any state still pending for the same identity.
    pub async fn begin(&self, identity: &Identity) -> IntegrationResult<String> {
        let state = AuthorizationState {
            token: generate_token(),
            user_id: identity.user_id.clone(),
            org_id: identity.org_id.clone(),
        };
        let encoded = serde_json::to_string(&state)
            .map_err(|e| IntegrationError::internal(format!("Failed to encode state: {e}")))?;

        self.store.set(&identity.state_key(), &encoded, Some(self.ttl)).await?;

        let url = self
            .client
            .authorization_url(&encoded)
            .map_err(|e| IntegrationError::internal(e.to_string()))?;

        tracing::info!(user_id = %identity.user_id, org_id = %identity.org_id, "Started authorization");

        Ok(url.into())
    }

    /// Check a callback against the stored state without consuming it.
    ///
    /// Fails without touching the store when HubSpot reported an error.
    pub async fn verify(&self, query: &CallbackQuery) -> IntegrationResult<VerifiedCallback> {
        if let Some(error) = query.error.as_deref().filter(|e| !e.is_empty()) {
            tracing::warn!(error = %error, description = ?query.error_description, "Authorization denied");
            return Err(IntegrationError::bad_request(error));
        }

        let state = query
            .state
            .as_deref()
            .and_then(|raw| serde_json::from_str::<AuthorizationState>(raw).ok())
            .ok_or_else(|| IntegrationError::bad_request("Invalid state parameter."))?;

        let Some(code) = query.code.clone().filter(|c| !c.is_empty()) else {
            return Err(IntegrationError::bad_request("Missing authorization code."));
        };

        let identity = state.identity();
        let stored = self.store.get(&identity.state_key()).await?;
        if !token_matches(stored.as_deref(), &state.token) {
            tracing::warn!(user_id = %identity.user_id, org_id = %identity.org_id, "State mismatch");
            return Err(IntegrationError::bad_request(STATE_MISMATCH));
        }

        Ok(VerifiedCallback { identity, code, token: state.token })
    }

    /// Consume the verified state. Only one caller can succeed per state.
    pub async fn consume(&self, verified: &VerifiedCallback) -> IntegrationResult<()> {
        let claimed = self.store.claim(&verified.identity.state_key()).await?;
        if token_matches(claimed.as_deref(), &verified.token) {
            Ok(())
        } else {
            Err(IntegrationError::bad_request(STATE_MISMATCH))
        }
    }
}

impl std::fmt::Debug for StateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateManager").field("ttl", &self.ttl).finish()
    }
}

/// Generate a random URL-safe token (32 bytes, base64url without padding).
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

fn token_matches(stored: Option<&str>, token: &str) -> bool {
    stored
        .and_then(|raw| serde_json::from_str::<AuthorizationState>(raw).ok())
        .is_some_and(|state| state.token == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), 43);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: std::collections::HashSet<_> = (0..100).map(|_| generate_token()).collect();
        assert_eq!(tokens.len(), 100);
    }

    #[test]
    fn test_token_matches() {
        let stored = r#"{"state":"abc","user_id":"u1","org_id":"o1"}"#;
        assert!(token_matches(Some(stored), "abc"));
        assert!(!token_matches(Some(stored), "abd"));
        assert!(!token_matches(None, "abc"));
        assert!(!token_matches(Some("not json"), "abc"));
    }
}
