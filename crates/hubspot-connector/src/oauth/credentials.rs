//! Read-once credential slot.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::{IntegrationError, IntegrationResult};
use crate::models::Identity;
use crate::store::KeyValueStore;

/// Detail returned when no usable credential is stored.
pub const NO_CREDENTIALS: &str = "No credentials found.";

/// Holds the raw token response between the callback and the caller's read.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl CredentialStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Store the token response for `identity`, replacing any unread one.
    pub async fn save(&self, identity: &Identity, payload: &Value) -> IntegrationResult<()> {
        let encoded = serde_json::to_string(payload)
            .map_err(|e| IntegrationError::internal(format!("Failed to encode credentials: {e}")))?;

        self.store.set(&identity.credentials_key(), &encoded, Some(self.ttl)).await?;

        tracing::info!(user_id = %identity.user_id, org_id = %identity.org_id, "Stored credentials");
        Ok(())
    }

    /// Take the stored credentials. A second call for the same identity fails.
    pub async fn take(&self, identity: &Identity) -> IntegrationResult<Value> {
        let raw = self
            .store
            .claim(&identity.credentials_key())
            .await?
            .ok_or_else(|| IntegrationError::not_found(NO_CREDENTIALS))?;

        let payload: Value = serde_json::from_str(&raw)
            .map_err(|_| IntegrationError::bad_request("Invalid credentials format"))?;

        if is_empty_payload(&payload) {
            return Err(IntegrationError::not_found(NO_CREDENTIALS));
        }

        tracing::info!(user_id = %identity.user_id, org_id = %identity.org_id, "Handed out credentials");
        Ok(payload)
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").field("ttl", &self.ttl).finish()
    }
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` carry no credentials.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
