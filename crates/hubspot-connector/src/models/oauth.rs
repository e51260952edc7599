//! OAuth flow types.

use serde::{Deserialize, Serialize};

use crate::store;

/// The (user, organization) pair an authorization belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub org_id: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), org_id: org_id.into() }
    }

    /// Key of this identity's pending authorization state.
    #[must_use]
    pub fn state_key(&self) -> String {
        store::state_key(&self.org_id, &self.user_id)
    }

    /// Key of this identity's unread credentials.
    #[must_use]
    pub fn credentials_key(&self) -> String {
        store::credentials_key(&self.org_id, &self.user_id)
    }
}

/// State blob carried through the consent screen and stored until the callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationState {
    /// Random URL-safe token.
    #[serde(rename = "state")]
    pub token: String,
    pub user_id: String,
    pub org_id: String,
}

impl AuthorizationState {
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id.clone(), self.org_id.clone())
    }
}

/// Query parameters HubSpot appends to the redirect URI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
