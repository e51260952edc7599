//! Expiring key-value store.
//!
//! All flow state (pending authorization states, unread credentials) lives
//! behind [`KeyValueStore`]. Two backends are provided:
//! - [`MemoryStore`]: in-process map with per-key expiry
//! - [`RedisStore`]: shared Redis instance (`SET EX`, `GETDEL`)
//!
//! Read-once values are taken with [`KeyValueStore::claim`], which returns and
//! removes a value in one atomic step, so two concurrent readers can never both
//! observe it.

mod memory;
mod redis_store;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreResult;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// String key-value store with optional per-key time-to-live.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// With `ttl` of `None` the value never expires.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> StoreResult<()>;

    /// Read the live value under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Atomically read and remove the live value under `key`.
    async fn claim(&self, key: &str) -> StoreResult<Option<String>>;
}

/// Store key for a pending authorization state.
#[must_use]
pub fn state_key(org_id: &str, user_id: &str) -> String {
    format!("state:{org_id}:{user_id}")
}

/// Store key for an unread credential payload.
#[must_use]
pub fn credentials_key(org_id: &str, user_id: &str) -> String {
    format!("credentials:{org_id}:{user_id}")
}
