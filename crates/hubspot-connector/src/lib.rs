//! HubSpot Connector
//!
//! Connects a user's HubSpot account through the OAuth 2.0 authorization-code
//! flow and loads their CRM contacts as normalized integration items.
//!
//! # Features
//!
//! - **CSRF-safe state**: random per-user state, verified and consumed once
//! - **Read-once credentials**: token responses are handed out exactly once
//! - **Expiring store**: in-memory or Redis, ten-minute TTLs
//! - **Normalized items**: contacts mapped to a vendor-neutral shape
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hubspot_connector::{HubSpotClient, config::Config, oauth::OAuthFlow, store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = HubSpotClient::new(&config)?;
//!     let flow = OAuthFlow::new(&config, client, Arc::new(MemoryStore::new()));
//!
//!     let url = flow.authorize("user-1", "org-1").await?;
//!     println!("Open {url}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod items;
pub mod models;
pub mod oauth;
pub mod server;
pub mod store;

pub use client::HubSpotClient;
pub use config::Config;
pub use error::{ClientError, IntegrationError, StoreError};
