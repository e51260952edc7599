//! Data models for HubSpot records, normalized items and the OAuth flow.
//!
//! Vendor models use `#[serde(default)]` for optional fields so partial
//! records still parse.

mod contact;
mod item;
mod oauth;

pub use contact::{Contact, ContactPage, ContactProperties, NextPage, Paging};
pub use item::{IntegrationItem, ItemKind};
pub use oauth::{AuthorizationState, CallbackQuery, Identity};
