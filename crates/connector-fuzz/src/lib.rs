//! Fuzzing library for hubspot-connector.
//!
//! Targets cover the untrusted inputs the connector parses: HubSpot contact
//! listings and the state blob echoed back on the OAuth callback.
//!
//! # Usage
//!
//! ```bash
//! cd crates/connector-fuzz
//! cargo +nightly fuzz run fuzz_contact_page -- -max_total_time=60
//! ```

pub use hubspot_connector::{items, models};
