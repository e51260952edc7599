//! Normalized integration item shared by all CRM sources.

use serde::{Deserialize, Serialize};

/// Kind of record an [`IntegrationItem`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Contact,
}

/// A vendor record in normalized form. Built fresh on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationItem {
    /// Vendor record id.
    pub id: String,

    /// Record kind.
    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Display name.
    pub name: String,

    /// Creation time, verbatim from the vendor.
    pub creation_time: Option<String>,

    /// Last modification time, verbatim from the vendor.
    pub last_modified_time: Option<String>,

    /// Parent record id. Contacts never have one.
    pub parent_id: Option<String>,

    /// Link to the record in the vendor's web app.
    pub url: String,
}
