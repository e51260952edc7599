//! Contact data model matching the HubSpot CRM v3 objects API.

use serde::{Deserialize, Serialize};

/// A contact record from HubSpot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    /// HubSpot object id.
    #[serde(default)]
    pub id: String,

    /// Requested contact properties. Object-level fields such as
    /// `createdAt` or `archived` are ignored; item timestamps come from the
    /// `createdate` and `lastmodifieddate` properties.
    #[serde(default)]
    pub properties: ContactProperties,
}

/// Contact properties. HubSpot sends `null` for unset properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactProperties {
    #[serde(default)]
    pub firstname: Option<String>,

    #[serde(default)]
    pub lastname: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Creation date as HubSpot formats it; passed through unparsed.
    #[serde(default)]
    pub createdate: Option<String>,

    /// Last modification date as HubSpot formats it; passed through unparsed.
    #[serde(default)]
    pub lastmodifieddate: Option<String>,
}

/// One page of the contacts listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPage {
    /// Contacts in vendor order.
    #[serde(default)]
    pub results: Vec<Contact>,

    /// Cursor for the following page, if any.
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl ContactPage {
    /// Whether HubSpot reports more records after this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.paging.as_ref().and_then(|p| p.next.as_ref()).is_some()
    }
}

/// Paging block of a listing response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<NextPage>,
}

/// Cursor to the next page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextPage {
    pub after: String,

    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing() {
        let page: ContactPage = serde_json::from_value(serde_json::json!({
            "results": [{
                "id": "42",
                "properties": {
                    "firstname": "Ada",
                    "lastname": null,
                    "createdate": "2024-01-01"
                },
                "createdAt": "2024-01-01T00:00:00Z",
                "archived": false
            }],
            "paging": {"next": {"after": "43", "link": "https://api.hubapi.com/next"}}
        }))
        .unwrap();

        assert_eq!(page.results.len(), 1);
        let contact = &page.results[0];
        assert_eq!(contact.id, "42");
        assert_eq!(contact.properties.firstname.as_deref(), Some("Ada"));
        assert!(contact.properties.lastname.is_none());
        assert!(page.has_more());
    }

    #[test]
    fn test_parse_empty_listing() {
        let page: ContactPage = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_contact_without_properties() {
        let contact: Contact = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(contact.id, "7");
        assert!(contact.properties.firstname.is_none());
    }

    #[test]
    fn test_object_fields_are_ignored() {
        let contact: Contact = serde_json::from_value(serde_json::json!({
            "id": "7",
            "properties": {"createdate": "2024-01-01"},
            "createdAt": "2023-12-31T00:00:00Z",
            "updatedAt": "2024-02-01T00:00:00Z",
            "archived": true
        }))
        .unwrap();

        assert_eq!(contact.properties.createdate.as_deref(), Some("2024-01-01"));
        let json = serde_json::to_value(&contact).unwrap();
        assert!(json.get("createdAt").is_none());
        assert!(json.get("archived").is_none());
    }
}
