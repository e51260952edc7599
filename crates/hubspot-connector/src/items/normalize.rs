//! Contact → integration item mapping.

use crate::config::api;
use crate::models::{Contact, IntegrationItem, ItemKind};

/// Name used when a contact has neither first nor last name.
pub const UNNAMED_CONTACT: &str = "Unnamed Contact";

/// Map a HubSpot contact to an [`IntegrationItem`]. Total: missing fields
/// become empty or absent.
#[must_use]
pub fn normalize_contact(contact: &Contact) -> IntegrationItem {
    let props = &contact.properties;

    IntegrationItem {
        id: contact.id.clone(),
        kind: ItemKind::Contact,
        name: display_name(props.firstname.as_deref(), props.lastname.as_deref()),
        creation_time: props.createdate.clone(),
        last_modified_time: props.lastmodifieddate.clone(),
        parent_id: None,
        url: contact_url(&contact.id),
    }
}

/// Link to a contact in the HubSpot web app.
#[must_use]
pub fn contact_url(id: &str) -> String {
    format!("{}/{}", api::CONTACT_URL_BASE, id)
}

fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    let joined = format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default());
    let trimmed = joined.trim();
    if trimmed.is_empty() { UNNAMED_CONTACT.to_string() } else { trimmed.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactProperties;

    fn contact(id: &str, first: Option<&str>, last: Option<&str>) -> Contact {
        Contact {
            id: id.to_string(),
            properties: ContactProperties {
                firstname: first.map(str::to_string),
                lastname: last.map(str::to_string),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_full_name() {
        let item = normalize_contact(&contact("42", Some("Ada"), Some("Lovelace")));
        assert_eq!(item.name, "Ada Lovelace");
        assert_eq!(item.kind, ItemKind::Contact);
        assert!(item.parent_id.is_none());
        assert_eq!(item.url, "https://app.hubspot.com/contacts/42");
    }

    #[test]
    fn test_first_name_only() {
        assert_eq!(normalize_contact(&contact("1", Some("Ada"), None)).name, "Ada");
        assert_eq!(normalize_contact(&contact("1", Some("Ada"), Some(""))).name, "Ada");
    }

    #[test]
    fn test_last_name_only() {
        assert_eq!(normalize_contact(&contact("1", None, Some("Lovelace"))).name, "Lovelace");
    }

    #[test]
    fn test_unnamed() {
        assert_eq!(normalize_contact(&contact("1", None, None)).name, UNNAMED_CONTACT);
        assert_eq!(normalize_contact(&contact("1", Some("  "), Some(" "))).name, UNNAMED_CONTACT);
    }

    #[test]
    fn test_missing_everything() {
        let item = normalize_contact(&Contact::default());
        assert_eq!(item.id, "");
        assert_eq!(item.name, UNNAMED_CONTACT);
        assert!(item.creation_time.is_none());
        assert!(item.last_modified_time.is_none());
        assert_eq!(item.url, "https://app.hubspot.com/contacts/");
    }

    #[test]
    fn test_timestamps_pass_through_verbatim() {
        let mut c = contact("9", Some("A"), None);
        c.properties.createdate = Some("not-a-date".into());
        c.properties.lastmodifieddate = Some("2024-02-30T99:00:00Z".into());

        let item = normalize_contact(&c);
        assert_eq!(item.creation_time.as_deref(), Some("not-a-date"));
        assert_eq!(item.last_modified_time.as_deref(), Some("2024-02-30T99:00:00Z"));
    }

    #[test]
    fn test_serialized_shape() {
        let mut c = contact("42", Some("Ada"), Some("Lovelace"));
        c.properties.createdate = Some("2024-01-01".into());

        insta::assert_json_snapshot!(normalize_contact(&c), @r#"
        {
          "id": "42",
          "type": "contact",
          "name": "Ada Lovelace",
          "creation_time": "2024-01-01",
          "last_modified_time": null,
          "parent_id": null,
          "url": "https://app.hubspot.com/contacts/42"
        }
        "#);
    }
}
