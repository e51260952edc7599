#![no_main]

use hubspot_connector::items::normalize_contact;
use hubspot_connector::models::ContactPage;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any listing that parses must normalize without panicking
    if let Ok(page) = serde_json::from_slice::<ContactPage>(data) {
        for contact in &page.results {
            let item = normalize_contact(contact);
            assert!(!item.name.is_empty());
        }
    }
});
