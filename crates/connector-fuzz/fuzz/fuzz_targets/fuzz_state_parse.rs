#![no_main]

use hubspot_connector::models::AuthorizationState;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The callback state is attacker controlled
    if let Ok(state) = serde_json::from_slice::<AuthorizationState>(data) {
        let identity = state.identity();
        assert!(identity.state_key().starts_with("state:"));
    }
});
