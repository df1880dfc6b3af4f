//! Runs in a headless browser: `wasm-pack test --headless --firefox crates/frontend-common`

#![cfg(target_arch = "wasm32")]

use alshifa_api::Role;
use alshifa_api::types::TokenResponse;
use alshifa_frontend_common::auth::{BrowserSessionStore, SessionStore, complete_login};
use alshifa_frontend_common::forms::LoginError;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn token(role: Role) -> TokenResponse {
    TokenResponse {
        access_token: "eyJhbGciOi.test".to_string(),
        token_type: "bearer".to_string(),
        role,
    }
}

fn raw(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
}

#[wasm_bindgen_test]
fn doctor_login_writes_raw_keys() {
    BrowserSessionStore.clear();

    let session = complete_login(&BrowserSessionStore, token(Role::Doctor), Role::Doctor).unwrap();

    assert_eq!(raw("token").as_deref(), Some("eyJhbGciOi.test"));
    assert_eq!(raw("role").as_deref(), Some("doctor"));
    assert_eq!(BrowserSessionStore.load(), Some(session));

    BrowserSessionStore.clear();
    assert_eq!(raw("token"), None);
    assert_eq!(BrowserSessionStore.load(), None);
}

#[wasm_bindgen_test]
fn other_roles_leave_storage_empty() {
    BrowserSessionStore.clear();

    let err = complete_login(&BrowserSessionStore, token(Role::Admin), Role::Doctor).unwrap_err();

    assert_eq!(err.to_string(), "Access denied. This portal is for doctors only.");
    assert!(matches!(err, LoginError::AccessDenied { .. }));
    assert_eq!(raw("token"), None);
    assert_eq!(raw("role"), None);
}
