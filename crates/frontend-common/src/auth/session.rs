//! Persisted sign-in session
//!
//! The session lives in local storage as two raw strings (`token`, `role`) so
//! that route guards outside this crate can read it without a JSON decoder.

use crate::config::ApiConfig;
use crate::forms::login::LoginError;
use alshifa_api::types::{Role, TokenResponse};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("failed to write `{0}` to browser storage")]
    Write(&'static str),
}

/// Where the session is kept between page loads
pub trait SessionStore {
    fn save(&self, session: &AuthSession) -> Result<(), StorageError>;
    fn load(&self) -> Option<AuthSession>;
    fn clear(&self);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStore for BrowserSessionStore {
    fn save(&self, session: &AuthSession) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(ApiConfig::TOKEN_KEY, &session.access_token)
            .map_err(|_| StorageError::Write(ApiConfig::TOKEN_KEY))?;
        storage
            .set_item(ApiConfig::ROLE_KEY, session.role.as_str())
            .map_err(|_| StorageError::Write(ApiConfig::ROLE_KEY))?;
        Ok(())
    }

    fn load(&self) -> Option<AuthSession> {
        let storage = Self::storage()?;
        let access_token = storage.get_item(ApiConfig::TOKEN_KEY).ok().flatten()?;
        if access_token.is_empty() {
            return None;
        }
        let role = storage
            .get_item(ApiConfig::ROLE_KEY)
            .ok()
            .flatten()
            .and_then(|r| r.parse().ok())
            .unwrap_or(Role::Unknown);
        Some(AuthSession { access_token, role })
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ApiConfig::TOKEN_KEY);
            let _ = storage.remove_item(ApiConfig::ROLE_KEY);
        }
    }
}

/// Accept a token response for a portal reserved to `expected`.
///
/// The session is written to `store` only when the role matches; a mismatch
/// leaves storage untouched.
pub fn complete_login<S: SessionStore + ?Sized>(
    store: &S,
    response: TokenResponse,
    expected: Role,
) -> Result<AuthSession, LoginError> {
    if response.role != expected {
        tracing::warn!(expected = %expected, actual = %response.role, "role mismatch after login");
        return Err(LoginError::AccessDenied {
            expected,
            actual: response.role,
        });
    }

    let session = AuthSession {
        access_token: response.access_token,
        role: response.role,
    };
    store.save(&session)?;
    tracing::info!(role = %session.role, "session stored");
    Ok(session)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for local storage
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub(crate) items: RefCell<HashMap<&'static str, String>>,
    }

    impl SessionStore for MemoryStore {
        fn save(&self, session: &AuthSession) -> Result<(), StorageError> {
            let mut items = self.items.borrow_mut();
            items.insert(ApiConfig::TOKEN_KEY, session.access_token.clone());
            items.insert(ApiConfig::ROLE_KEY, session.role.to_string());
            Ok(())
        }

        fn load(&self) -> Option<AuthSession> {
            let items = self.items.borrow();
            Some(AuthSession {
                access_token: items.get(ApiConfig::TOKEN_KEY)?.clone(),
                role: items.get(ApiConfig::ROLE_KEY)?.parse().ok()?,
            })
        }

        fn clear(&self) {
            self.items.borrow_mut().clear();
        }
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn save(&self, _: &AuthSession) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn load(&self) -> Option<AuthSession> {
            None
        }
        fn clear(&self) {}
    }

    fn token(role: Role) -> TokenResponse {
        TokenResponse {
            access_token: "jwt-123".to_string(),
            token_type: "bearer".to_string(),
            role,
        }
    }

    #[test]
    fn doctor_login_is_persisted_under_raw_keys() {
        let store = MemoryStore::default();
        let session = complete_login(&store, token(Role::Doctor), Role::Doctor).unwrap();

        assert_eq!(session.access_token, "jwt-123");
        let items = store.items.borrow();
        assert_eq!(items.get("token").map(String::as_str), Some("jwt-123"));
        assert_eq!(items.get("role").map(String::as_str), Some("doctor"));
    }

    #[test]
    fn other_roles_are_denied_without_touching_storage() {
        for role in [Role::Admin, Role::Patient, Role::Organization, Role::Unknown] {
            let store = MemoryStore::default();
            let err = complete_login(&store, token(role), Role::Doctor).unwrap_err();

            assert_eq!(
                err.to_string(),
                "Access denied. This portal is for doctors only."
            );
            assert!(store.items.borrow().is_empty());
            assert!(store.load().is_none());
        }
    }

    #[test]
    fn storage_failure_surfaces_as_login_error() {
        let err = complete_login(&BrokenStore, token(Role::Doctor), Role::Doctor).unwrap_err();
        assert!(matches!(err, LoginError::Storage(StorageError::Unavailable)));
    }
}
