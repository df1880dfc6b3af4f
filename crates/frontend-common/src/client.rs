//! Client configuration and initialization

use crate::config::ApiConfig;
use alshifa_api::client::{AuthenticatedClient, PublicClient, TypedClientBuilder};
pub use alshifa_api::ClientError;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<AuthenticatedClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TypedClientBuilder::new()
        .base_url(ApiConfig::base_url())
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the authenticated client instance (returns None if not signed in)
pub fn create_authenticated_client() -> Option<AuthenticatedClient> {
    AUTH_CLIENT
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Swap the authenticated client for one carrying `token`, or drop it
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT.lock().unwrap_or_else(PoisonError::into_inner);

    *auth_lock = match token {
        Some(token) => Some(create_public_client()?.authenticate(token)),
        None => None,
    };

    Ok(())
}
