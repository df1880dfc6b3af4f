//! Authentication API service

use crate::auth::AuthSession;
use crate::client::{ClientError, create_public_client};
use crate::forms::{LoginError, SignupError};
use alshifa_api::types::{LoginRequest, RegisterRequest, TokenResponse, UserOut};

/// Login and registration calls, reduced to the messages the forms display
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApiService {
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, LoginError> {
        let client = create_public_client().map_err(|e| {
            tracing::error!(error = %e, "failed to build API client");
            LoginError::Failed
        })?;

        client.login(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "login request failed");
            LoginError::from(e)
        })
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<UserOut, SignupError> {
        let client = create_public_client().map_err(|e| {
            tracing::error!(error = %e, "failed to build API client");
            SignupError::Rejected
        })?;

        client.register(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "registration request failed");
            SignupError::from(e)
        })
    }

    /// Ask the backend who owns a restored session's token
    pub async fn verify(&self, session: &AuthSession) -> Result<UserOut, ClientError> {
        let client = create_public_client()?.authenticate(session.access_token.clone());
        client.me().await.inspect_err(|e| {
            tracing::warn!(error = %e, "session check failed");
        })
    }
}
