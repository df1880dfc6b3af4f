//! Authentication endpoints

use super::{AuthenticatedClient, PublicClient, error::ClientError};
use crate::types::{LoginRequest, RegisterRequest, TokenResponse, UserOut};
use reqwest::Method;

impl PublicClient {
    /// Exchange credentials for an access token.
    ///
    /// The backend expects an OAuth2 password form, so the credentials are
    /// sent form-encoded rather than as JSON.
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ClientError> {
        tracing::debug!(username = %request.username, "submitting login");
        let req = self.request(Method::POST, "/auth/login").form(request);
        self.execute(req).await
    }

    /// Create a new account
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserOut, ClientError> {
        tracing::debug!(email = %request.email, role = %request.role, "submitting registration");
        let req = self.request(Method::POST, "/register").json(request);
        self.execute(req).await
    }
}

impl AuthenticatedClient {
    /// Profile of the account owning the token
    pub async fn me(&self) -> Result<UserOut, ClientError> {
        let req = self.request(Method::GET, "/auth/me");
        self.execute(req).await
    }
}
