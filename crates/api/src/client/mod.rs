//! Type-safe API clients that enforce authentication requirements at compile time

pub mod admin;
pub mod auth;
pub mod doctor;
pub mod error;
pub mod organization;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const USER_AGENT: &str = "alshifa-portal/0.1.0";

/// Client for public endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer token
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        let error = ClientError::from_response(status, &body);
        tracing::warn!(status = status.as_u16(), detail = ?error.detail(), "backend returned an error status");
        Err(error)
    }
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = build_http_client(timeout)?;
        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach an access token, producing an authenticated client
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedClient {
    /// Create a new authenticated client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        Ok(PublicClient::new(base_url)?.authenticate(token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with the bearer token attached
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }
}

/// Builder that creates the appropriate client type
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
