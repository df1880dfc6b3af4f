//! Al-Shifa API client
//!
//! Typed wrappers over the clinic backend's REST endpoints. The clients are
//! split by authentication requirement so that endpoints needing a bearer
//! token can only be reached through an [`client::AuthenticatedClient`].

pub mod client;
pub mod types;

pub use client::{AuthenticatedClient, PublicClient, TypedClientBuilder, error::ClientError};
pub use types::Role;
