pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod forms;
pub mod location;
pub mod services;

pub use auth::context::AuthContext;
pub use client::{create_authenticated_client, create_public_client};
pub use components::Spinner;
pub use config::ApiConfig;
pub use location::{LocationData, LocationPicker, LocationSummary};
