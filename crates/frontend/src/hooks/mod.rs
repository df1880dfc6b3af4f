//! Custom hooks for the application

pub mod use_backend_data;

pub use use_backend_data::{Backed, SampleDataBadge, use_backend_data};
