//! Sidebar shells for the admin and organization sections

mod nav;
mod sidebar;

pub use sidebar::{AdminLayout, OrganizationLayout};
