mod shared;
mod spinner;

pub use shared::{EmptyState, ErrorBanner, KpiCard, Notice, StatusBadge, Tone};
pub use spinner::Spinner;
