mod admin_dashboard;
mod doctor_dashboard;
mod doctor_login;
mod doctor_signup;
mod home;
mod kyc_queue;
mod not_found;
mod org_dashboard;
mod org_doctors;
mod org_inventory;
mod org_profile;

pub use admin_dashboard::AdminDashboard;
pub use doctor_dashboard::DoctorDashboard;
pub use doctor_login::DoctorLogin;
pub use doctor_signup::DoctorSignup;
pub use home::Home;
pub use kyc_queue::{KycDoctors, KycOrganizations};
pub use not_found::NotFound;
pub use org_dashboard::OrgDashboard;
pub use org_doctors::OrgDoctors;
pub use org_inventory::OrgInventory;
pub use org_profile::OrgProfile;
