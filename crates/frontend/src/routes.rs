//! Client-side routes

use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/doctor/login")]
    DoctorLogin,
    #[at("/auth/doctor/signup")]
    DoctorSignup,
    #[at("/doctor/dashboard")]
    DoctorDashboard,
    #[at("/organization/dashboard")]
    OrgDashboard,
    #[at("/organization/doctors")]
    OrgDoctors,
    #[at("/organization/profile")]
    OrgProfile,
    #[at("/organization/inventory")]
    OrgInventory,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/admin/kyc/doctors")]
    AdminKycDoctors,
    #[at("/admin/kyc/organizations")]
    AdminKycOrganizations,
    #[not_found]
    #[at("/404")]
    NotFound,
}
