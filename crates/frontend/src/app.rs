use crate::auth_guard::RequireRole;
use crate::pages::{
    AdminDashboard, DoctorDashboard, DoctorLogin, DoctorSignup, Home, KycDoctors,
    KycOrganizations, NotFound, OrgDashboard, OrgDoctors, OrgInventory, OrgProfile,
};
use crate::routes::Route;
use alshifa_api::Role;
use alshifa_frontend_common::auth::AuthProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::DoctorLogin => html! { <DoctorLogin /> },
        Route::DoctorSignup => html! { <DoctorSignup /> },
        Route::DoctorDashboard => html! {
            <RequireRole role={Role::Doctor}><DoctorDashboard /></RequireRole>
        },
        Route::OrgDashboard => html! { <OrgDashboard /> },
        Route::OrgDoctors => html! { <OrgDoctors /> },
        Route::OrgProfile => html! { <OrgProfile /> },
        Route::OrgInventory => html! { <OrgInventory /> },
        Route::AdminDashboard => html! {
            <RequireRole role={Role::Admin}><AdminDashboard /></RequireRole>
        },
        Route::AdminKycDoctors => html! {
            <RequireRole role={Role::Admin}><KycDoctors /></RequireRole>
        },
        Route::AdminKycOrganizations => html! {
            <RequireRole role={Role::Admin}><KycOrganizations /></RequireRole>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}
