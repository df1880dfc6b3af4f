//! Role guard for protected routes

use crate::routes::Route;
use alshifa_api::Role;
use alshifa_frontend_common::auth::{AuthAction, use_auth};
use alshifa_frontend_common::components::Spinner;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    pub role: Role,
    pub children: Children,
}

/// Where a visitor without the right session is sent to sign in
fn sign_in_route(role: Role) -> Route {
    match role {
        Role::Doctor => Route::DoctorLogin,
        _ => Route::Home,
    }
}

/// Renders children only for a stored session carrying `role`
#[function_component(RequireRole)]
pub fn require_role(props: &RequireRoleProps) -> Html {
    let auth = use_auth();

    if auth.is_loading {
        return html! {
            <div class="flex items-center justify-center min-h-screen">
                <Spinner label="Checking your session..." />
            </div>
        };
    }

    if auth.has_role(props.role) {
        return html! { <>{ props.children.clone() }</> };
    }

    tracing::info!(required = %props.role, current = ?auth.role(), "route guard blocked access");

    let target = sign_in_route(props.role);
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8 text-center">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">{"Restricted area"}</h2>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">
                    {format!("Please sign in with a {} account to continue.", props.role)}
                </p>
                <Link<Route> to={target} classes="mt-6 inline-block px-4 py-2 text-sm font-medium text-white bg-teal-600 hover:bg-teal-700 rounded-md">
                    {if target == Route::Home { "Back to home" } else { "Go to sign in" }}
                </Link<Route>>
            </div>
        </div>
    }
}

/// Clears the stored session and returns to the landing page
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let auth = use_auth();
    let navigator = use_navigator();

    Callback::from(move |_: MouseEvent| {
        auth.dispatch(AuthAction::Logout);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctors_are_sent_to_their_login() {
        assert_eq!(sign_in_route(Role::Doctor), Route::DoctorLogin);
        assert_eq!(sign_in_route(Role::Admin), Route::Home);
    }
}
