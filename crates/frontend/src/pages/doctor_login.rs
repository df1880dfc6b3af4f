use crate::routes::Route;
use alshifa_api::Role;
use alshifa_frontend_common::auth::{AuthAction, BrowserSessionStore, complete_login, use_auth};
use alshifa_frontend_common::components::ErrorBanner;
use alshifa_frontend_common::forms::LoginForm;
use alshifa_frontend_common::services::AuthApiService;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DoctorLogin)]
pub fn doctor_login() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginForm {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = match form.to_request() {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            error.set(None);
            is_submitting.set(true);
            tracing::info!(email = %request.username, "doctor login submitted");

            let auth = auth.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = AuthApiService::new()
                    .login(request)
                    .await
                    .and_then(|response| complete_login(&BrowserSessionStore, response, Role::Doctor));

                match outcome {
                    Ok(session) => {
                        auth.dispatch(AuthAction::SignedIn(session));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::DoctorDashboard);
                        }
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-teal-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-teal-700 dark:text-teal-300">{"Doctor Sign In"}</h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Access your Al-Shifa schedule"}</p>
                </div>
                <form onsubmit={on_submit} class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8 space-y-5">
                    if let Some(message) = (*error).clone() {
                        <ErrorBanner {message} />
                    }
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="username"
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-teal-500"
                            value={form.email.clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-teal-500"
                            value={form.password.clone()}
                            oninput={on_password}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full py-2 px-4 text-sm font-medium text-white bg-teal-600 hover:bg-teal-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-md transition-colors"
                    >
                        {if *is_submitting { "Signing in..." } else { "Sign In" }}
                    </button>
                    <p class="text-center text-sm text-gray-600 dark:text-gray-400">
                        {"New to Al-Shifa? "}
                        <Link<Route> to={Route::DoctorSignup} classes="font-medium text-teal-600 hover:text-teal-800 dark:text-teal-400">
                            {"Create an account"}
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
