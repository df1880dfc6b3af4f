use crate::routes::Route;
use alshifa_frontend_common::components::EmptyState;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
            <EmptyState
                title="Page not found"
                description="The page you are looking for does not exist."
                action={html! {
                    <Link<Route> to={Route::Home} classes="text-sm font-medium text-teal-600 hover:text-teal-800 dark:text-teal-400">
                        {"Back to home"}
                    </Link<Route>>
                }}
            />
        </div>
    }
}
