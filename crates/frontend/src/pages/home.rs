use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-br from-teal-50 to-gray-100 dark:from-gray-900 dark:to-gray-800">
            <nav class="bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16 items-center">
                        <div class="flex items-center">
                            <h1 class="text-2xl font-bold text-teal-700 dark:text-teal-300">{"Al-Shifa"}</h1>
                            <span class="ml-3 text-sm text-gray-500 dark:text-gray-400">{"Dental Network"}</span>
                        </div>
                        <div class="flex items-center gap-4">
                            <Link<Route> to={Route::DoctorLogin} classes="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
                                {"Doctor Sign In"}
                            </Link<Route>>
                            <Link<Route> to={Route::DoctorSignup} classes="px-4 py-2 text-sm font-medium text-white bg-teal-600 hover:bg-teal-700 rounded-md transition-colors">
                                {"Join as a Doctor"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </nav>

            <main class="max-w-5xl mx-auto px-4 py-16 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-4xl tracking-tight font-extrabold text-gray-900 dark:text-white sm:text-5xl">
                        {"One portal for every clinic"}
                    </h2>
                    <p class="mt-4 max-w-2xl mx-auto text-lg text-gray-500 dark:text-gray-400">
                        {"Doctors manage their schedules, hospitals track staff and stock, and administrators verify every practitioner before they see a patient."}
                    </p>
                </div>

                <div class="mt-12 grid gap-6 sm:grid-cols-3">
                    <PortalCard
                        title="Doctors"
                        description="Sign in to view today's appointments."
                        route={Route::DoctorLogin}
                    />
                    <PortalCard
                        title="Organizations"
                        description="Staff, inventory and clinic profile."
                        route={Route::OrgDashboard}
                    />
                    <PortalCard
                        title="Administrators"
                        description="KYC queues for doctors and hospitals."
                        route={Route::AdminDashboard}
                    />
                </div>
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PortalCardProps {
    title: AttrValue,
    description: AttrValue,
    route: Route,
}

#[function_component(PortalCard)]
fn portal_card(props: &PortalCardProps) -> Html {
    html! {
        <Link<Route> to={props.route} classes="block bg-white dark:bg-gray-800 rounded-lg shadow hover:shadow-md transition-shadow p-6">
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{&props.title}</h3>
            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">{&props.description}</p>
        </Link<Route>>
    }
}
