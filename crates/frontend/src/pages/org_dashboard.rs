use crate::hooks::{SampleDataBadge, use_backend_data};
use crate::layouts::OrganizationLayout;
use crate::mock;
use crate::routes::Route;
use alshifa_frontend_common::components::{KpiCard, StatusBadge, Tone};
use alshifa_frontend_common::services::OrganizationService;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(OrgDashboard)]
pub fn org_dashboard() -> Html {
    let backed = use_backend_data(mock::organization_stats, || async move {
        OrganizationService::new().dashboard().await
    });
    let stats = backed.data.clone();

    let (badge, tone) = if stats.is_verified {
        ("Verified", Tone::Success)
    } else {
        ("Verification pending", Tone::Warning)
    };

    html! {
        <OrganizationLayout title="Dashboard">
            <div class="flex items-center gap-3 mb-6">
                <h2 class="text-lg font-medium text-gray-900 dark:text-white">{&stats.hospital_name}</h2>
                <StatusBadge label={badge} {tone} />
                <SampleDataBadge live={backed.live} />
            </div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <KpiCard label="Doctors" value={stats.total_doctors.to_string()} />
                <KpiCard label="Staff" value={stats.total_staff.to_string()} />
                <KpiCard label="Appointments" value={stats.total_appointments.to_string()} hint="All time" />
                <KpiCard label="Today" value={stats.todays_appointments.to_string()} hint="Booked for today" />
            </div>
            <div class="mt-8 grid gap-4 sm:grid-cols-2">
                <Link<Route> to={Route::OrgDoctors} classes="block bg-white dark:bg-gray-800 rounded-lg shadow p-5 hover:shadow-md transition-shadow">
                    <p class="font-medium text-gray-900 dark:text-white">{"Manage doctors"}</p>
                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{"Ratings and verification status of your practitioners."}</p>
                </Link<Route>>
                <Link<Route> to={Route::OrgInventory} classes="block bg-white dark:bg-gray-800 rounded-lg shadow p-5 hover:shadow-md transition-shadow">
                    <p class="font-medium text-gray-900 dark:text-white">{"Check inventory"}</p>
                    <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{"Items running low are flagged for reorder."}</p>
                </Link<Route>>
            </div>
        </OrganizationLayout>
    }
}
