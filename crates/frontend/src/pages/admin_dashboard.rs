use crate::hooks::{SampleDataBadge, use_backend_data};
use crate::layouts::AdminLayout;
use crate::mock;
use crate::routes::Route;
use alshifa_frontend_common::components::KpiCard;
use alshifa_frontend_common::services::AdminService;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let backed = use_backend_data(mock::admin_stats, || async move {
        AdminService::new().dashboard().await
    });
    let stats = backed.data.clone();
    let pending = stats.pending_doctor_verifications + stats.pending_hospital_verifications;

    html! {
        <AdminLayout title="Dashboard">
            <div class="mb-4 h-6"><SampleDataBadge live={backed.live} /></div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <KpiCard label="Users" value={stats.total_users.to_string()} />
                <KpiCard label="Doctors" value={stats.total_doctors.to_string()} />
                <KpiCard label="Patients" value={stats.total_patients.to_string()} />
                <KpiCard label="Hospitals" value={stats.total_hospitals.to_string()} />
            </div>

            <div class="mt-8 bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-medium text-gray-900 dark:text-white">{"Pending verifications"}</h2>
                    <span class="text-3xl font-semibold text-amber-600 dark:text-amber-400">{pending}</span>
                </div>
                <div class="mt-4 grid gap-4 sm:grid-cols-2">
                    <Link<Route> to={Route::AdminKycDoctors} classes="flex items-center justify-between p-4 rounded-md border border-gray-200 dark:border-gray-700 hover:bg-gray-50 dark:hover:bg-gray-700">
                        <span class="text-sm text-gray-700 dark:text-gray-300">{"Doctors"}</span>
                        <span class="text-sm font-semibold text-gray-900 dark:text-white">{stats.pending_doctor_verifications}</span>
                    </Link<Route>>
                    <Link<Route> to={Route::AdminKycOrganizations} classes="flex items-center justify-between p-4 rounded-md border border-gray-200 dark:border-gray-700 hover:bg-gray-50 dark:hover:bg-gray-700">
                        <span class="text-sm text-gray-700 dark:text-gray-300">{"Organizations"}</span>
                        <span class="text-sm font-semibold text-gray-900 dark:text-white">{stats.pending_hospital_verifications}</span>
                    </Link<Route>>
                </div>
            </div>
        </AdminLayout>
    }
}
