use crate::hooks::{SampleDataBadge, use_backend_data};
use crate::layouts::OrganizationLayout;
use crate::mock;
use alshifa_api::types::OrganizationDoctor;
use alshifa_frontend_common::components::{EmptyState, StatusBadge, Tone};
use alshifa_frontend_common::services::OrganizationService;
use yew::prelude::*;

fn rating_label(doctor: &OrganizationDoctor) -> String {
    match (doctor.avg_rating, doctor.total_reviews) {
        (Some(avg), Some(reviews)) => format!("{avg:.1} ({reviews} reviews)"),
        (Some(avg), None) => format!("{avg:.1}"),
        _ => "No reviews yet".to_string(),
    }
}

#[function_component(OrgDoctors)]
pub fn org_doctors() -> Html {
    let backed = use_backend_data(mock::organization_doctors, || async move {
        OrganizationService::new().doctors().await
    });
    let doctors = backed.data.clone();

    if doctors.is_empty() {
        return html! {
            <OrganizationLayout title="Doctors">
                <EmptyState title="No doctors yet" description="Doctors who register with your hospital appear here." />
            </OrganizationLayout>
        };
    }

    html! {
        <OrganizationLayout title="Doctors">
            <div class="mb-4 h-6"><SampleDataBadge live={backed.live} /></div>
            <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Doctor"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Specialization"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Rating"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        {for doctors.iter().map(|doctor| {
                            let (label, tone) = if doctor.is_verified {
                                ("Verified", Tone::Success)
                            } else {
                                ("Pending", Tone::Warning)
                            };
                            html! {
                                <tr key={doctor.id.clone()}>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <div class="text-sm font-medium text-gray-900 dark:text-gray-100">{&doctor.name}</div>
                                        <div class="text-sm text-gray-500 dark:text-gray-400">{&doctor.email}</div>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300">{&doctor.specialization}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{rating_label(doctor)}</td>
                                    <td class="px-6 py-4 whitespace-nowrap"><StatusBadge {label} {tone} /></td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </OrganizationLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_fall_back_when_unreviewed() {
        let doctors = mock::organization_doctors();
        assert_eq!(rating_label(&doctors[0]), "4.8 (132 reviews)");
        let unreviewed = doctors.iter().find(|d| d.avg_rating.is_none()).unwrap();
        assert_eq!(rating_label(unreviewed), "No reviews yet");
    }
}
