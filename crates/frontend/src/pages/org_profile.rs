use crate::hooks::use_backend_data;
use crate::layouts::OrganizationLayout;
use crate::mock;
use alshifa_api::types::OrganizationProfileUpdate;
use alshifa_frontend_common::components::{ErrorBanner, Notice};
use alshifa_frontend_common::services::OrganizationService;
use alshifa_frontend_common::{LocationData, LocationPicker, LocationSummary};
use yew::prelude::*;

const INITIAL_ADDRESS: &str = "Road No. 12, Banjara Hills, Hyderabad";
const INITIAL_PINCODE: &str = "500034";

/// The hospital record keeps a single address line, so the PIN code is folded into it
fn profile_update(location: &LocationData) -> Result<OrganizationProfileUpdate, &'static str> {
    let address = location.address.trim();
    if address.is_empty() || !location.has_valid_pincode() {
        return Err("Enter an address and a 6-digit PIN code.");
    }
    Ok(OrganizationProfileUpdate {
        address: Some(format!("{address} - {}", location.pincode)),
        ..Default::default()
    })
}

#[function_component(OrgProfile)]
pub fn org_profile() -> Html {
    let backed = use_backend_data(mock::organization_stats, || async move {
        OrganizationService::new().dashboard().await
    });
    let location = use_state(|| LocationData::new(INITIAL_ADDRESS, INITIAL_PINCODE));
    let is_saving = use_state(|| false);
    let notice = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<String>::None);

    let on_location = {
        let location = location.clone();
        Callback::from(move |data: LocationData| {
            tracing::debug!(pincode = %data.pincode, "location updated");
            location.set(data);
        })
    };

    let on_save = {
        let location = location.clone();
        let is_saving = is_saving.clone();
        let notice = notice.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_saving {
                return;
            }
            let update = match profile_update(&location) {
                Ok(update) => update,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    notice.set(None);
                    return;
                }
            };

            is_saving.set(true);
            let is_saving = is_saving.clone();
            let notice = notice.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match OrganizationService::new().update_profile(&update).await {
                    Ok(message) => {
                        error.set(None);
                        notice.set(Some(message));
                    }
                    Err(message) => {
                        notice.set(None);
                        error.set(Some(message));
                    }
                }
                is_saving.set(false);
            });
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    html! {
        <OrganizationLayout title="Profile">
            <div class="grid gap-6 lg:grid-cols-2">
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-4">
                    <div>
                        <p class="text-sm font-medium text-gray-500 dark:text-gray-400">{"Hospital"}</p>
                        <p class="text-lg font-semibold text-gray-900 dark:text-white">{&backed.data.hospital_name}</p>
                    </div>
                    if let Some(message) = (*error).clone() {
                        <ErrorBanner {message} />
                    }
                    if let Some(message) = (*notice).clone() {
                        <Notice {message} {on_dismiss} />
                    }
                    <LocationPicker
                        address={AttrValue::from(INITIAL_ADDRESS)}
                        pincode={AttrValue::from(INITIAL_PINCODE)}
                        on_change={on_location}
                    />
                    <button
                        onclick={on_save}
                        disabled={*is_saving}
                        class="px-4 py-2 text-sm font-medium text-white bg-teal-600 hover:bg-teal-700 rounded-md transition-colors disabled:opacity-50"
                    >
                        {if *is_saving { "Saving..." } else { "Save profile" }}
                    </button>
                </div>
                <LocationSummary location={(*location).clone()} title="Clinic location" />
            </div>
        </OrganizationLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pincode_is_folded_into_the_address() {
        let update = profile_update(&LocationData::new(" 4 Tank Bund Road ", "500080")).unwrap();
        assert_eq!(update.address.as_deref(), Some("4 Tank Bund Road - 500080"));
        assert_eq!(update.city, None);
    }

    #[test]
    fn incomplete_location_is_not_sent() {
        assert!(profile_update(&LocationData::new("", "500080")).is_err());
        assert!(profile_update(&LocationData::new("4 Tank Bund Road", "5000")).is_err());
    }
}
