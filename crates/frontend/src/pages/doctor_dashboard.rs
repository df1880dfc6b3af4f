use crate::auth_guard::use_logout;
use crate::hooks::{SampleDataBadge, use_backend_data};
use crate::mock;
use alshifa_api::types::DoctorAppointment;
use alshifa_frontend_common::auth::use_auth;
use alshifa_frontend_common::components::{ErrorBanner, KpiCard, Notice, StatusBadge, Tone};
use alshifa_frontend_common::forms::{ScheduleField, ScheduleForm};
use alshifa_frontend_common::services::DoctorService;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn status_tone(status: &str) -> Tone {
    match status {
        "completed" => Tone::Success,
        "cancelled" | "no_show" => Tone::Danger,
        "scheduled" | "confirmed" => Tone::Warning,
        _ => Tone::Neutral,
    }
}

/// First appointment still waiting to be seen
fn next_up(appointments: &[DoctorAppointment]) -> Option<&DoctorAppointment> {
    appointments
        .iter()
        .filter(|a| matches!(a.status.as_str(), "scheduled" | "confirmed"))
        .min_by(|a, b| a.time.cmp(&b.time))
}

#[function_component(DoctorDashboard)]
pub fn doctor_dashboard() -> Html {
    let auth = use_auth();
    let on_logout = use_logout();
    let backed = use_backend_data(mock::doctor_dashboard, || async move {
        DoctorService::new().dashboard().await
    });
    let dashboard = backed.data.clone();
    let next = next_up(&dashboard.appointments);

    let role = auth
        .role()
        .map(|role| role.to_string())
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <header class="h-16 flex items-center justify-between px-6 bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="flex items-center gap-3">
                    <span class="text-lg font-bold text-teal-700 dark:text-teal-300">{"Al-Shifa"}</span>
                    <span class="text-sm text-gray-500 dark:text-gray-400">{format!("Signed in as {role}")}</span>
                    <SampleDataBadge live={backed.live} />
                </div>
                <button
                    onclick={on_logout}
                    class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
                >
                    {"Sign Out"}
                </button>
            </header>

            <main class="max-w-5xl mx-auto p-6 space-y-6">
                <div class="grid gap-4 sm:grid-cols-3">
                    <KpiCard label="Appointments today" value={dashboard.today_count.to_string()} />
                    <KpiCard label="Revenue today" value={format!("₹{}", dashboard.revenue)} />
                    <KpiCard label="Next patient"
                        value={next.map(|a| a.time.clone()).unwrap_or_else(|| "-".to_string())}
                        hint={next.map(|a| AttrValue::from(a.patient_id.clone()))} />
                </div>

                <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                    <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                        <h2 class="text-lg font-medium text-gray-900 dark:text-white">{"Today's appointments"}</h2>
                    </div>
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Time"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Patient"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            {for dashboard.appointments.iter().map(|a| html! {
                                <tr key={a.id.clone()}>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-gray-100">{&a.time}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300">{&a.patient_id}</td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <StatusBadge label={a.status.clone()} tone={status_tone(&a.status)} />
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>

                <ScheduleSettings />
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ScheduleInputProps {
    label: AttrValue,
    field: ScheduleField,
    value: AttrValue,
    #[prop_or("text")]
    input_type: &'static str,
    on_change: Callback<(ScheduleField, String)>,
}

#[function_component(ScheduleInput)]
fn schedule_input(props: &ScheduleInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        let field = props.field;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 dark:text-gray-300">{&props.label}</span>
            <input
                type={props.input_type}
                value={props.value.clone()}
                {oninput}
                class="mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 sm:text-sm"
            />
        </label>
    }
}

/// Slot length, gap and working hours, saved to the doctor's schedule config
#[function_component(ScheduleSettings)]
fn schedule_settings() -> Html {
    let form = use_state(ScheduleForm::default);
    let is_saving = use_state(|| false);
    let notice = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<String>::None);

    {
        let form = form.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Without a backend the defaults stay in place
                if let Ok(config) = DoctorService::new().schedule().await {
                    form.set(ScheduleForm::from(&config));
                }
            });
        });
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (ScheduleField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_saving = is_saving.clone();
        let notice = notice.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_saving {
                return;
            }
            let config = match form.validate() {
                Ok(config) => config,
                Err(e) => {
                    notice.set(None);
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            is_saving.set(true);
            let is_saving = is_saving.clone();
            let notice = notice.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match DoctorService::new().save_schedule(&config).await {
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
        <form onsubmit={on_submit} class="bg-white dark:bg-gray-800 shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-gray-900 dark:text-white">{"Schedule settings"}</h2>
            if let Some(message) = (*error).clone() {
                <ErrorBanner {message} />
            }
            if let Some(message) = (*notice).clone() {
                <Notice {message} {on_dismiss} />
            }
            <div class="grid gap-4 sm:grid-cols-4">
                <ScheduleInput label="Slot (minutes)" field={ScheduleField::SlotMinutes} input_type="number"
                    value={form.slot_minutes.clone()} on_change={on_change.clone()} />
                <ScheduleInput label="Break (minutes)" field={ScheduleField::BreakMinutes} input_type="number"
                    value={form.break_minutes.clone()} on_change={on_change.clone()} />
                <ScheduleInput label="Day starts" field={ScheduleField::WorkStart} input_type="time"
                    value={form.work_start.clone()} on_change={on_change.clone()} />
                <ScheduleInput label="Day ends" field={ScheduleField::WorkEnd} input_type="time"
                    value={form.work_end.clone()} {on_change} />
            </div>
            <button
                type="submit"
                disabled={*is_saving}
                class="px-4 py-2 text-sm font-medium text-white bg-teal-600 hover:bg-teal-700 rounded-md transition-colors disabled:opacity-50"
            >
                {if *is_saving { "Saving..." } else { "Save schedule" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_patient_skips_finished_visits() {
        let dashboard = mock::doctor_dashboard();
        let next = next_up(&dashboard.appointments).unwrap();
        assert_eq!(next.time, "10:15");
        assert_eq!(next.patient_id, "P-0987");
    }

    #[test]
    fn sample_figures_follow_the_backend_formula() {
        let dashboard = mock::doctor_dashboard();
        assert_eq!(dashboard.today_count, 4);
        assert_eq!(dashboard.revenue, 6000);
    }

    #[test]
    fn status_colours() {
        assert_eq!(status_tone("completed"), Tone::Success);
        assert_eq!(status_tone("scheduled"), Tone::Warning);
        assert_eq!(status_tone("in_chair"), Tone::Neutral);
    }
}
