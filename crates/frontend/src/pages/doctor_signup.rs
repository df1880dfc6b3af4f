use crate::routes::Route;
use alshifa_api::types::ScheduleMode;
use alshifa_frontend_common::components::ErrorBanner;
use alshifa_frontend_common::config::SignupConfig;
use alshifa_frontend_common::forms::{DoctorSignupForm, HospitalChoice, SignupAction, SignupField};
use alshifa_frontend_common::services::AuthApiService;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-700 text-gray-900 dark:text-gray-100 focus:outline-none focus:ring-2 focus:ring-teal-500";
const LABEL_CLASSES: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300";

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    id: AttrValue,
    label: AttrValue,
    field: SignupField,
    value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    #[prop_or_default]
    placeholder: Option<AttrValue>,
    on_input: Callback<(SignupField, String)>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        })
    };

    html! {
        <div>
            <label for={props.id.clone()} class={LABEL_CLASSES}>{&props.label}</label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                class={INPUT_CLASSES}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}

#[function_component(DoctorSignup)]
pub fn doctor_signup() -> Html {
    let navigator = use_navigator();
    let form = use_reducer(DoctorSignupForm::default);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_input = {
        let form = form.clone();
        Callback::from(move |(field, value): (SignupField, String)| {
            form.dispatch(SignupAction::Set(field, value));
        })
    };

    let on_hospital = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(SignupAction::SelectHospital(select.value()));
        })
    };

    let on_specialization = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(SignupAction::Set(SignupField::Specialization, select.value()));
        })
    };

    let on_mode = |mode: ScheduleMode| {
        let form = form.clone();
        Callback::from(move |_: Event| form.dispatch(SignupAction::SetMode(mode)))
    };

    let on_document = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let name = input.files().and_then(|files| files.get(0)).map(|file| file.name());
            form.dispatch(SignupAction::AttachDocument(name));
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

            // Nothing is sent until the local checks pass
            let request = match form.validate() {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            error.set(None);
            is_submitting.set(true);
            tracing::info!(
                email = %request.email,
                hospital = %request.hospital_name,
                mode = ?request.scheduling_preference,
                "doctor signup submitted"
            );

            let navigator = navigator.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().register(request).await {
                    Ok(user) => {
                        tracing::info!(user_id = %user.id, "doctor registered");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::DoctorLogin);
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

    let interleaved = form.schedule_mode == ScheduleMode::Interleaved;

    html! {
        <div class="min-h-screen bg-gradient-to-br from-teal-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 py-12 px-4">
            <div class="max-w-2xl mx-auto">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-teal-700 dark:text-teal-300">{"Join Al-Shifa"}</h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Register as a doctor. Your license is verified before your first shift."}</p>
                </div>
                <form onsubmit={on_submit} class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8 space-y-6">
                    if let Some(message) = (*error).clone() {
                        <ErrorBanner {message} />
                    }

                    <div class="grid gap-4 sm:grid-cols-2">
                        <TextField id="first-name" label="First name" field={SignupField::FirstName}
                            value={form.first_name.clone()} on_input={on_input.clone()} />
                        <TextField id="last-name" label="Last name" field={SignupField::LastName}
                            value={form.last_name.clone()} on_input={on_input.clone()} />
                        <TextField id="email" label="Email" input_type="email" field={SignupField::Email}
                            value={form.email.clone()} on_input={on_input.clone()} />
                        <TextField id="password" label="Password" input_type="password" field={SignupField::Password}
                            value={form.password.clone()} on_input={on_input.clone()} />
                    </div>

                    <div>
                        <label for="hospital" class={LABEL_CLASSES}>{"Hospital"}</label>
                        <select id="hospital" class={INPUT_CLASSES} onchange={on_hospital}>
                            <option value="" selected={form.hospital == HospitalChoice::Unset}>{"Select your hospital"}</option>
                            {for SignupConfig::HOSPITALS.iter().map(|name| html! {
                                <option value={*name} selected={form.hospital.select_value() == *name}>{*name}</option>
                            })}
                            <option value={HospitalChoice::CUSTOM_OPTION} selected={form.hospital.is_custom()}>
                                {"Other (not listed)"}
                            </option>
                        </select>
                    </div>
                    if let HospitalChoice::Custom(name) = &form.hospital {
                        <TextField id="custom-hospital" label="Hospital name" field={SignupField::CustomHospital}
                            placeholder="Enter your hospital's name"
                            value={name.clone()} on_input={on_input.clone()} />
                    }

                    <div class="grid gap-4 sm:grid-cols-2">
                        <TextField id="license" label="License number" field={SignupField::LicenseNumber}
                            value={form.license_number.clone()} on_input={on_input.clone()} />
                        <div>
                            <label for="specialization" class={LABEL_CLASSES}>{"Specialization"}</label>
                            <select id="specialization" class={INPUT_CLASSES} onchange={on_specialization}>
                                {for SignupConfig::SPECIALIZATIONS.iter().map(|name| html! {
                                    <option value={*name} selected={form.specialization == *name}>{*name}</option>
                                })}
                            </select>
                        </div>
                    </div>

                    <fieldset>
                        <legend class={LABEL_CLASSES}>{"AI Scheduling preference"}</legend>
                        <div class="mt-2 flex gap-6">
                            <label class="inline-flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                                <input type="radio" name="schedule" checked={!interleaved}
                                    onchange={on_mode(ScheduleMode::Continuous)} />
                                {"Continuous"}
                            </label>
                            <label class="inline-flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                                <input type="radio" name="schedule" checked={interleaved}
                                    onchange={on_mode(ScheduleMode::Interleaved)} />
                                {"Interleaved (work / break)"}
                            </label>
                        </div>
                    </fieldset>
                    if interleaved {
                        <div class="grid gap-4 sm:grid-cols-2">
                            <TextField id="work-minutes" label="Work duration (minutes)" input_type="number"
                                field={SignupField::WorkMinutes}
                                value={form.work_minutes.clone()} on_input={on_input.clone()} />
                            <TextField id="break-minutes" label="Break duration (minutes)" input_type="number"
                                field={SignupField::BreakMinutes}
                                value={form.break_minutes.clone()} on_input={on_input.clone()} />
                        </div>
                    }

                    <div>
                        <label for="document" class={LABEL_CLASSES}>{"License document"}</label>
                        <input id="document" type="file" accept=".pdf,.jpg,.jpeg,.png"
                            class="mt-1 block w-full text-sm text-gray-600 dark:text-gray-400"
                            onchange={on_document} />
                        if let Some(name) = &form.document_name {
                            <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                {format!("Selected: {name}. Upload happens after verification starts.")}
                            </p>
                        }
                    </div>

                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full py-2 px-4 text-sm font-medium text-white bg-teal-600 hover:bg-teal-700 disabled:opacity-50 disabled:cursor-not-allowed rounded-md transition-colors"
                    >
                        {if *is_submitting { "Creating account..." } else { "Create account" }}
                    </button>
                    <p class="text-center text-sm text-gray-600 dark:text-gray-400">
                        {"Already registered? "}
                        <Link<Route> to={Route::DoctorLogin} classes="font-medium text-teal-600 hover:text-teal-800 dark:text-teal-400">
                            {"Sign in"}
                        </Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
