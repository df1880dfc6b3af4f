//! Editable address + pincode pair

use super::{LocationData, LocationDraft, LocationProviderHandle, PINCODE_MAX_LEN};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationPickerProps {
    /// Initial address, if already known
    #[prop_or_default]
    pub address: Option<AttrValue>,
    /// Initial pincode, if already known
    #[prop_or_default]
    pub pincode: Option<AttrValue>,
    /// Receives the current record on blur and after detection
    pub on_change: Callback<LocationData>,
    #[prop_or_default]
    pub provider: LocationProviderHandle,
    #[prop_or_default]
    pub disabled: bool,
}

/// Overwrite the draft with a detected location and return what to report
fn apply_detection(draft: &RefCell<LocationDraft>, detected: LocationData) -> LocationData {
    let mut draft = draft.borrow_mut();
    draft.apply_detected(detected);
    draft.snapshot()
}

#[function_component(LocationPicker)]
pub fn location_picker(props: &LocationPickerProps) -> Html {
    // The draft sits in a RefCell so blur handlers always see the latest
    // keystrokes, even before the re-render that follows them.
    let draft: Rc<RefCell<LocationDraft>> = {
        let address = props.address.clone();
        let pincode = props.pincode.clone();
        use_mut_ref(move || LocationDraft::new(address.as_deref(), pincode.as_deref()))
    };
    let trigger = use_force_update();

    let on_address_input = {
        let draft = draft.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.borrow_mut().set_address(input.value());
            trigger.force_update();
        })
    };

    let on_pincode_input = {
        let draft = draft.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let pincode = {
                let mut draft = draft.borrow_mut();
                draft.set_pincode(&input.value());
                draft.pincode().to_string()
            };
            // Rejected keystrokes leave the vdom unchanged, so reset the DOM directly
            input.set_value(&pincode);
            trigger.force_update();
        })
    };

    let on_blur = {
        let draft = draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: FocusEvent| {
            on_change.emit(draft.borrow().snapshot());
        })
    };

    let on_detect = {
        let draft = draft.clone();
        let trigger = trigger.clone();
        let on_change = props.on_change.clone();
        let provider = props.provider.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let draft = draft.clone();
            let trigger = trigger.clone();
            let on_change = on_change.clone();
            provider.detect(Callback::from(move |detected: LocationData| {
                let record = apply_detection(&draft, detected);
                trigger.force_update();
                on_change.emit(record);
            }));
        })
    };

    let current = draft.borrow().clone();

    html! {
        <div class="space-y-3">
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                    {"Address"}
                </label>
                <input
                    type="text"
                    class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-teal-500 focus:border-transparent"
                    placeholder="Street, area, city"
                    value={current.address().to_string()}
                    oninput={on_address_input}
                    onblur={on_blur.clone()}
                    disabled={props.disabled}
                />
            </div>
            <div class="flex items-end gap-3">
                <div class="flex-1">
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        {"Pincode"}
                    </label>
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength={PINCODE_MAX_LEN.to_string()}
                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-teal-500 focus:border-transparent"
                        placeholder="6-digit pincode"
                        value={current.pincode().to_string()}
                        oninput={on_pincode_input}
                        onblur={on_blur}
                        disabled={props.disabled}
                    />
                </div>
                <button
                    type="button"
                    onclick={on_detect}
                    disabled={props.disabled}
                    class="px-4 py-2 text-sm font-medium text-teal-700 dark:text-teal-300 bg-teal-50 dark:bg-teal-900/30 hover:bg-teal-100 dark:hover:bg-teal-900/50 rounded-lg transition-colors disabled:opacity-50"
                >
                    {"Detect location"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::SimulatedLocationProvider;

    #[test]
    fn detection_overrides_prior_contents() {
        for (address, pincode) in [("", ""), ("Old Address", "110001"), ("x", "9")] {
            let draft = RefCell::new(LocationDraft::new(Some(address), Some(pincode)));
            let reported = Rc::new(RefCell::new(None));
            let sink = reported.clone();

            LocationProviderHandle::new(SimulatedLocationProvider).detect(Callback::from(
                move |detected| {
                    *sink.borrow_mut() = Some(apply_detection(&draft, detected));
                },
            ));

            assert_eq!(
                reported.borrow().clone(),
                Some(LocationData::new("123 Detected St, Tech Park", "500081"))
            );
        }
    }
}
