//! Busy indicator for pending backend calls

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Read out to screen readers; shown under the page-sized ring
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
    /// Small ring that sits inside a button or table cell, label hidden
    #[prop_or_default]
    pub inline: bool,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    const RING: &str = "rounded-full animate-spin border-gray-200 dark:border-gray-700 border-t-teal-500 dark:border-t-teal-400";

    if props.inline {
        return html! {
            <span role="status" class="inline-flex items-center align-middle">
                <span class={classes!("w-4", "h-4", "border-2", RING)}></span>
                <span class="sr-only">{&props.label}</span>
            </span>
        };
    }

    html! {
        <div role="status" aria-live="polite" class="flex flex-col items-center gap-4 py-12">
            <div class={classes!("w-10", "h-10", "border-4", RING)}></div>
            <p class="text-sm text-gray-500 dark:text-gray-400">{&props.label}</p>
        </div>
    }
}
