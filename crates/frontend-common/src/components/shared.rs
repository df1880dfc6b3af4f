//! Small presentational building blocks shared by the dashboards

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Colour family of a badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl Tone {
    pub fn badge_classes(&self) -> &'static str {
        match self {
            Tone::Success => "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400",
            Tone::Warning => "bg-amber-100 text-amber-800 dark:bg-amber-900/30 dark:text-amber-400",
            Tone::Danger => "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-400",
            Tone::Neutral => "bg-gray-100 text-gray-700 dark:bg-gray-700 dark:text-gray-300",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub label: AttrValue,
    pub tone: Tone,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!(
            "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium",
            props.tone.badge_classes()
        )}>
            {&props.label}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Html,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-5 flex items-start justify-between">
            <div>
                <p class="text-sm font-medium text-gray-500 dark:text-gray-400">{&props.label}</p>
                <p class="mt-1 text-3xl font-semibold text-gray-900 dark:text-white">{&props.value}</p>
                if let Some(hint) = &props.hint {
                    <p class="mt-1 text-xs text-gray-400 dark:text-gray-500">{hint}</p>
                }
            </div>
            <div class="w-10 h-10 rounded-full bg-teal-50 dark:bg-teal-900/30 text-teal-600 dark:text-teal-300 flex items-center justify-center">
                {props.icon.clone()}
            </div>
        </div>
    }
}

/// Empty state component
#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub action: Option<Html>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="text-center py-12">
            <h3 class="mt-2 text-sm font-medium text-gray-900 dark:text-gray-100">
                {&props.title}
            </h3>
            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                {&props.description}
            </p>
            if let Some(action) = &props.action {
                <div class="mt-6">
                    {action.clone()}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div role="alert" class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
            {&props.message}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: AttrValue,
    /// Fired once the notice has been visible for `timeout_ms`
    pub on_dismiss: Callback<()>,
    #[prop_or(crate::config::ApiConfig::NOTICE_TIMEOUT_MS)]
    pub timeout_ms: u32,
}

/// Success message that dismisses itself
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((props.message.clone(), props.timeout_ms), move |(_, timeout_ms)| {
            let handle = Timeout::new(*timeout_ms, move || on_dismiss.emit(()));
            // Dropping the handle cancels the timer
            move || drop(handle)
        });
    }

    html! {
        <div role="status" class="mb-4 p-3 bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded text-sm">
            {&props.message}
        </div>
    }
}
