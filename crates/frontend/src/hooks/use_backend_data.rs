//! Live data with a sample fallback

use alshifa_frontend_common::components::{StatusBadge, Tone};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Data a page renders, and where it came from
#[derive(Debug, PartialEq)]
pub struct Backed<T> {
    pub data: Rc<T>,
    /// True once the backend has answered
    pub live: bool,
}

impl<T> Clone for Backed<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            live: self.live,
        }
    }
}

impl<T> Backed<T> {
    pub fn sample(data: T) -> Self {
        Self {
            data: Rc::new(data),
            live: false,
        }
    }

    /// Swap in the backend's answer; a failure keeps what is shown
    pub fn settle(self, fetched: Result<T, String>) -> Self {
        match fetched {
            Ok(data) => Self {
                data: Rc::new(data),
                live: true,
            },
            Err(message) => {
                tracing::info!(%message, "showing sample data");
                self
            }
        }
    }
}

/// Render `sample()` straight away, then replace it with what `fetch`
/// returns on mount. Pages stay usable without a backend.
#[hook]
pub fn use_backend_data<T, F, Fut>(sample: fn() -> T, fetch: F) -> Backed<T>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| Backed::sample(sample()));

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = fetch().await;
                state.set((*state).clone().settle(fetched));
            });
        });
    }

    (*state).clone()
}

#[derive(Properties, PartialEq)]
pub struct SampleDataBadgeProps {
    pub live: bool,
}

/// Marks figures that did not come from the backend
#[function_component(SampleDataBadge)]
pub fn sample_data_badge(props: &SampleDataBadgeProps) -> Html {
    if props.live {
        return html! {};
    }
    html! { <StatusBadge label="Sample data" tone={Tone::Neutral} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_replaces_sample() {
        let backed = Backed::sample(vec![1, 2]).settle(Ok(vec![7]));
        assert!(backed.live);
        assert_eq!(*backed.data, vec![7]);
    }

    #[test]
    fn failure_keeps_sample() {
        let backed = Backed::sample(vec![1, 2]).settle(Err("Not signed in".into()));
        assert!(!backed.live);
        assert_eq!(*backed.data, vec![1, 2]);
    }
}
