//! Location detection capability

use super::LocationData;
use std::fmt;
use std::rc::Rc;
use yew::Callback;

/// Something that can tell the picker where the user is.
///
/// Answers arrive through `on_located` so that asynchronous sources such as
/// the browser geolocation API fit the same contract. A provider that cannot
/// determine a location simply never calls back.
pub trait LocationProvider {
    fn detect(&self, on_located: Callback<LocationData>);
}

/// Stand-in provider that always answers with the same placeholder address
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulatedLocationProvider;

impl SimulatedLocationProvider {
    pub const ADDRESS: &'static str = "123 Detected St, Tech Park";
    pub const PINCODE: &'static str = "500081";
}

impl LocationProvider for SimulatedLocationProvider {
    fn detect(&self, on_located: Callback<LocationData>) {
        tracing::debug!("simulated location detection");
        on_located.emit(LocationData::new(Self::ADDRESS, Self::PINCODE));
    }
}

/// Shareable provider reference usable as a component prop
#[derive(Clone)]
pub struct LocationProviderHandle(Rc<dyn LocationProvider>);

impl LocationProviderHandle {
    pub fn new(provider: impl LocationProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn detect(&self, on_located: Callback<LocationData>) {
        self.0.detect(on_located);
    }
}

impl Default for LocationProviderHandle {
    fn default() -> Self {
        Self::new(SimulatedLocationProvider)
    }
}

impl PartialEq for LocationProviderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LocationProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LocationProviderHandle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn collect(handle: &LocationProviderHandle) -> Vec<LocationData> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        handle.detect(Callback::from(move |data| sink.borrow_mut().push(data)));
        let out = seen.borrow().clone();
        out
    }

    #[test]
    fn simulated_provider_is_deterministic() {
        let handle = LocationProviderHandle::default();
        for _ in 0..3 {
            assert_eq!(
                collect(&handle),
                vec![LocationData::new("123 Detected St, Tech Park", "500081")]
            );
        }
    }

    #[test]
    fn custom_providers_can_be_substituted() {
        struct Fixed;
        impl LocationProvider for Fixed {
            fn detect(&self, on_located: Callback<LocationData>) {
                on_located.emit(LocationData {
                    lat: Some(17.385),
                    lng: Some(78.4867),
                    ..LocationData::new("Charminar Rd", "500002")
                });
            }
        }

        let handle = LocationProviderHandle::new(Fixed);
        let found = collect(&handle);
        assert_eq!(found[0].pincode, "500002");
        assert_eq!(found[0].lat, Some(17.385));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = LocationProviderHandle::default();
        let b = a.clone();
        let c = LocationProviderHandle::default();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
