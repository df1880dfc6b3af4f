//! Location input widget and its read-only summary
//!
//! [`LocationPicker`] edits an address + pincode pair and reports it through a
//! callback; [`LocationSummary`] renders the same [`LocationData`] record.

mod picker;
mod provider;
mod summary;

pub use picker::{LocationPicker, LocationPickerProps};
pub use provider::{LocationProvider, LocationProviderHandle, SimulatedLocationProvider};
pub use summary::{LocationSummary, LocationSummaryProps};

use serde::{Deserialize, Serialize};

/// Pincodes are six-digit postal codes
pub const PINCODE_MAX_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub address: String,
    pub pincode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl LocationData {
    pub fn new(address: impl Into<String>, pincode: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            pincode: pincode.into(),
            lat: None,
            lng: None,
        }
    }

    /// Exactly six digits
    pub fn has_valid_pincode(&self) -> bool {
        self.pincode.len() == PINCODE_MAX_LEN && self.pincode.chars().all(|c| c.is_ascii_digit())
    }

    pub fn is_empty(&self) -> bool {
        self.address.trim().is_empty() && self.pincode.is_empty()
    }
}

/// Keep digits only, at most [`PINCODE_MAX_LEN`] of them
pub fn sanitize_pincode(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PINCODE_MAX_LEN)
        .collect()
}

/// Editable copy of a location held by the picker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationDraft {
    address: String,
    pincode: String,
    coords: Option<(f64, f64)>,
}

impl LocationDraft {
    pub fn new(address: Option<&str>, pincode: Option<&str>) -> Self {
        Self {
            address: address.unwrap_or_default().to_string(),
            pincode: sanitize_pincode(pincode.unwrap_or_default()),
            coords: None,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn pincode(&self) -> &str {
        &self.pincode
    }

    /// Manual edits invalidate any detected coordinates
    pub fn set_address(&mut self, address: String) {
        self.address = address;
        self.coords = None;
    }

    pub fn set_pincode(&mut self, raw: &str) {
        self.pincode = sanitize_pincode(raw);
        self.coords = None;
    }

    pub fn apply_detected(&mut self, data: LocationData) {
        self.address = data.address;
        self.pincode = sanitize_pincode(&data.pincode);
        self.coords = data.lat.zip(data.lng);
    }

    /// The record reported to the owner of the picker
    pub fn snapshot(&self) -> LocationData {
        LocationData {
            address: self.address.clone(),
            pincode: self.pincode.clone(),
            lat: self.coords.map(|(lat, _)| lat),
            lng: self.coords.map(|(_, lng)| lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pincode_never_exceeds_six_characters() {
        let mut draft = LocationDraft::default();
        let mut typed = String::new();
        for key in "5000812345678".chars() {
            typed.push(key);
            draft.set_pincode(&typed);
            assert!(draft.pincode().chars().count() <= PINCODE_MAX_LEN);
            typed = draft.pincode().to_string();
        }
        assert_eq!(draft.pincode(), "500081");
    }

    #[test]
    fn pasted_pincode_is_truncated() {
        let mut draft = LocationDraft::default();
        draft.set_pincode("1234567890");
        assert_eq!(draft.pincode(), "123456");
    }

    #[test]
    fn non_digits_are_dropped() {
        assert_eq!(sanitize_pincode("50-00 8a1"), "500081");
        assert_eq!(sanitize_pincode("abc"), "");
        assert_eq!(sanitize_pincode("٥٠٠٠٨١"), "");
    }

    #[test]
    fn initial_values_are_sanitized() {
        let draft = LocationDraft::new(Some("12 Road No. 3"), Some("5000819"));
        assert_eq!(draft.address(), "12 Road No. 3");
        assert_eq!(draft.pincode(), "500081");

        let empty = LocationDraft::new(None, None);
        assert!(empty.snapshot().is_empty());
    }

    #[test]
    fn snapshot_equals_field_values() {
        let mut draft = LocationDraft::default();
        draft.set_address("Plot 7, Jubilee Hills".into());
        draft.set_pincode("500033");
        assert_eq!(
            draft.snapshot(),
            LocationData::new("Plot 7, Jubilee Hills", "500033")
        );
    }

    #[test]
    fn editing_after_detection_clears_coordinates() {
        let mut draft = LocationDraft::default();
        draft.apply_detected(LocationData {
            lat: Some(17.44),
            lng: Some(78.38),
            ..LocationData::new("Somewhere", "500081")
        });
        assert_eq!(draft.snapshot().lat, Some(17.44));

        draft.set_address("Somewhere else".into());
        assert_eq!(draft.snapshot().lat, None);
        assert_eq!(draft.snapshot().lng, None);
    }

    #[test]
    fn pincode_validity() {
        assert!(LocationData::new("x", "500081").has_valid_pincode());
        assert!(!LocationData::new("x", "50008").has_valid_pincode());
        assert!(!LocationData::new("x", "").has_valid_pincode());
    }
}
