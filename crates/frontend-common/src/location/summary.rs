//! Read-only location card

use super::LocationData;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationSummaryProps {
    pub location: LocationData,
    #[prop_or(AttrValue::Static("Location"))]
    pub title: AttrValue,
}

fn coordinates_label(location: &LocationData) -> Option<String> {
    let (lat, lng) = location.lat.zip(location.lng)?;
    Some(format!("{lat:.4}, {lng:.4}"))
}

#[function_component(LocationSummary)]
pub fn location_summary(props: &LocationSummaryProps) -> Html {
    let location = &props.location;

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-4">
            <h4 class="text-xs font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400 mb-2">
                {&props.title}
            </h4>
            if location.is_empty() {
                <p class="text-sm italic text-gray-400 dark:text-gray-500">{"No location provided"}</p>
            } else {
                <p class="text-sm text-gray-900 dark:text-gray-100">{&location.address}</p>
                <p class="text-sm text-gray-600 dark:text-gray-400">
                    {format!("Pincode: {}", if location.pincode.is_empty() { "-" } else { location.pincode.as_str() })}
                </p>
                if let Some(coords) = coordinates_label(location) {
                    <p class="text-xs text-gray-400 dark:text-gray-500 mt-1 font-mono">{coords}</p>
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_need_both_axes() {
        let mut location = LocationData::new("a", "500081");
        assert_eq!(coordinates_label(&location), None);
        location.lat = Some(17.385044);
        assert_eq!(coordinates_label(&location), None);
        location.lng = Some(78.486671);
        assert_eq!(coordinates_label(&location).as_deref(), Some("17.3850, 78.4867"));
    }
}
