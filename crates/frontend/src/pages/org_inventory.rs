use crate::layouts::OrganizationLayout;
use crate::mock::{self, InventoryItem};
use alshifa_frontend_common::components::{KpiCard, StatusBadge, Tone};
use yew::prelude::*;

/// Stock level derived from the quantity on hand and the item's reorder point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    Critical,
    Low,
    Good,
}

impl StockStatus {
    /// Items without a threshold (absent or zero) are never flagged
    pub fn for_item(quantity: u32, min_threshold: Option<u32>) -> Self {
        match min_threshold {
            Some(threshold) if threshold > 0 => {
                if quantity == 0 {
                    Self::Critical
                } else if quantity <= threshold {
                    Self::Low
                } else {
                    Self::Good
                }
            }
            _ => Self::Good,
        }
    }

    fn of(item: &InventoryItem) -> Self {
        Self::for_item(item.quantity, item.min_threshold)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Low => "Low",
            Self::Good => "Good",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            Self::Critical => Tone::Danger,
            Self::Low => Tone::Warning,
            Self::Good => Tone::Success,
        }
    }
}

fn needs_reorder(items: &[InventoryItem]) -> usize {
    items
        .iter()
        .filter(|item| StockStatus::of(item) != StockStatus::Good)
        .count()
}

#[function_component(OrgInventory)]
pub fn org_inventory() -> Html {
    let items = use_memo((), |_| mock::inventory());

    html! {
        <OrganizationLayout title="Inventory">
            <div class="grid gap-4 sm:grid-cols-2 mb-6">
                <KpiCard label="Tracked items" value={items.len().to_string()} />
                <KpiCard label="Needs reorder" value={needs_reorder(&items).to_string()} hint="Low or critical stock" />
            </div>
            <div class="bg-white dark:bg-gray-800 shadow overflow-hidden rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Item"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Category"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Quantity"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Reorder at"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        {for items.iter().map(|item| {
                            let status = StockStatus::of(item);
                            html! {
                                <tr key={item.name}>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-gray-100">{item.name}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">{item.category}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300">
                                        {format!("{} {}", item.quantity, item.unit)}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                        {item.min_threshold.filter(|t| *t > 0).map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <StatusBadge label={status.label()} tone={status.tone()} />
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </OrganizationLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(StockStatus::for_item(10, Some(10)), StockStatus::Low);
        assert_eq!(StockStatus::for_item(11, Some(10)), StockStatus::Good);
        assert_eq!(StockStatus::for_item(1, Some(10)), StockStatus::Low);
    }

    #[test]
    fn empty_shelf_is_critical_only_when_tracked() {
        assert_eq!(StockStatus::for_item(0, Some(10)), StockStatus::Critical);
        assert_eq!(StockStatus::for_item(0, None), StockStatus::Good);
        assert_eq!(StockStatus::for_item(0, Some(0)), StockStatus::Good);
    }

    #[test]
    fn no_threshold_is_always_good() {
        for quantity in [0, 3, 500] {
            assert_eq!(StockStatus::for_item(quantity, None), StockStatus::Good);
        }
    }

    #[test]
    fn sample_stock_has_three_items_to_reorder() {
        // lidocaine 18/20, composite 0/5, alginate 5/5; masks are untracked
        assert_eq!(needs_reorder(&mock::inventory()), 3);
    }
}
