use crate::routes::Route;

/// One sidebar entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

impl NavItem {
    const fn new(route: Route, label: &'static str) -> Self {
        Self { route, label }
    }

    /// Highlighted only on an exact route match
    pub fn is_active(&self, current: Option<&Route>) -> bool {
        current == Some(&self.route)
    }
}

pub const ADMIN_NAV: &[NavItem] = &[
    NavItem::new(Route::AdminDashboard, "Dashboard"),
    NavItem::new(Route::AdminKycDoctors, "Doctor Verification"),
    NavItem::new(Route::AdminKycOrganizations, "Organization Verification"),
];

pub const ORGANIZATION_NAV: &[NavItem] = &[
    NavItem::new(Route::OrgDashboard, "Dashboard"),
    NavItem::new(Route::OrgDoctors, "Doctors"),
    NavItem::new(Route::OrgInventory, "Inventory"),
    NavItem::new(Route::OrgProfile, "Profile"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn active(items: &[NavItem], current: Option<&Route>) -> Vec<&'static str> {
        items
            .iter()
            .filter(|item| item.is_active(current))
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn exactly_the_current_route_is_highlighted() {
        assert_eq!(
            active(ORGANIZATION_NAV, Some(&Route::OrgInventory)),
            vec!["Inventory"]
        );
        assert_eq!(
            active(ADMIN_NAV, Some(&Route::AdminKycDoctors)),
            vec!["Doctor Verification"]
        );
    }

    #[test]
    fn routes_outside_the_section_highlight_nothing() {
        assert!(active(ADMIN_NAV, Some(&Route::OrgDashboard)).is_empty());
        assert!(active(ORGANIZATION_NAV, None).is_empty());
    }
}
