use super::nav::{ADMIN_NAV, NavItem, ORGANIZATION_NAV};
use crate::auth_guard::use_logout;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionLayoutProps {
    /// Page heading shown in the top bar
    pub title: AttrValue,
    pub children: Children,
}

#[derive(Properties, PartialEq)]
struct SidebarLayoutProps {
    brand: &'static str,
    items: &'static [NavItem],
    title: AttrValue,
    children: Children,
}

#[function_component(SidebarLayout)]
fn sidebar_layout(props: &SidebarLayoutProps) -> Html {
    let current = use_route::<Route>();
    let on_logout = use_logout();

    html! {
        <div class="min-h-screen flex bg-gray-50 dark:bg-gray-900">
            <aside class="w-64 flex-shrink-0 bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700">
                <div class="h-16 flex items-center px-6 border-b border-gray-200 dark:border-gray-700">
                    <span class="text-lg font-bold text-teal-700 dark:text-teal-300">{"Al-Shifa"}</span>
                    <span class="ml-2 text-xs uppercase tracking-wide text-gray-500 dark:text-gray-400">{props.brand}</span>
                </div>
                <nav class="p-4 space-y-1">
                    {for props.items.iter().map(|item| {
                        let classes = if item.is_active(current.as_ref()) {
                            "block px-3 py-2 rounded-md text-sm font-medium bg-teal-50 text-teal-700 dark:bg-teal-900/30 dark:text-teal-300"
                        } else {
                            "block px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-700"
                        };
                        html! {
                            <Link<Route> to={item.route} {classes}>{item.label}</Link<Route>>
                        }
                    })}
                </nav>
            </aside>
            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-16 flex items-center justify-between px-6 bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                    <h1 class="text-xl font-semibold text-gray-900 dark:text-white">{&props.title}</h1>
                    <button
                        onclick={on_logout}
                        class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
                    >
                        {"Sign Out"}
                    </button>
                </header>
                <main class="flex-1 p-6 overflow-y-auto">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

#[function_component(AdminLayout)]
pub fn admin_layout(props: &SectionLayoutProps) -> Html {
    html! {
        <SidebarLayout brand="Admin" items={ADMIN_NAV} title={props.title.clone()}>
            {props.children.clone()}
        </SidebarLayout>
    }
}

#[function_component(OrganizationLayout)]
pub fn organization_layout(props: &SectionLayoutProps) -> Html {
    html! {
        <SidebarLayout brand="Organization" items={ORGANIZATION_NAV} title={props.title.clone()}>
            {props.children.clone()}
        </SidebarLayout>
    }
}
