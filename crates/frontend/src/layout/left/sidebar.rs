//! Sidebar with one entry per console page

use leptos::prelude::*;

use crate::routes::routes::AppPage;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    page: AppPage,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            href: "/facility/create",
            label: "Create Facility",
            page: AppPage::FacilityCreate,
        },
        MenuItem {
            href: "/assets",
            label: "Assets",
            page: AppPage::Assets,
        },
        MenuItem {
            href: "/external_results",
            label: "External Results",
            page: AppPage::ExternalResults,
        },
        MenuItem {
            href: "/waveform",
            label: "Waveform",
            page: AppPage::Waveform,
        },
    ]
}

#[component]
pub fn Sidebar(active: AppPage) -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__brand">{active.title()}</div>
            {menu_items()
                .into_iter()
                .map(|item| {
                    let is_active = item.page == active;
                    view! {
                        <a
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=is_active
                            href=item.href
                        >
                            {item.label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
