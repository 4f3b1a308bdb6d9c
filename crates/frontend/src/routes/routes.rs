use leptos::prelude::*;

use crate::domain::a001_facility::ui::details::FacilityDetails;
use crate::domain::a002_asset::ui::list::AssetList;
use crate::domain::a003_external_result::ui::list::ExternalResultList;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::waveform::demo::WaveformDemo;

/// Page selected by the location path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppPage {
    FacilityCreate,
    FacilityUpdate(String),
    Assets,
    ExternalResults,
    Waveform,
    NotFound(String),
}

impl AppPage {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["assets"] => AppPage::Assets,
            ["facility", "create"] => AppPage::FacilityCreate,
            ["facility", id, "update"] => AppPage::FacilityUpdate(id.to_string()),
            ["external_results"] => AppPage::ExternalResults,
            ["waveform"] => AppPage::Waveform,
            _ => AppPage::NotFound(path.to_string()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::FacilityCreate => "Create Facility",
            AppPage::FacilityUpdate(_) => "Update Facility",
            AppPage::Assets => "Assets",
            AppPage::ExternalResults => "External Results",
            AppPage::Waveform => "Waveform",
            AppPage::NotFound(_) => "Not Found",
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

fn render_page(page: AppPage) -> AnyView {
    match page {
        AppPage::FacilityCreate => view! { <FacilityDetails /> }.into_any(),
        AppPage::FacilityUpdate(id) => view! { <FacilityDetails facility_id=id /> }.into_any(),
        AppPage::Assets => view! { <AssetList /> }.into_any(),
        AppPage::ExternalResults => view! { <ExternalResultList /> }.into_any(),
        AppPage::Waveform => view! { <WaveformDemo /> }.into_any(),
        AppPage::NotFound(path) => view! {
            <div class="page page--not-found">
                <h2 class="page__title">"Page not found"</h2>
                <p>{path}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let page = AppPage::from_path(&current_path());
    log::debug!("routing to {:?}", page);
    let active = page.clone();

    view! {
        <Shell
            left=move || view! { <Sidebar active=active.clone() /> }.into_any()
            center=move || render_page(page.clone())
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_to_pages() {
        assert_eq!(AppPage::from_path("/"), AppPage::Assets);
        assert_eq!(AppPage::from_path("/facility/create"), AppPage::FacilityCreate);
        assert_eq!(
            AppPage::from_path("/facility/5c1e/update/"),
            AppPage::FacilityUpdate("5c1e".to_string())
        );
        assert_eq!(AppPage::from_path("/external_results"), AppPage::ExternalResults);
        assert_eq!(
            AppPage::from_path("/facility/5c1e"),
            AppPage::NotFound("/facility/5c1e".to_string())
        );
    }
}
