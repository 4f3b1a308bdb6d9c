mod filter_form;
mod model;
mod state;

use care_contracts::domain::a002_asset::{AssetDto, AssetStatus, AssetType};
use leptos::prelude::*;
use thaw::*;

use self::filter_form::{AssetFilterField, AssetFilterForm, StatusField, StatusFilter};
use self::state::{
    api_params, badge_specs, create_state, display_value, NameLookup, NameLookups, PAGE_LIMIT,
};
use crate::layout::notifications::use_notifications;
use crate::shared::components::form_fields::{SelectFormField, SelectOption, TextFormField};
use crate::shared::components::{FilterBadges, PaginationControls, SearchInput};
use crate::shared::filters::{reconcile_badges, FilterController, FilterSet, RequestSeq};
use crate::shared::form::{FieldBinding, FieldValue, FormController};

pub use self::state::AssetListState;

#[component]
pub fn AssetList() -> impl IntoView {
    let state = create_state();
    let filters = FilterController::browser();
    let notifications = use_notifications();
    let seq = RequestSeq::new();
    let requests = StoredValue::new(seq.clone());
    let lookups = NameLookups::default();
    let name_lookups = StoredValue::new(lookups.clone());
    on_cleanup(move || {
        seq.cancel_all();
        lookups.cancel_all();
    });

    // Refetch whenever the committed filter set changes
    Effect::new(move |_| {
        let params = api_params(&filters.filters().get());
        let seq = requests.get_value();
        let ticket = seq.next();
        state.update(|s| s.is_loading = true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::list_assets(&params).await;
            if !seq.is_current(ticket) {
                return;
            }
            match result {
                Ok(page) => state.update(|s| {
                    s.items = page.results;
                    s.total_count = page.count;
                    s.is_loading = false;
                }),
                Err(e) => {
                    state.update(|s| s.is_loading = false);
                    notifications.notify_error(format!("Something went wrong..! {}", e));
                }
            }
        });
    });

    let facility_id = Memo::new(move |_| filters.filters().with(|f| f.text("facility")));
    let location_id = Memo::new(move |_| filters.filters().with(|f| f.text("location")));
    Effect::new(move |_| {
        let lookups = name_lookups.get_value();
        let ticket = lookups.start(NameLookup::Facility);
        let Some(facility) = facility_id.get() else {
            state.update(|s| lookups.settle(s, NameLookup::Facility, ticket, None));
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let name = model::fetch_facility_name(&facility).await.ok();
            if lookups.is_current(NameLookup::Facility, ticket) {
                state.update(|s| lookups.settle(s, NameLookup::Facility, ticket, name));
            }
        });
    });
    Effect::new(move |_| {
        let lookups = name_lookups.get_value();
        let ticket = lookups.start(NameLookup::Location);
        let (Some(facility), Some(location)) = (facility_id.get(), location_id.get()) else {
            state.update(|s| lookups.settle(s, NameLookup::Location, ticket, None));
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let name = model::fetch_location_name(&facility, &location).await.ok();
            if lookups.is_current(NameLookup::Location, ticket) {
                state.update(|s| lookups.settle(s, NameLookup::Location, ticket, name));
            }
        });
    });

    let badges = Signal::derive(move || {
        let current = filters.filters().get();
        state.with(|s| reconcile_badges(&current, &badge_specs(), |k, v| display_value(s, k, v)))
    });
    let pagination = Signal::derive(move || filters.pagination(PAGE_LIMIT));
    let total_count = Signal::derive(move || state.with(|s| s.total_count));
    let search_value =
        Signal::derive(move || filters.filters().with(|f| f.text("search").unwrap_or_default()));

    view! {
        <div class="page asset-list">
            <h2 class="page__title">"Assets"</h2>
            <Flex align=FlexAlign::Center gap=FlexGap::Large>
                <div class="stat-card">
                    <div class="stat-card__label">"Total Assets"</div>
                    <div class="stat-card__value">
                        {move || if state.with(|s| s.is_loading) {
                            view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                        } else {
                            view! { <span>{total_count.get()}</span> }.into_any()
                        }}
                    </div>
                </div>
                <SearchInput
                    value=search_value
                    placeholder="Search by Asset Name"
                    on_search=Callback::new(move |term: String| filters.search("search", term))
                />
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| state.update(|s| s.show_filters = !s.show_filters)
                >
                    "Advanced Filters"
                </button>
            </Flex>

            <Show when=move || state.with(|s| s.show_filters)>
                <AssetFilterPanel
                    filters=filters
                    on_close=Callback::new(move |_| state.update(|s| s.show_filters = false))
                />
            </Show>

            <FilterBadges
                badges=badges
                on_remove=Callback::new(move |badge| filters.remove_badge(&badge))
            />

            <Show
                when=move || !state.with(|s| s.is_loading)
                fallback=|| view! { <Spinner /> }
            >
                <AssetCards items=Signal::derive(move || state.with(|s| s.items.clone())) />
            </Show>

            <Show when=move || { total_count.get() > PAGE_LIMIT as usize }>
                <PaginationControls
                    pagination=pagination
                    total_count=total_count
                    on_page_change=Callback::new(move |page| filters.set_page(page, PAGE_LIMIT))
                />
            </Show>
        </div>
    }
}

#[component]
fn AssetCards(#[prop(into)] items: Signal<Vec<AssetDto>>) -> impl IntoView {
    view! {
        <div class="asset-grid">
            <Show
                when=move || items.with(|i| !i.is_empty())
                fallback=|| view! { <p class="asset-grid__empty">"No Assets Found"</p> }
            >
                <For
                    each=move || items.get()
                    key=|asset| asset.id.clone()
                    children=move |asset| {
                        let href = format!("/assets/{}", asset.id);
                        let (working_variant, working_text) = if asset.is_working {
                            (BadgeColor::Success, "Working")
                        } else {
                            (BadgeColor::Danger, "Not Working")
                        };
                        view! {
                            <a class="asset-card" href=href>
                                <p class="asset-card__name">{asset.name.clone()}</p>
                                <p class="asset-card__location">{asset.location_object.name.clone()}</p>
                                <Flex gap=FlexGap::Small>
                                    <Badge appearance=BadgeAppearance::Tint color=working_variant>{working_text}</Badge>
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{asset.status.as_str()}</Badge>
                                </Flex>
                            </a>
                        }
                    }
                />
            </Show>
        </div>
    }
}

/// Advanced filters; the draft applies on "Apply", status applies at once
#[component]
fn AssetFilterPanel(filters: FilterController, on_close: Callback<()>) -> impl IntoView {
    let draft = FormController::new(AssetFilterForm::from_filters(&filters.current()));

    let asset_types: Vec<SelectOption> = AssetType::all()
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect();
    let statuses: Vec<SelectOption> = AssetStatus::all()
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.as_str().replace('_', " ")))
        .collect();

    let status_binding: FieldBinding<StatusFilter, FormController<StatusFilter>> =
        FieldBinding::external(
            move || FieldValue::Text(filters.filters().with(|f| f.text("status").unwrap_or_default())),
            || None,
            move |change| {
                filters.apply_filter(FilterSet::new().with("status", change.value.into_text()));
            },
        );

    let apply = move |_| {
        filters.apply_filter(draft.form_untracked().to_filters());
        on_close.run(());
    };
    let clear = move |_| {
        filters.clear(&["facility", "location", "asset_type", "status"]);
        draft.reset(AssetFilterForm::default());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content">
                <TextFormField
                    field=AssetFilterField::Facility
                    binding=draft.bind()
                    label="Facility"
                    placeholder="Facility id"
                />
                <TextFormField
                    field=AssetFilterField::Location
                    binding=draft.bind()
                    label="Location"
                    placeholder="Location id"
                />
                <SelectFormField
                    field=AssetFilterField::AssetType
                    binding=draft.bind()
                    label="Asset Type"
                    options=asset_types
                />
                <SelectFormField
                    field=StatusField::Status
                    binding=status_binding
                    label="Status"
                    options=statuses
                />
            </div>
            <Flex gap=FlexGap::Small>
                <button type="button" class="button button--ghost" on:click=clear>"Clear"</button>
                <button type="button" class="button button--primary" on:click=apply>"Apply"</button>
            </Flex>
        </div>
    }
}
