mod filter_form;
mod model;
mod state;

use care_contracts::domain::a003_external_result::ExternalResultDto;
use care_contracts::domain::geo::{LocalBodyRef, WardRef};
use leptos::prelude::*;
use thaw::*;

use self::filter_form::{filter_rules, reversed_range, ResultFilterField, ResultFilterForm};
use self::state::{
    api_params, badge_specs, create_state, display_value, export_params, LsgWardLookup,
    EPHEMERAL_KEYS, RESULT_LIMIT, STORAGE_KEY,
};
use crate::layout::notifications::{use_notifications, NotificationService};
use crate::shared::components::form_fields::{ChecklistFormField, SelectOption, TextFormField};
use crate::shared::components::{FilterBadges, PaginationControls, SearchInput};
use crate::shared::export::{download_csv, export_filename};
use crate::shared::filters::{
    reconcile_badges, FilterController, LocalStorage, PersistedFilters, RequestSeq,
};
use crate::shared::form::{FormAction, FormController, FormField as _};

pub use self::state::ExternalResultListState;

#[component]
pub fn ExternalResultList() -> impl IntoView {
    let state = create_state(LsgWardLookup::load(&LocalStorage));
    let filters = FilterController::browser_persisted(
        PersistedFilters::new(LocalStorage, STORAGE_KEY),
        EPHEMERAL_KEYS,
    );
    let notifications = use_notifications();
    let seq = RequestSeq::new();
    let requests = StoredValue::new(seq.clone());
    on_cleanup(move || seq.cancel_all());

    Effect::new(move |_| {
        let current = filters.filters().get();
        let params = api_params(&current);
        let seq = requests.get_value();
        let ticket = seq.next();
        state.update(|s| s.is_loading = true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::list_results(&params).await;
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
                    log::error!("external results: {}", e);
                    state.update(|s| s.is_loading = false);
                }
            }
        });
    });

    // Names of deselected local bodies and wards are forgotten
    Effect::new(move |_| {
        let current = filters.filters().get();
        let kept = state.with_untracked(|s| s.lookup.retained(&current));
        if state.with_untracked(|s| s.lookup != kept) {
            kept.save(&LocalStorage);
            state.update(|s| s.lookup = kept);
        }
    });

    let badges = Signal::derive(move || {
        let current = filters.filters().get();
        state.with(|s| {
            reconcile_badges(&current, &badge_specs(&s.lookup), |k, v| {
                display_value(&s.lookup, k, v)
            })
        })
    });
    let pagination = Signal::derive(move || filters.pagination(RESULT_LIMIT));
    let total_count = Signal::derive(move || state.with(|s| s.total_count));
    let name_value =
        Signal::derive(move || filters.filters().with(|f| f.text("name").unwrap_or_default()));
    let phone_value = Signal::derive(move || {
        filters
            .filters()
            .with(|f| f.text("mobile_number").unwrap_or_default())
    });

    let export = move |_| {
        if state.with_untracked(|s| s.is_exporting) {
            return;
        }
        state.update(|s| s.is_exporting = true);
        let params = export_params(&filters.current());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::export_csv(&params).await.and_then(|csv| {
                let filename = export_filename("external-result-", chrono::Local::now().naive_local());
                download_csv(&csv, &filename)
            });
            state.update(|s| s.is_exporting = false);
            if let Err(e) = outcome {
                notifications.notify_error(format!("Export failed: {}", e));
            }
        });
    };

    view! {
        <div class="page external-result-list">
            <h2 class="page__title">"External Results"</h2>
            <Flex align=FlexAlign::FlexStart gap=FlexGap::Large>
                <div class="stat-card">
                    <div class="stat-card__label">"Total Results"</div>
                    <div class="stat-card__value">{move || total_count.get()}</div>
                </div>
                <div class="external-result-list__search">
                    <div class="form__label">"Search by Name"</div>
                    <SearchInput
                        value=name_value
                        placeholder="Search by Patient Name"
                        on_search=Callback::new(move |term: String| filters.search("name", term))
                    />
                    <div class="form__label">"Search by number"</div>
                    <SearchInput
                        value=phone_value
                        placeholder="Search by Phone Number"
                        id="mobile_number"
                        on_search=Callback::new(move |term: String| filters.search("mobile_number", term))
                    />
                </div>
                <Flex vertical=true gap=FlexGap::Small>
                    <button
                        type="button"
                        class="button button--primary"
                        on:click=move |_| filters.navigate("/external_results/upload")
                    >
                        "Upload List"
                    </button>
                    <button
                        type="button"
                        class="button button--primary"
                        disabled=move || state.with(|s| s.is_exporting)
                        on:click=export
                    >
                        <Show when=move || state.with(|s| s.is_exporting)>
                            <Spinner size=SpinnerSize::Small />
                        </Show>
                        "Export"
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| state.update(|s| s.show_filters = !s.show_filters)
                    >
                        "Filters"
                    </button>
                </Flex>
            </Flex>

            <Show when=move || state.with(|s| s.show_filters)>
                <ResultFilterPanel
                    filters=filters
                    state=state
                    notifications=notifications
                />
            </Show>

            <FilterBadges
                badges=badges
                on_remove=Callback::new(move |badge| filters.remove_badge(&badge))
            />

            <ResultTable
                items=Signal::derive(move || state.with(|s| s.items.clone()))
                is_loading=Signal::derive(move || state.with(|s| s.is_loading))
            />

            <Show when=move || { total_count.get() > RESULT_LIMIT as usize }>
                <PaginationControls
                    pagination=pagination
                    total_count=total_count
                    on_page_change=Callback::new(move |page| filters.set_page(page, RESULT_LIMIT))
                    on_limit_change=Callback::new(move |limit| filters.set_limit(limit))
                />
            </Show>
        </div>
    }
}

#[component]
fn ResultTable(
    #[prop(into)] items: Signal<Vec<ExternalResultDto>>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"SRF ID"</th>
                    <th>"Status"</th>
                    <th>"Result Date"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    if is_loading.get() {
                        view! {
                            <tr>
                                <td colspan="4"><Spinner /></td>
                            </tr>
                        }
                            .into_any()
                    } else if items.with(Vec::is_empty) {
                        view! {
                            <tr>
                                <td colspan="4" class="table__empty">"No Results Found"</td>
                            </tr>
                        }
                            .into_any()
                    } else {
                        items
                            .get()
                            .into_iter()
                            .map(|result| {
                                let href = format!("/external_results/{}", result.id);
                                view! {
                                    <tr>
                                        <td><a href=href>{result.name}</a></td>
                                        <td>{result.srf_id}</td>
                                        <td>
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{result.result}</Badge>
                                        </td>
                                        <td>{result.result_date.unwrap_or_else(|| "-".to_string())}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}

fn lsg_options(lsgs: &[LocalBodyRef]) -> Vec<SelectOption> {
    lsgs.iter().map(|l| SelectOption::new(l.id, l.name.clone())).collect()
}

fn ward_options(wards: &[WardRef]) -> Vec<SelectOption> {
    wards
        .iter()
        .map(|w| SelectOption::new(w.id, format!("{}: {}", w.number, w.name)))
        .collect()
}

/// Draft filters; nothing reaches the URL until "Apply"
#[component]
fn ResultFilterPanel(
    filters: FilterController,
    state: RwSignal<ExternalResultListState>,
    notifications: NotificationService,
) -> impl IntoView {
    let draft = FormController::new(ResultFilterForm::from_filters(&filters.current()));
    let rules = StoredValue::new(filter_rules());
    let local_bodies = RwSignal::new(Vec::<LocalBodyRef>::new());
    let wards = RwSignal::new(Vec::<WardRef>::new());
    let ward_requests = StoredValue::new(RequestSeq::new());

    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch_local_bodies().await {
            Ok(list) => local_bodies.set(list),
            Err(e) => log::error!("local bodies: {}", e),
        }
    });

    // Ward choices follow the selected local bodies
    let selected_lsgs = Memo::new(move |_| draft.state().with(|s| s.form.local_bodies.clone()));
    Effect::new(move |_| {
        let lsgs = selected_lsgs.get();
        let seq = ward_requests.get_value();
        let ticket = seq.next();
        wasm_bindgen_futures::spawn_local(async move {
            let mut loaded = Vec::new();
            for lsg in &lsgs {
                match model::fetch_wards(lsg).await {
                    Ok(mut list) => loaded.append(&mut list),
                    Err(e) => log::error!("wards of {}: {}", lsg, e),
                }
            }
            if !seq.is_current(ticket) {
                return;
            }
            wards.set(loaded);
            let mut form = draft.form_untracked();
            let before = form.wards.len();
            wards.with_untracked(|all| {
                form.retain_wards(|id| {
                    all.iter()
                        .find(|w| w.id.to_string() == id)
                        .map(|w| w.local_body_id.to_string())
                })
            });
            if form.wards.len() != before {
                draft.dispatch(FormAction::SetForm(form));
            }
        });
    });

    let apply = move |_| {
        let report = rules.with_value(|r| draft.validate(r));
        if !report.is_valid() {
            return;
        }
        let form = draft.form_untracked();
        if let Some(field) = reversed_range(&form) {
            notifications.notify_error(format!(
                "{} is earlier than the start of its range",
                field.name()
            ));
            return;
        }
        let lookup = LsgWardLookup {
            lsg_list: local_bodies.with_untracked(|all| {
                all.iter()
                    .filter(|l| form.local_bodies.contains(&l.id.to_string()))
                    .cloned()
                    .collect()
            }),
            ward_list: wards.with_untracked(|all| {
                all.iter()
                    .filter(|w| form.wards.contains(&w.id.to_string()))
                    .cloned()
                    .collect()
            }),
        };
        lookup.save(&LocalStorage);
        state.update(|s| {
            s.lookup = lookup;
            s.show_filters = false;
        });
        filters.apply_filter(form.to_filters());
    };
    let clear = move |_| draft.reset(ResultFilterForm::default());
    let date_field = move |field: ResultFilterField, label: &'static str| {
        view! {
            <TextFormField
                field=field
                binding=rules.with_value(|r| draft.bind_with(r, field))
                label=label
                input_type="date"
            />
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content">
                <ChecklistFormField
                    field=ResultFilterField::LocalBodies
                    binding=draft.bind()
                    label="Local Body"
                    options=Signal::derive(move || local_bodies.with(|l| lsg_options(l)))
                />
                <ChecklistFormField
                    field=ResultFilterField::Wards
                    binding=draft.bind()
                    label="Ward"
                    options=Signal::derive(move || wards.with(|w| ward_options(w)))
                />
                {date_field(ResultFilterField::CreatedDateAfter, "Created after")}
                {date_field(ResultFilterField::CreatedDateBefore, "Created before")}
                {date_field(ResultFilterField::ResultDateAfter, "Result after")}
                {date_field(ResultFilterField::ResultDateBefore, "Result before")}
                {date_field(ResultFilterField::SampleCollectionDateAfter, "Sample created after")}
                {date_field(ResultFilterField::SampleCollectionDateBefore, "Sample created before")}
                <TextFormField
                    field=ResultFilterField::SrfId
                    binding=draft.bind()
                    label="SRF ID"
                />
            </div>
            <Flex gap=FlexGap::Small>
                <button type="button" class="button button--ghost" on:click=clear>"Clear"</button>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| state.update(|s| s.show_filters = false)
                >
                    "Cancel"
                </button>
                <button type="button" class="button button--primary" on:click=apply>"Apply"</button>
            </Flex>
        </div>
    }
}
