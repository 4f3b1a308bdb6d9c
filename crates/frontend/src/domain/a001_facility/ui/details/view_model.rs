use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::form::{facility_rules, FacilityField, FacilityForm};
use super::model;
use crate::layout::notifications::NotificationService;
use crate::shared::components::form_fields::SelectOption;
use crate::shared::filters::{QueryNavigator, RequestSeq};
use crate::shared::form::{FormController, FormField, FormValidation};

/// State and commands of the facility create/edit page
#[derive(Clone)]
pub struct FacilityDetailsViewModel {
    pub facility_id: Option<String>,
    pub form: FormController<FacilityForm>,
    pub rules: StoredValue<FormValidation<FacilityForm>>,
    pub states: RwSignal<Vec<SelectOption>>,
    pub districts: RwSignal<Vec<SelectOption>>,
    pub local_bodies: RwSignal<Vec<SelectOption>>,
    pub wards: RwSignal<Vec<SelectOption>>,
    pub is_loading: RwSignal<bool>,
    pub is_saving: RwSignal<bool>,
    pub last_updated: RwSignal<Option<String>>,
    lookups: StoredValue<[RequestSeq; 3]>,
}

impl FacilityDetailsViewModel {
    pub fn new(facility_id: Option<String>) -> Self {
        Self {
            facility_id,
            form: FormController::new(FacilityForm::default()),
            rules: StoredValue::new(facility_rules()),
            states: RwSignal::new(Vec::new()),
            districts: RwSignal::new(Vec::new()),
            local_bodies: RwSignal::new(Vec::new()),
            wards: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(false),
            is_saving: RwSignal::new(false),
            last_updated: RwSignal::new(None),
            lookups: StoredValue::new(Default::default()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.facility_id.is_some()
    }

    pub fn header_text(&self) -> &'static str {
        if self.is_edit() {
            "Update Facility"
        } else {
            "Create Facility"
        }
    }

    pub fn submit_text(&self) -> &'static str {
        if self.is_edit() {
            "Update Facility"
        } else {
            "Save Facility"
        }
    }

    pub fn load(&self, notifications: NotificationService) {
        let states = self.states;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_states().await {
                Ok(list) => states.set(list.into_iter().map(|s| SelectOption::new(s.id, s.name)).collect()),
                Err(e) => notifications.notify_error(format!("Failed to load states: {}", e)),
            }
        });

        let Some(id) = self.facility_id.clone() else {
            return;
        };
        let form = self.form;
        let is_loading = self.is_loading;
        let last_updated = self.last_updated;
        is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(dto) => {
                    form.reset(FacilityForm::from_dto(&dto));
                    last_updated.set(dto.modified_date);
                }
                Err(e) => notifications.notify_error(format!("Failed to load facility: {}", e)),
            }
            is_loading.set(false);
        });
    }

    /// Refill one lookup list when its parent selection changes
    ///
    /// `level` is 0 for districts, 1 for local bodies and 2 for wards. A
    /// response for an older parent is dropped.
    pub fn load_children(&self, level: usize, parent: Option<i64>) {
        let Some(seq) = self.lookups.with_value(|l| l.get(level).cloned()) else {
            return;
        };
        let ticket = seq.next();
        let target = match level {
            0 => self.districts,
            1 => self.local_bodies,
            _ => self.wards,
        };
        let Some(parent) = parent.filter(|id| *id > 0) else {
            target.set(Vec::new());
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let options: Result<Vec<SelectOption>, String> = match level {
                0 => model::fetch_districts(parent)
                    .await
                    .map(|l| l.into_iter().map(|d| SelectOption::new(d.id, d.name)).collect()),
                1 => model::fetch_local_bodies(parent)
                    .await
                    .map(|l| l.into_iter().map(|b| SelectOption::new(b.id, b.name)).collect()),
                _ => model::fetch_wards(parent).await.map(|l| {
                    l.into_iter()
                        .map(|w| SelectOption::new(w.id, format!("{}: {}", w.number, w.name)))
                        .collect()
                }),
            };
            if !seq.is_current(ticket) {
                return;
            }
            match options {
                Ok(options) => target.set(options),
                Err(e) => log::warn!("{}", e),
            }
        });
    }

    /// Validate, then create or update; navigates away on success
    pub fn submit<N: QueryNavigator + Clone>(&self, notifications: NotificationService, navigator: N) {
        let report = self.rules.with_value(|rules| self.form.validate(rules));
        if let Some(field) = report.first_invalid {
            scroll_to_field(field);
            return;
        }

        let request = self.form.form_untracked().to_request();
        let facility_id = self.facility_id.clone();
        let form = self.form;
        let is_saving = self.is_saving;
        is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match model::save(facility_id.as_deref(), &request).await {
                Ok(id) => {
                    form.reset(FacilityForm::default());
                    match facility_id {
                        None => {
                            notifications.notify_success("Facility added successfully");
                            navigator.push_path(&format!("/facility/{}/bed", id));
                        }
                        Some(existing) => {
                            notifications.notify_success("Facility updated successfully");
                            navigator.push_path(&format!("/facility/{}", existing));
                        }
                    }
                }
                Err(e) => notifications.notify_error(format!("Something went wrong: {}", e)),
            }
            is_saving.set(false);
        });
    }
}

fn scroll_to_field(field: FacilityField) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(field.name()))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
