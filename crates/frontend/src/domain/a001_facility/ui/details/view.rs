use care_contracts::domain::a001_facility::{FACILITY_FEATURES, FACILITY_TYPES};
use leptos::prelude::*;
use thaw::*;

use super::form::{FacilityField, FacilityForm};
use super::view_model::FacilityDetailsViewModel;
use crate::layout::notifications::use_notifications;
use crate::shared::components::form_fields::select::options_from;
use crate::shared::components::form_fields::{
    CheckboxFormField, ChecklistFormField, SelectFormField, TextAreaFormField, TextFormField,
};
use crate::shared::components::Form;
use crate::shared::filters::{BrowserHistory, QueryNavigator};
use crate::shared::form::{FieldBinding, FormController};

type Binding = FieldBinding<FacilityForm, FormController<FacilityForm>>;

#[component]
pub fn FacilityDetails(#[prop(optional)] facility_id: Option<String>) -> impl IntoView {
    let vm = FacilityDetailsViewModel::new(facility_id);
    let notifications = use_notifications();
    let form = vm.form;
    vm.load(notifications);

    // Cascading lookups follow the parent selection
    let state_id = Memo::new(move |_| form.value(FacilityField::State).into_integer());
    let district_id = Memo::new(move |_| form.value(FacilityField::District).into_integer());
    let local_body_id = Memo::new(move |_| form.value(FacilityField::LocalBody).into_integer());
    {
        let vm = vm.clone();
        Effect::new(move |_| vm.load_children(0, state_id.get()));
    }
    {
        let vm = vm.clone();
        Effect::new(move |_| vm.load_children(1, district_id.get()));
    }
    {
        let vm = vm.clone();
        Effect::new(move |_| vm.load_children(2, local_body_id.get()));
    }

    let rules = vm.rules;
    let bind = move |field: FacilityField| -> Binding {
        rules.with_value(|rules| form.bind_with(rules, field))
    };

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| vm.submit(notifications, BrowserHistory))
    };
    let on_cancel = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let target = vm
                .facility_id
                .as_ref()
                .map(|id| format!("/facility/{}", id))
                .unwrap_or_else(|| "/facility".to_string());
            BrowserHistory.push_path(&target);
        })
    };

    let facility_types = options_from(FACILITY_TYPES);
    let feature_options = options_from(FACILITY_FEATURES);
    let header = vm.header_text();
    let submit_text = vm.submit_text();
    let (states, districts, local_bodies, wards) = (vm.states, vm.districts, vm.local_bodies, vm.wards);
    let is_loading = vm.is_loading;
    let is_saving = vm.is_saving;
    let last_updated = vm.last_updated;

    view! {
        <div class="page facility-details">
            <h2 class="page__title">{header}</h2>
            <Show
                when=move || !is_loading.get()
                fallback=|| view! { <Spinner /> }
            >
                {
                let facility_types = facility_types.clone();
                let feature_options = feature_options.clone();
                view! {
                <Form
                    on_submit=on_submit
                    on_cancel=on_cancel
                    submit_label=submit_text
                    busy=is_saving
                    last_updated=last_updated
                >
                    <div class="form__grid">
                        <SelectFormField
                            field=FacilityField::FacilityType
                            binding=bind(FacilityField::FacilityType)
                            label="Facility Type"
                            options=facility_types.clone()
                            required=true
                        />
                        <TextFormField
                            field=FacilityField::Name
                            binding=bind(FacilityField::Name)
                            label="Facility Name"
                            required=true
                        />
                        <ChecklistFormField
                            field=FacilityField::Features
                            binding=bind(FacilityField::Features)
                            label="Features"
                            options=feature_options.clone()
                        />
                        <SelectFormField
                            field=FacilityField::State
                            binding=bind(FacilityField::State)
                            label="State"
                            options=states
                            placeholder="Choose State"
                            required=true
                        />
                        <SelectFormField
                            field=FacilityField::District
                            binding=bind(FacilityField::District)
                            label="District"
                            options=districts
                            placeholder="Choose District"
                            required=true
                        />
                        <SelectFormField
                            field=FacilityField::LocalBody
                            binding=bind(FacilityField::LocalBody)
                            label="Localbody"
                            options=local_bodies
                            placeholder="Choose Localbody"
                            required=true
                        />
                        <SelectFormField
                            field=FacilityField::Ward
                            binding=bind(FacilityField::Ward)
                            label="Ward"
                            options=wards
                            placeholder="Choose Ward"
                            required=true
                        />
                        <TextAreaFormField
                            field=FacilityField::Address
                            binding=bind(FacilityField::Address)
                            label="Address"
                            required=true
                        />
                        <TextFormField
                            field=FacilityField::Pincode
                            binding=bind(FacilityField::Pincode)
                            label="Pincode"
                            required=true
                        />
                        <TextFormField
                            field=FacilityField::PhoneNumber
                            binding=bind(FacilityField::PhoneNumber)
                            label="Emergency Contact Number"
                            input_type="tel"
                            required=true
                        />
                        <CheckboxFormField
                            field=FacilityField::KaspEmpanelled
                            binding=bind(FacilityField::KaspEmpanelled)
                            label="KASP Empanelled"
                        />
                        <TextFormField
                            field=FacilityField::Latitude
                            binding=bind(FacilityField::Latitude)
                            label="Latitude"
                        />
                        <TextFormField
                            field=FacilityField::Longitude
                            binding=bind(FacilityField::Longitude)
                            label="Longitude"
                        />
                    </div>
                    <h3 class="form__section">"Oxygen"</h3>
                    <div class="form__grid">
                        {OXYGEN_FIELDS
                            .iter()
                            .map(|(field, label)| view! {
                                <TextFormField
                                    field=*field
                                    binding=bind(*field)
                                    label=*label
                                    input_type="number"
                                />
                            })
                            .collect_view()}
                    </div>
                </Form>
                }
                }
            </Show>
        </div>
    }
}

const OXYGEN_FIELDS: &[(FacilityField, &str)] = &[
    (FacilityField::OxygenCapacity, "Liquid Oxygen Capacity"),
    (FacilityField::ExpectedOxygenRequirement, "Expected Burn Rate"),
    (FacilityField::TypeBCylinders, "B Type Cylinders"),
    (FacilityField::ExpectedTypeBCylinders, "Expected Burn Rate (B)"),
    (FacilityField::TypeCCylinders, "C Type Cylinders"),
    (FacilityField::ExpectedTypeCCylinders, "Expected Burn Rate (C)"),
    (FacilityField::TypeDCylinders, "D Type Cylinders"),
    (FacilityField::ExpectedTypeDCylinders, "Expected Burn Rate (D)"),
];
