use leptos::prelude::*;

use super::label::FormField;
use crate::shared::filters::PLACEHOLDER;
use crate::shared::form::{FieldBinding, FieldChange, FieldValue, FormDispatch, FormField as _, FormRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// Options from `(id, name)` pairs such as the facility type table
pub fn options_from<V: ToString>(pairs: &[(V, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption::new(value.to_string(), *label))
        .collect()
}

/// Text the `<select>` should show for a field value
///
/// Unset ids and empty text map onto the placeholder option.
pub fn selected_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Integer(Some(id)) => id.to_string(),
        FieldValue::Integer(None) => PLACEHOLDER.to_string(),
        other if other.is_blank() => PLACEHOLDER.to_string(),
        other => other.as_text(),
    }
}

/// Change event of a picked option; the placeholder passes through as `"--"`
pub fn select_change<F>(field: F, raw: String) -> FieldChange<F> {
    FieldChange {
        field,
        value: FieldValue::Text(raw),
    }
}

/// Dropdown whose first option is the `"--"` placeholder
///
/// The raw option value is emitted as text; records coerce it (the
/// placeholder reads as "no selection").
#[component]
pub fn SelectFormField<R, D>(
    field: R::Field,
    binding: FieldBinding<R, D>,
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    /// Placeholder text, "Select" by default
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView
where
    R: FormRecord,
    D: FormDispatch<R>,
{
    let id = id.unwrap_or_else(|| field.name().to_string());
    let on_change = binding.change_handler();
    let selected = {
        let binding = binding.clone();
        Signal::derive(move || selected_value(&binding.value(field)))
    };
    let error = Signal::derive(move || binding.error(field));

    view! {
        <FormField label=label id=id.clone() required=required error=error class=class>
            <select
                id=id.clone()
                name=field.name()
                class="form__select"
                required=required
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || selected.get()
                on:change=move |ev| on_change(select_change(field, event_target_value(&ev)))
            >
                <option value=PLACEHOLDER selected=move || selected.get() == PLACEHOLDER>
                    {move || placeholder.get().unwrap_or_else(|| "Select".to_string())}
                </option>
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let value = option.value.clone();
                        let is_selected = move || selected.get() == value;
                        view! {
                            <option value=option.value selected=is_selected>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </FormField>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::navigator::MemoryHistory;
    use crate::shared::filters::{FilterController, FilterSet, FilterSync};
    use crate::shared::form::test_support::{PreferenceField, PreferenceForm};
    use crate::shared::form::validation::required_selection;
    use crate::shared::form::{FormController, FormField as _, FormValidation, REQUIRED};

    #[test]
    fn test_selected_value_maps_unset_to_placeholder() {
        assert_eq!(selected_value(&FieldValue::Integer(None)), "--");
        assert_eq!(selected_value(&FieldValue::Integer(Some(4))), "4");
        assert_eq!(selected_value(&FieldValue::from("")), "--");
        assert_eq!(selected_value(&FieldValue::from("KL")), "KL");
    }

    #[test]
    fn test_options_from_pairs() {
        let options = options_from(&[(1, "Educational Inst"), (2, "Private Hospital")]);
        assert_eq!(options[1], SelectOption::new(2, "Private Hospital"));
    }

    #[test]
    fn test_placeholder_pick_clears_selection() {
        let controller = FormController::new(PreferenceForm {
            kind: Some(2),
            ..Default::default()
        });
        let rules = FormValidation::new().rule(PreferenceField::Kind, required_selection());
        let binding = controller.bind_with(&rules, PreferenceField::Kind);
        let on_change = binding.change_handler();

        on_change(select_change(PreferenceField::Kind, PLACEHOLDER.to_string()));
        assert_eq!(controller.form_untracked().kind, None);
        assert_eq!(binding.error(PreferenceField::Kind).as_deref(), Some(REQUIRED));
        assert_eq!(selected_value(&binding.value(PreferenceField::Kind)), PLACEHOLDER);

        on_change(select_change(PreferenceField::Kind, "3".to_string()));
        assert_eq!(controller.form_untracked().kind, Some(3));
        assert_eq!(binding.error(PreferenceField::Kind), None);
    }

    #[test]
    fn test_placeholder_pick_prunes_external_filter() {
        let history = MemoryHistory::new("/assets?kind=4&search=pump");
        let filters = FilterController::new(FilterSync::new(history.clone()));
        let binding: FieldBinding<PreferenceForm, FormController<PreferenceForm>> =
            FieldBinding::external(
                move || FieldValue::from(filters.current().text("kind").unwrap_or_default()),
                || None,
                move |change: FieldChange<PreferenceField>| {
                    filters.apply_filter(
                        FilterSet::new().with(change.field.name(), change.value.into_text()),
                    );
                },
            );

        binding.change_handler()(select_change(PreferenceField::Kind, PLACEHOLDER.to_string()));

        assert!(!filters.current().is_active("kind"));
        assert_eq!(history.current_url(), "/assets?search=pump");
        assert_eq!(selected_value(&binding.value(PreferenceField::Kind)), PLACEHOLDER);
    }
}
