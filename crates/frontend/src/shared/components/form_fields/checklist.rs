use std::collections::BTreeSet;

use leptos::prelude::*;

use super::label::FormField;
use super::select::SelectOption;
use crate::shared::form::{FieldBinding, FieldChange, FieldValue, FormDispatch, FormField as _, FormRecord};

/// Selection after toggling `id`, kept in option order
pub fn toggled(options: &[SelectOption], selected: &BTreeSet<String>, id: &str, checked: bool) -> Vec<String> {
    options
        .iter()
        .map(|o| o.value.clone())
        .filter(|value| {
            if value == id {
                checked
            } else {
                selected.contains(value)
            }
        })
        .collect()
}

/// Change event after toggling option `id`
pub fn checklist_change<F>(
    field: F,
    options: &[SelectOption],
    selected: &BTreeSet<String>,
    id: &str,
    checked: bool,
) -> FieldChange<F> {
    FieldChange {
        field,
        value: FieldValue::List(toggled(options, selected, id, checked)),
    }
}

/// Multi-select rendered as a list of checkboxes; emits [`FieldValue::List`]
#[component]
pub fn ChecklistFormField<R, D>(
    field: R::Field,
    binding: FieldBinding<R, D>,
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] required: bool,
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
        Signal::derive(move || {
            binding
                .value(field)
                .into_list()
                .into_iter()
                .collect::<BTreeSet<String>>()
        })
    };
    let error = Signal::derive(move || binding.error(field));
    let prefix = id.clone();

    view! {
        <FormField label=label id=id.clone() required=required error=error class=class>
            <div id=id class="form__checklist">
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let value = option.value.clone();
                        let input_id = format!("{}-{}", prefix, value);
                        let label_for = input_id.clone();
                        let on_change = on_change.clone();
                        let checked = {
                            let value = value.clone();
                            move || selected.with(|s| s.contains(&value))
                        };
                        view! {
                            <label class="form__checkbox-wrapper" for=label_for>
                                <input
                                    id=input_id
                                    type="checkbox"
                                    class="form__checkbox"
                                    prop:checked=checked
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        let change = options.with_untracked(|all| {
                                            selected.with_untracked(|s| {
                                                checklist_change(field, all, s, &value, checked)
                                            })
                                        });
                                        on_change(change);
                                    }
                                />
                                <span class="form__checkbox-label">{option.label}</span>
                            </label>
                        }
                    }
                />
            </div>
        </FormField>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::test_support::{PreferenceField, PreferenceForm};
    use crate::shared::form::validation::required;
    use crate::shared::form::{FormController, FormValidation, REQUIRED};

    #[test]
    fn test_toggled_keeps_option_order() {
        let options = vec![
            SelectOption::new(1, "Oxygen"),
            SelectOption::new(2, "Ventilator"),
            SelectOption::new(3, "ICU"),
        ];
        let selected: BTreeSet<String> = ["3".to_string()].into_iter().collect();

        assert_eq!(toggled(&options, &selected, "1", true), vec!["1", "3"]);
        assert_eq!(toggled(&options, &selected, "3", false), Vec::<String>::new());
    }

    #[test]
    fn test_unchecking_last_option_reports_required() {
        let options = vec![
            SelectOption::new("sms", "SMS"),
            SelectOption::new("email", "Email"),
        ];
        let controller = FormController::new(PreferenceForm {
            channels: vec!["sms".to_string()],
            ..Default::default()
        });
        let rules = FormValidation::new().rule(PreferenceField::Channels, required());
        let binding = controller.bind_with(&rules, PreferenceField::Channels);
        let on_change = binding.change_handler();
        let selected = |c: FormController<PreferenceForm>| -> BTreeSet<String> {
            c.form_untracked().channels.into_iter().collect()
        };

        on_change(checklist_change(
            PreferenceField::Channels,
            &options,
            &selected(controller),
            "sms",
            false,
        ));
        assert!(controller.form_untracked().channels.is_empty());
        assert_eq!(binding.error(PreferenceField::Channels).as_deref(), Some(REQUIRED));

        on_change(checklist_change(
            PreferenceField::Channels,
            &options,
            &selected(controller),
            "email",
            true,
        ));
        assert_eq!(
            binding.value(PreferenceField::Channels),
            FieldValue::List(vec!["email".to_string()])
        );
        assert_eq!(binding.error(PreferenceField::Channels), None);
    }
}
