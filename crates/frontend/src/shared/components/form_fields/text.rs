use leptos::prelude::*;

use super::label::FormField;
use crate::shared::form::{FieldBinding, FieldChange, FieldValue, FormDispatch, FormField as _, FormRecord};

/// Change event of a typed-in value
pub fn text_change<F>(field: F, raw: String) -> FieldChange<F> {
    FieldChange {
        field,
        value: FieldValue::Text(raw),
    }
}

/// Single-line input; emits [`FieldValue::Text`] on every keystroke
#[component]
pub fn TextFormField<R, D>(
    field: R::Field,
    binding: FieldBinding<R, D>,
    #[prop(into)] label: String,
    /// "text" (default), "email", "password", "search" or "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
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
    let value = {
        let binding = binding.clone();
        Signal::derive(move || binding.value(field).into_text())
    };
    let error = Signal::derive(move || binding.error(field));

    view! {
        <FormField label=label id=id.clone() required=required error=error class=class>
            <input
                id=id.clone()
                name=field.name()
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=move || placeholder.get().unwrap_or_default()
                autocomplete=move || autocomplete.get().unwrap_or_default()
                required=required
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| on_change(text_change(field, event_target_value(&ev)))
            />
        </FormField>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::test_support::{ContactField, ContactForm};
    use crate::shared::form::validation::required;
    use crate::shared::form::{FormController, FormValidation, REQUIRED};

    #[test]
    fn test_validated_input_sets_field_and_error() {
        let controller = FormController::new(ContactForm::default());
        let rules = FormValidation::new().rule(ContactField::Name, required());
        let binding = controller.bind_with(&rules, ContactField::Name);
        let on_change = binding.change_handler();

        on_change(text_change(ContactField::Name, "  ".to_string()));
        assert_eq!(binding.error(ContactField::Name).as_deref(), Some(REQUIRED));

        on_change(text_change(ContactField::Name, "Ann".to_string()));
        assert_eq!(binding.error(ContactField::Name), None);
        assert_eq!(binding.value(ContactField::Name).into_text(), "Ann");
    }
}
