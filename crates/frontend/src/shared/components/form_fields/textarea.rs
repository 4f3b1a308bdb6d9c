use leptos::prelude::*;

use super::label::FormField;
use super::text::text_change;
use crate::shared::form::{FieldBinding, FormDispatch, FormField as _, FormRecord};

#[component]
pub fn TextAreaFormField<R, D>(
    field: R::Field,
    binding: FieldBinding<R, D>,
    #[prop(into)] label: String,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// Visible rows, 3 by default
    #[prop(optional)]
    rows: Option<u32>,
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
            <textarea
                id=id.clone()
                name=field.name()
                class="form__textarea"
                rows=rows.unwrap_or(3)
                placeholder=move || placeholder.get().unwrap_or_default()
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
    use crate::shared::form::{FieldValue, FormAction, FormController};

    #[test]
    fn test_unvalidated_textarea_keeps_other_errors() {
        let controller = FormController::new(ContactForm::default());
        controller.dispatch(FormAction::SetField {
            field: ContactField::Email,
            value: FieldValue::from("x"),
            error: Some("invalid".into()),
        });
        let binding = controller.bind();

        binding.change_handler()(text_change(ContactField::Notes, "line one\nline two".to_string()));

        assert_eq!(controller.form_untracked().notes, "line one\nline two");
        assert_eq!(controller.error(ContactField::Notes), None);
        assert_eq!(controller.error(ContactField::Email).as_deref(), Some("invalid"));
    }
}
