use leptos::prelude::*;

use super::label::FieldErrorText;
use crate::shared::form::{FieldBinding, FieldChange, FieldValue, FormDispatch, FormField as _, FormRecord};

pub fn checkbox_change<F>(field: F, checked: bool) -> FieldChange<F> {
    FieldChange {
        field,
        value: FieldValue::Flag(checked),
    }
}

/// Checkbox with the label after the box; emits [`FieldValue::Flag`]
#[component]
pub fn CheckboxFormField<R, D>(
    field: R::Field,
    binding: FieldBinding<R, D>,
    #[prop(into)] label: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView
where
    R: FormRecord,
    D: FormDispatch<R>,
{
    let id = id.unwrap_or_else(|| field.name().to_string());
    let on_change = binding.change_handler();
    let checked = {
        let binding = binding.clone();
        Signal::derive(move || binding.value(field).into_flag())
    };
    let error = Signal::derive(move || binding.error(field));
    let wrapper_class = move || {
        let extra = class.get().unwrap_or_default();
        if disabled.get().unwrap_or(false) {
            format!("form__checkbox-wrapper form__checkbox-wrapper--disabled {}", extra)
        } else {
            format!("form__checkbox-wrapper {}", extra)
        }
    };

    view! {
        <div class="form__group">
            <div class=wrapper_class>
                <input
                    id=id.clone()
                    name=field.name()
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get().unwrap_or(false)
                    on:change=move |ev| on_change(checkbox_change(field, event_target_checked(&ev)))
                />
                <label class="form__checkbox-label" for=id>
                    {label}
                </label>
            </div>
            <FieldErrorText error=error />
        </div>
    }
}
