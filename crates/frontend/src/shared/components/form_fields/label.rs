use leptos::prelude::*;

/// Label text with the required marker appended
pub fn label_text(text: &str, required: bool) -> String {
    if required {
        format!("{} *", text)
    } else {
        text.to_string()
    }
}

pub fn error_class(has_error: bool) -> &'static str {
    if has_error {
        "form__error form__error--visible"
    } else {
        "form__error"
    }
}

#[component]
pub fn FieldLabel(
    #[prop(into)] text: String,
    /// Id of the control this label points at
    #[prop(optional, into)]
    for_id: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    view! {
        <label class=move || format!("form__label {}", additional_class()) for=for_id>
            {label_text(&text, required)}
        </label>
    }
}

/// Error line under a field
///
/// Always rendered so the layout does not jump; only visible while the
/// error is non-empty.
#[component]
pub fn FieldErrorText(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    let has_error = move || error.with(|e| e.as_deref().is_some_and(|e| !e.is_empty()));
    view! {
        <span class=move || error_class(has_error()) role="alert">
            {move || error.get().unwrap_or_default()}
        </span>
    }
}

/// Label, control and error text of one field
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(optional)] required: bool,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    view! {
        <div class=move || format!("form__group {}", additional_class())>
            <FieldLabel text=label for_id=id required=required />
            {children()}
            <FieldErrorText error=error />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_label_gets_marker() {
        assert_eq!(label_text("Name", true), "Name *");
        assert_eq!(label_text("Name", false), "Name");
    }

    #[test]
    fn test_error_visibility_class() {
        assert!(error_class(true).contains("form__error--visible"));
        assert_eq!(error_class(false), "form__error");
    }
}
