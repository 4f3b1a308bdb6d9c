use chrono::{DateTime, Local};
use leptos::prelude::*;
use thaw::*;

/// "last updated on" text for an ISO timestamp from the API
pub fn format_last_updated(iso: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(iso).ok()?;
    Some(
        parsed
            .with_timezone(&Local)
            .format("%d-%m-%Y %H:%M")
            .to_string(),
    )
}

/// Form container with submit/cancel buttons
///
/// Native submission is suppressed; `on_submit` runs instead, and the page
/// decides about validation and saving.
#[component]
pub fn Form(
    on_submit: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(optional, into)] submit_label: MaybeProp<String>,
    #[prop(optional, into)] cancel_label: MaybeProp<String>,
    /// ISO timestamp of the last server-side update
    #[prop(optional, into)]
    last_updated: Signal<Option<String>>,
    /// Disables submit while a request is in flight
    #[prop(optional, into)]
    busy: Signal<bool>,
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <form
            class=move || format!("form {}", additional_class())
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                if !busy.get_untracked() {
                    on_submit.run(());
                }
            }
        >
            {children()}
            <div class="form__actions">
                <Flex gap=FlexGap::Small>
                    {on_cancel.map(|on_cancel| view! {
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            {move || cancel_label.get().unwrap_or_else(|| "Cancel".to_string())}
                        </button>
                    })}
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || busy.get()
                    >
                        {move || submit_label.get().unwrap_or_else(|| "Submit".to_string())}
                    </button>
                </Flex>
            </div>
            {move || {
                last_updated
                    .get()
                    .and_then(|iso| format_last_updated(&iso))
                    .map(|text| view! {
                        <div class="form__last-updated">"Last updated on " {text}</div>
                    })
            }}
        </form>
    }
}
