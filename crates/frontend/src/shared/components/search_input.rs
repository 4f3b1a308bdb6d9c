use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Text box that reports its value once typing pauses
///
/// Each keystroke starts a new delay; only the latest one fires.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional)] debounce_ms: Option<u32>,
) -> impl IntoView {
    let delay = debounce_ms.unwrap_or(SEARCH_DEBOUNCE_MS);
    let (text, set_text) = signal(value.get_untracked());
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let outside = value.get();
        if text.get_untracked() != outside {
            set_text.set(outside);
        }
    });

    let on_input = move |ev| {
        let term = event_target_value(&ev);
        set_text.set(term.clone());
        generation.update_value(|g| *g += 1);
        let ticket = generation.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.try_get_value() == Some(ticket) {
                on_search.run(term);
            }
        });
    };

    view! {
        <input
            id=move || id.get().unwrap_or_default()
            class="form__input search-input"
            type="search"
            placeholder=move || placeholder.get().unwrap_or_else(|| "Search".to_string())
            prop:value=move || text.get()
            on:input=on_input
        />
    }
}
