use leptos::prelude::*;

use crate::shared::filters::Badge;

/// Row of removable chips for the active filters
#[component]
pub fn FilterBadges(
    #[prop(into)] badges: Signal<Vec<Badge>>,
    on_remove: Callback<Badge>,
) -> impl IntoView {
    view! {
        <div class="filter-tags">
            <For
                each=move || badges.get()
                key=|badge| (badge.id(), badge.text.clone())
                children=move |badge| {
                    let text = format!("{}: {}", badge.label, badge.text);
                    view! { <FilterTag label=text on_remove=Callback::new(move |_| on_remove.run(badge.clone())) /> }
                }
            />
        </div>
    }
}

#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                type="button"
                class="filter-tag__remove"
                aria-label="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                "×"
            </button>
        </div>
    }
}
