use leptos::prelude::*;

use crate::shared::filters::Pagination;

pub const DEFAULT_LIMIT_OPTIONS: [u32; 4] = [14, 20, 50, 100];

/// "from-to of total" line for the current page
pub fn range_text(pagination: Pagination, total_count: usize) -> String {
    if total_count == 0 {
        return "0 of 0".to_string();
    }
    let offset = pagination.offset() as usize;
    let from = offset.saturating_add(1);
    let to = offset
        .saturating_add(pagination.limit as usize)
        .min(total_count);
    format!("{}-{} of {}", from.min(total_count), to, total_count)
}

/// Pager driven by the 1-based `page`/`limit` filter keys
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] total_count: Signal<usize>,
    on_page_change: Callback<u32>,
    #[prop(optional)] on_limit_change: Option<Callback<u32>>,
    #[prop(optional)] limit_options: Option<Vec<u32>>,
) -> impl IntoView {
    let limit_options = limit_options.unwrap_or_else(|| DEFAULT_LIMIT_OPTIONS.to_vec());
    let page = move || pagination.get().page;
    let last_page = move || pagination.get().total_pages(total_count.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || page() <= 1
                title="First page"
            >
                "«"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if page() > 1 {
                        on_page_change.run(page() - 1);
                    }
                }
                disabled=move || page() <= 1
                title="Previous page"
            >
                "‹"
            </button>
            <span class="pagination-info">
                {move || range_text(pagination.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if page() < last_page() {
                        on_page_change.run(page() + 1);
                    }
                }
                disabled=move || page() >= last_page()
                title="Next page"
            >
                "›"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page())
                disabled=move || page() >= last_page()
                title="Last page"
            >
                "»"
            </button>
            {on_limit_change.map(|on_limit_change| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(limit) = event_target_value(&ev).parse() {
                            on_limit_change.run(limit);
                        }
                    }
                    prop:value=move || pagination.get().limit.to_string()
                >
                    {limit_options.iter().map(|&size| view! {
                        <option value=size.to_string() selected=move || pagination.get().limit == size>
                            {size.to_string()}
                        </option>
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}
