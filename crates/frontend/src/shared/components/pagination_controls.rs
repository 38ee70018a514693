use crate::shared::icons::icon;
use contracts::shared::api::PaginationMeta;
use contracts::shared::pagination::{clamp_page, page_numbers, showing_label, PageItem};
use leptos::prelude::*;

/// "Showing a–b of n" plus Prev, numbered pages with ellipses, and Next.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    meta: Signal<PaginationMeta>,
    /// Called with the 1-based target page
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let current = move || meta.with(|m| m.current_page.max(1));
    let last = move || meta.with(|m| m.last_page.max(1));
    let go = move |page: i64| {
        let target = clamp_page(page, last());
        if target != current() {
            on_page_change.run(target);
        }
    };

    let page_buttons = move || {
        page_numbers(current(), last())
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) => {
                    let is_current = page == current();
                    view! {
                        <button
                            class="pagination-btn"
                            class:pagination-btn--active=is_current
                            on:click=move |_| go(i64::from(page))
                        >
                            {page.to_string()}
                        </button>
                    }
                    .into_any()
                }
                PageItem::Ellipsis => {
                    view! { <span class="pagination-ellipsis">"…"</span> }.into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || meta.with(showing_label)}</span>
            <div class="pagination-pages">
                <button
                    class="pagination-btn"
                    on:click=move |_| go(i64::from(current()) - 1)
                    disabled=move || current() <= 1
                    title="Previous"
                >
                    {icon("chevron-left")}
                </button>
                {page_buttons}
                <button
                    class="pagination-btn"
                    on:click=move |_| go(i64::from(current()) + 1)
                    disabled=move || current() >= last()
                    title="Next"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
