//! Root wrapper of every page rendered inside a tab.

use super::page_standard::*;
use leptos::prelude::*;

/// Sets the page id, the category attribute and the BEM modifier class.
///
/// Children are expected to render `page__header` followed by `page__content`.
#[component]
pub fn PageFrame(
    /// `{tab}--{category}`, see [`page_id`]
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
