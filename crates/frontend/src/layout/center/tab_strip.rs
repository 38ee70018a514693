use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::shared::icons::icon;

#[component]
fn TabButton(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        ctx.active
            .with(|a| key.with_value(|k| a.as_deref() == Some(k.as_str())))
    });
    let title = move || {
        key.with_value(|k| {
            ctx.opened.with(|tabs| {
                tabs.iter()
                    .find(|t| &t.key == k)
                    .map(|t| t.title.clone())
                    .unwrap_or_default()
            })
        })
    };

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| ctx.close_tab(k));
    };

    view! {
        <div
            class="tab-strip__tab"
            class:tab-strip__tab--active=is_active
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
        >
            <span class="tab-strip__title">{title}</span>
            <button class="tab-strip__close" title="Close" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}

/// Row of open tabs above the content area
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.opened.with(|tabs| !tabs.is_empty())>
            <div class="tab-strip">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabButton tab=tab /> }
                />
            </div>
        </Show>
    }
}
