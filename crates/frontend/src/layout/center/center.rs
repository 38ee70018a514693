use leptos::prelude::*;

use super::tab_strip::TabStrip;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs">
            <TabStrip />
            <div class="app-tabs__content">{children()}</div>
        </div>
    }
}
