//! Top bar: sidebar toggle, title, signed-in user and logout.

use crate::layout::global_context::use_app_context;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let modal = use_modal_stack();
    let (auth_state, set_auth_state) = use_auth();
    let title = app_config().ui.app_title;

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            modal.clear();
            ctx.reset();
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.user_name())}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
