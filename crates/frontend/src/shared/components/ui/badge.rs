use contracts::shared::status;
use leptos::prelude::*;
use thaw::*;

/// Active / Inactive pill of list rows and view modals.
#[component]
pub fn StatusBadge(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    move || {
        let is_active = active.get();
        let color = if is_active {
            BadgeColor::Success
        } else {
            BadgeColor::Danger
        };
        view! {
            <Badge appearance=BadgeAppearance::Tint color=color>
                {status::label(is_active)}
            </Badge>
        }
    }
}
