use crate::shared::icons::icon;
use contracts::dashboards::d400_home::{StatCard as StatCardData, Trend};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    card: StatCardData,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
) -> impl IntoView {
    let (arrow, change_class) = match card.trend() {
        Trend::Up => ("\u{2191}", "stat-card__change stat-card__change--up"),
        Trend::Down => ("\u{2193}", "stat-card__change stat-card__change--down"),
    };
    let change_text = format!("{} {}", arrow, card.change_label());

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{card.title}</div>
                <div class="stat-card__value">{card.value}</div>
                <span class=change_class>{change_text}</span>
            </div>
        </div>
    }
}
