use contracts::dashboards::d400_home::HomeDashboard as HomeDashboardData;
use leptos::prelude::*;

use super::chart::RevenueChart;
use crate::dashboards::HOME_DASHBOARD_KEY;
use crate::shared::components::StatCard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};

const CARD_ICONS: [&str; 3] = ["customers", "orders", "growth"];

#[component]
pub fn HomeDashboard() -> impl IntoView {
    let data = HomeDashboardData::sample();

    view! {
        <PageFrame page_id=page_id(HOME_DASHBOARD_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </div>
            <div class="page__content">
                <div class="stat-cards">
                    {data
                        .cards
                        .into_iter()
                        .zip(CARD_ICONS)
                        .map(|(card, icon_name)| view! { <StatCard card=card icon_name=icon_name /> })
                        .collect_view()}
                </div>
                <div class="dashboard-panel">
                    <h2 class="dashboard-panel__title">"Monthly Revenue"</h2>
                    <RevenueChart points=data.revenue />
                </div>
            </div>
        </PageFrame>
    }
}
