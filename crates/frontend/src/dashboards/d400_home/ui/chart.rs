use contracts::dashboards::d400_home::{bar_height, RevenuePoint};
use leptos::prelude::*;

const WIDTH: f64 = 540.0;
const HEIGHT: f64 = 220.0;
const AXIS: f64 = 24.0;
const GAP: f64 = 0.35;

/// Bar chart drawn as inline SVG
#[component]
pub fn RevenueChart(points: Vec<RevenuePoint>) -> impl IntoView {
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let plot_height = HEIGHT - AXIS;
    let slot = if points.is_empty() { WIDTH } else { WIDTH / points.len() as f64 };
    let bar_width = slot * (1.0 - GAP);

    let bars = points
        .into_iter()
        .enumerate()
        .map(|(idx, point)| {
            let h = bar_height(point.value, max, plot_height - 12.0);
            let x = idx as f64 * slot + (slot - bar_width) / 2.0;
            let y = plot_height - h;
            view! {
                <g class="revenue-chart__bar">
                    <rect x=x y=y width=bar_width height=h rx="3">
                        <title>{format!("{}: {}", point.month, point.value)}</title>
                    </rect>
                    <text x={x + bar_width / 2.0} y={HEIGHT - 6.0} text-anchor="middle">
                        {point.month}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            class="revenue-chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet"
        >
            <line x1="0" y1=plot_height x2=WIDTH y2=plot_height class="revenue-chart__axis" />
            {bars}
        </svg>
    }
}
