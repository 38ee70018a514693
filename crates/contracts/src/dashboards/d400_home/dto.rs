use serde::{Deserialize, Serialize};

/// Direction of a stat card delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

/// One summary tile on the home dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    /// Already formatted, e.g. "3,897" or "89.87%"
    pub value: String,
    /// Signed percent change
    pub change: f64,
}

impl StatCard {
    pub fn new(title: &str, value: &str, change: f64) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change,
        }
    }

    pub fn trend(&self) -> Trend {
        if self.change < 0.0 {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    /// "+3.3%" / "-2.8%"
    pub fn change_label(&self) -> String {
        format!("{:+.1}%", self.change)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeDashboard {
    pub cards: Vec<StatCard>,
    pub revenue: Vec<RevenuePoint>,
}

const MONTHS: [&str; 9] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep",
];
const REVENUE: [f64; 9] = [50.0, 60.0, 55.0, 62.0, 48.0, 35.0, 40.0, 52.0, 58.0];

impl HomeDashboard {
    /// Figures shown until a stats endpoint exists
    pub fn sample() -> Self {
        Self {
            cards: vec![
                StatCard::new("New Customers", "3,897", 3.3),
                StatCard::new("New Orders", "35,084", -2.8),
                StatCard::new("Growth", "89.87%", 2.8),
            ],
            revenue: MONTHS
                .iter()
                .zip(REVENUE)
                .map(|(month, value)| RevenuePoint {
                    month: month.to_string(),
                    value,
                })
                .collect(),
        }
    }

    pub fn revenue_max(&self) -> f64 {
        self.revenue.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// Bar geometry for a chart of `height` units, scaled to `max`
pub fn bar_height(value: f64, max: f64, height: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * height).clamp(0.0, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_cards() {
        let dashboard = HomeDashboard::sample();
        assert_eq!(dashboard.cards.len(), 3);
        assert_eq!(dashboard.cards[1].change_label(), "-2.8%");
        assert_eq!(dashboard.cards[1].trend(), Trend::Down);
        assert_eq!(dashboard.cards[0].change_label(), "+3.3%");
    }

    #[test]
    fn test_revenue_series() {
        let dashboard = HomeDashboard::sample();
        assert_eq!(dashboard.revenue.len(), 9);
        assert_eq!(dashboard.revenue[3].month, "Apr");
        assert_eq!(dashboard.revenue_max(), 62.0);
    }

    #[test]
    fn test_bar_height_scales() {
        assert_eq!(bar_height(31.0, 62.0, 200.0), 100.0);
        assert_eq!(bar_height(10.0, 0.0, 200.0), 0.0);
    }
}
