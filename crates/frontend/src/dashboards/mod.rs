pub mod d400_home;

pub use d400_home::ui::HomeDashboard;

/// Tab key of the home dashboard
pub const HOME_DASHBOARD_KEY: &str = "d400_home";
