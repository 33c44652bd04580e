pub mod dashboard;
pub mod earnings;
pub mod history;
pub mod revenue;

pub use dashboard::{get_dashboard, get_dashboard_for_input, DashboardService};
