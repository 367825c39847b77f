pub mod dashboard;
pub mod health;

pub use dashboard::{get_dashboard, get_hourly, get_stats, list_transactions};
pub use health::health_check;
