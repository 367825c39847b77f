pub mod chart;
pub mod format;
pub mod model;
pub mod sample;
pub mod timeframe;
pub mod view;

// Re-export key types
pub use model::{
    DashboardSnapshot, FlaggedTransaction, HourlyPoint, StatValue, SummaryStat, SummaryStats,
};
pub use timeframe::Timeframe;
pub use view::DashboardView;
