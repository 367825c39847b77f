pub mod header;
pub mod icon;
pub mod line_chart;
pub mod stat_card;
pub mod transaction_table;
