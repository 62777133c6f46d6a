//! Services for fetching, aggregating and rendering plugin statistics

pub mod aggregator;
pub mod bstats;
pub mod chart;
pub mod quickchart;

pub use aggregator::Aggregator;
pub use bstats::BstatsClient;
pub use chart::{display_label, line_chart_config};
pub use quickchart::QuickChartClient;
