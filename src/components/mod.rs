//! UI Components
//!
//! Leptos components for the dashboard sections.

pub mod activity;
pub mod chart;
pub mod stats;
pub mod status;
pub mod table;
pub mod toast;

pub use activity::RecentActivity;
pub use chart::{DistributionChart, TimelineChart};
pub use stats::StatsPanel;
pub use status::StatusBar;
pub use table::DataTable;
pub use toast::Toast;
