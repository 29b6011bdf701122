//! Dashboard module
//!
//! Turns a transaction snapshot into the summary figures, card view-models
//! and chart options that make up the dashboard overview.

pub mod aggregation;
pub mod cards;
pub mod charts;

pub use aggregation::{
    CategoryComparison, ChartWindow, DailyEntry, Totals, compute_category_comparison,
    compute_category_totals, compute_daily_series, compute_totals,
};
pub use cards::{BalanceCard, DailySummaryCard};
pub use charts::{DashboardChart, dashboard_charts};
