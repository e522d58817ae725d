//! Stats module - Descriptive statistics and analytic estimates

mod calculator;
mod theory;

pub use calculator::{DescriptiveStats, StatsCalculator};
pub use theory::hardy_littlewood_twin_estimate;
