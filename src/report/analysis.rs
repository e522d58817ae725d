//! Analysis Stages Module
//! Each stage reads one table and produces the figures the report prints.

use crate::data::{CountingFunctionTable, CountingSample, GapsTable, PropertiesTable};
use crate::stats::{hardy_littlewood_twin_estimate, DescriptiveStats, StatsCalculator};
use thiserror::Error;
use tracing::debug;

/// x values tracked by the accuracy-trend stage.
pub const TREND_CHECKPOINTS: [f64; 4] = [100.0, 1_000.0, 10_000.0, 100_000.0];

#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    #[error("{0} table is empty")]
    EmptyTable(&'static str),
    #[error("no twin primes flagged in properties table")]
    NoTwinPrimes,
}

/// π(x) against x/ln(x) at the largest sampled x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PntSummary {
    pub sample: CountingSample,
    /// π(x) / (x / ln x); tends to 1.
    pub ratio: f64,
    pub deviation: f64,
}

impl PntSummary {
    pub fn compute(table: &CountingFunctionTable) -> Result<Self, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::EmptyTable("counting function"));
        }

        // First row wins on ties.
        let sample = table.rows[1..]
            .iter()
            .fold(table.rows[0], |best, &row| if row.x > best.x { row } else { best });

        let ratio = sample.pi_x / sample.pnt_approximation;
        let summary = Self {
            sample,
            ratio,
            deviation: (1.0 - ratio).abs(),
        };
        debug!(x = sample.x, ratio, "PNT summary");
        Ok(summary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapAnalysis {
    pub gap: DescriptiveStats,
    /// Pearson correlation of gap against ln(prime).
    pub correlation: f64,
    pub mean_gap_over_log: f64,
}

impl GapAnalysis {
    pub fn compute(table: &GapsTable) -> Result<Self, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::EmptyTable("gaps"));
        }

        let gap = StatsCalculator::compute_descriptive_stats(&table.gap)
            .ok_or(AnalysisError::EmptyTable("gaps"))?;
        let mean_gap_over_log = StatsCalculator::mean(&table.gap_over_log)
            .ok_or(AnalysisError::EmptyTable("gaps"))?;
        let correlation = StatsCalculator::pearson_correlation(&table.gap, &table.log_prime);

        debug!(mean = gap.mean, max = gap.max, correlation, "gap statistics");
        Ok(Self {
            gap,
            correlation,
            mean_gap_over_log,
        })
    }
}

/// One checkpoint row of the accuracy-trend table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyPoint {
    pub sample: CountingSample,
    /// How many times smaller the li(x) error is than the x/ln(x) error.
    pub improvement: f64,
}

/// Rows at the fixed checkpoints, in input order. Absent checkpoints are skipped.
pub fn accuracy_trend(table: &CountingFunctionTable) -> Vec<AccuracyPoint> {
    table
        .rows
        .iter()
        .filter(|row| TREND_CHECKPOINTS.contains(&row.x))
        .map(|&sample| AccuracyPoint {
            sample,
            improvement: sample.pnt_relative_error / sample.li_relative_error,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinPrimeAnalysis {
    pub total: usize,
    pub twin_count: usize,
    pub percentage: f64,
    pub largest_twin: i64,
    pub max_prime: i64,
    pub hardy_littlewood_estimate: f64,
    /// Twice the flagged count: each twin pair contributes two numbers.
    pub observed: usize,
}

impl TwinPrimeAnalysis {
    pub fn compute(table: &PropertiesTable) -> Result<Self, AnalysisError> {
        if table.is_empty() {
            return Err(AnalysisError::EmptyTable("properties"));
        }

        let max_prime = table
            .rows
            .iter()
            .map(|row| row.prime)
            .fold(i64::MIN, i64::max);

        let twins: Vec<i64> = table
            .rows
            .iter()
            .filter(|row| row.is_twin_prime)
            .map(|row| row.prime)
            .collect();
        let largest_twin = twins
            .iter()
            .copied()
            .max()
            .ok_or(AnalysisError::NoTwinPrimes)?;

        let total = table.len();
        let twin_count = twins.len();
        let analysis = Self {
            total,
            twin_count,
            percentage: twin_count as f64 / total as f64 * 100.0,
            largest_twin,
            max_prime,
            hardy_littlewood_estimate: hardy_littlewood_twin_estimate(max_prime as f64),
            observed: twin_count * 2,
        };
        debug!(twin_count, max_prime, "twin prime analysis");
        Ok(analysis)
    }
}
