//! Statistics Calculator Module
//! Handles descriptive statistics and correlation over dataset columns.

use statrs::statistics::{Data, Median, Statistics};

/// Descriptive statistics for a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    /// Population standard deviation (n denominator).
    pub population_std: f64,
    pub min: f64,
    pub max: f64,
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// Returns `None` for an empty slice. A single value has a sample
    /// standard deviation of NaN.
    pub fn compute_descriptive_stats(values: &[f64]) -> Option<DescriptiveStats> {
        if values.is_empty() {
            return None;
        }

        let median = Data::new(values.to_vec()).median();

        Some(DescriptiveStats {
            count: values.len(),
            mean: values.mean(),
            median,
            std: values.std_dev(),
            population_std: values.population_std_dev(),
            min: Statistics::min(values),
            max: Statistics::max(values),
        })
    }

    /// Arithmetic mean, `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        (!values.is_empty()).then(|| values.mean())
    }

    /// Pearson correlation coefficient of paired samples.
    ///
    /// NaN when fewer than two pairs exist or either side has zero variance.
    pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
        let n = xs.len().min(ys.len());
        if n < 2 {
            return f64::NAN;
        }

        let (xs, ys) = (&xs[..n], &ys[..n]);
        let sx = xs.std_dev();
        let sy = ys.std_dev();
        if sx == 0.0 || sy == 0.0 {
            return f64::NAN;
        }

        xs.covariance(ys) / (sx * sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn descriptive_stats_of_small_gap_column() {
        let stats = StatsCalculator::compute_descriptive_stats(&[2.0, 4.0, 2.0]).unwrap();

        assert_eq!(stats.count, 3);
        assert!((stats.mean - 8.0 / 3.0).abs() < EPS);
        assert_eq!(stats.median, 2.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.min, 2.0);
        assert!((stats.std - (4.0f64 / 3.0).sqrt()).abs() < EPS);
        assert!((stats.population_std - (8.0f64 / 9.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn median_of_even_count_averages_middle_pair() {
        let stats = StatsCalculator::compute_descriptive_stats(&[6.0, 2.0, 4.0, 10.0]).unwrap();
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn empty_input_has_no_stats() {
        assert!(StatsCalculator::compute_descriptive_stats(&[]).is_none());
        assert!(StatsCalculator::mean(&[]).is_none());
    }

    #[test]
    fn pearson_matches_hand_computation() {
        let r = StatsCalculator::pearson_correlation(&[2.0, 4.0, 2.0], &[1.1, 1.6, 1.9]);
        assert!((r - 1.0 / 7.0).abs() < EPS);
    }

    #[test]
    fn pearson_of_linear_data_is_one() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        assert!((StatsCalculator::pearson_correlation(&xs, &ys) - 1.0).abs() < EPS);
    }

    #[test]
    fn pearson_is_nan_without_variance() {
        assert!(StatsCalculator::pearson_correlation(&[2.0, 2.0], &[1.0, 3.0]).is_nan());
        assert!(StatsCalculator::pearson_correlation(&[2.0], &[1.0]).is_nan());
    }
}
