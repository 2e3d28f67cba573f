// Sample autocorrelation for seasonality detection
use serde::{Deserialize, Serialize};

use crate::analytics::filtering::finite_values;
use crate::domain::series::Sample;
use crate::domain::statistics::AcfPoint;

/// ACF needs a reasonable sample before the estimates mean anything.
const MIN_POINTS: usize = 10;

/// Confidence level for the ACF significance bound, `z / sqrt(n)`. Only
/// the two levels the dashboard exposes are supported; this is a fixed z
/// table, not a general inverse normal CDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    #[serde(rename = "p95")]
    NinetyFive,
    #[serde(rename = "p99")]
    NinetyNine,
}

impl ConfidenceLevel {
    pub fn z(self) -> f64 {
        match self {
            ConfidenceLevel::NinetyFive => 1.96,
            ConfidenceLevel::NinetyNine => 2.576,
        }
    }
}

/// Sample autocorrelation over lags 0..=min(max_lag, n/4). Biased
/// estimator: every lag shares the lag-0 sum of squared deviations as its
/// denominator, it is not re-normalized per lag. Fewer than 10 valid
/// points returns empty; the caller renders an insufficient-data state.
pub fn acf(samples: &[Sample], max_lag: usize, confidence: ConfidenceLevel) -> Vec<AcfPoint> {
    let values = finite_values(samples);
    let n = values.len();
    if n < MIN_POINTS {
        return Vec::new();
    }

    // High lags on short series produce degenerate estimates
    let effective_max_lag = max_lag.min(n / 4);
    let mean = values.iter().sum::<f64>() / n as f64;
    let denominator: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let bound = confidence.z() / (n as f64).sqrt();

    let mut points = Vec::with_capacity(effective_max_lag + 1);
    for lag in 0..=effective_max_lag {
        let value = if lag == 0 {
            1.0
        } else if denominator == 0.0 {
            // Flat series: keep the lag-0-is-1 contract without dividing
            // by zero
            0.0
        } else {
            let numerator: f64 = (0..n - lag)
                .map(|t| (values[t] - mean) * (values[t + lag] - mean))
                .sum();
            numerator / denominator
        };
        // Lag 0 is 1 by construction and excluded from the test
        let is_significant = lag > 0 && value.abs() > bound;
        points.push(AcfPoint {
            lag,
            value,
            is_significant,
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn series(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(Utc.timestamp_millis_opt(i as i64).unwrap(), Some(v)))
            .collect()
    }

    #[test]
    fn test_too_few_points_returns_empty() {
        let samples = series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(acf(&samples, 5, ConfidenceLevel::NinetyFive).is_empty());
    }

    #[test]
    fn test_lag_zero_is_one_and_never_significant() {
        let values: Vec<f64> = (0..40).map(|i| (i % 7) as f64).collect();
        let points = acf(&series(&values), 5, ConfidenceLevel::NinetyFive);

        assert!((points[0].value - 1.0).abs() < 1e-9);
        assert!(!points[0].is_significant);
        assert_eq!(points[0].lag, 0);
    }

    #[test]
    fn test_max_lag_capped_at_quarter_of_series() {
        let values: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let points = acf(&series(&values), 20, ConfidenceLevel::NinetyFive);

        // 40 points cap the lag at 10, so lags 0..=10
        assert_eq!(points.len(), 11);
        assert_eq!(points.last().unwrap().lag, 10);
    }

    #[test]
    fn test_periodic_series_flags_the_period() {
        // Strict period-4 square-ish wave over 80 points
        let values: Vec<f64> = (0..80)
            .map(|i| if i % 4 < 2 { 10.0 } else { -10.0 })
            .collect();
        let points = acf(&series(&values), 8, ConfidenceLevel::NinetyFive);

        let lag4 = points.iter().find(|p| p.lag == 4).unwrap();
        assert!(lag4.value > 0.8);
        assert!(lag4.is_significant);

        let lag2 = points.iter().find(|p| p.lag == 2).unwrap();
        assert!(lag2.value < 0.0);
    }

    #[test]
    fn test_flat_series_degenerate() {
        let points = acf(&series(&[3.0; 20]), 4, ConfidenceLevel::NinetyFive);

        assert!((points[0].value - 1.0).abs() < 1e-9);
        for p in &points[1..] {
            assert_eq!(p.value, 0.0);
            assert!(!p.is_significant);
        }
    }

    #[test]
    fn test_confidence_levels() {
        assert!((ConfidenceLevel::NinetyFive.z() - 1.96).abs() < 1e-12);
        assert!((ConfidenceLevel::NinetyNine.z() - 2.576).abs() < 1e-12);
    }

    #[test]
    fn test_nan_values_are_filtered_not_propagated() {
        let mut values: Vec<f64> = (0..20).map(|i| (i % 3) as f64).collect();
        values[5] = f64::NAN;
        let points = acf(&series(&values), 4, ConfidenceLevel::NinetyFive);

        assert!(!points.is_empty());
        for p in &points {
            assert!(p.value.is_finite());
        }
    }
}
