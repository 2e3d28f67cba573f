// Percentile estimation and descriptive statistics snapshots
use std::collections::BTreeMap;

use crate::analytics::filtering::finite_values;
use crate::domain::series::Sample;
use crate::domain::statistics::DescriptiveStatistics;

/// Interpolated percentile: index = p/100 * (n-1), linear between the two
/// bracketing order statistics. Sorts internally; input order is
/// arbitrary. Returns 0 for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let p = p.clamp(0.0, 100.0);
    let index = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if upper >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    let weight = index - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Full distribution snapshot over the finite values of a series. `None`
/// when no valid values remain. Moments use population normalization
/// (divide by n); kurtosis is excess kurtosis.
pub fn descriptive_statistics(samples: &[Sample]) -> Option<DescriptiveStatistics> {
    let values = finite_values(samples);
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let median = percentile(&values, 50.0);
    let q1 = percentile(&values, 25.0);
    let q3 = percentile(&values, 75.0);

    // Zero spread means the standardized moments are undefined; report 0
    // instead of leaking NaN to the chart layer.
    let (skewness, kurtosis) = if std_dev == 0.0 {
        (0.0, 0.0)
    } else {
        let skew = values.iter().map(|v| ((v - mean) / std_dev).powi(3)).sum::<f64>() / n;
        let kurt =
            values.iter().map(|v| ((v - mean) / std_dev).powi(4)).sum::<f64>() / n - 3.0;
        (skew, kurt)
    };
    let cv = if mean == 0.0 { 0.0 } else { std_dev / mean * 100.0 };

    Some(DescriptiveStatistics {
        mean,
        median,
        mode: mode_one_decimal(&values),
        std_dev,
        variance,
        min,
        max,
        q1,
        q3,
        iqr: q3 - q1,
        skewness,
        kurtosis,
        cv,
        range: max - min,
        data_points: values.len(),
    })
}

/// Mode estimated on 1-decimal buckets: an approximation that groups noisy
/// readings of the same level together. Ties go to the smaller bucket.
fn mode_one_decimal(values: &[f64]) -> f64 {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for v in values {
        *counts.entry((v * 10.0).round() as i64).or_insert(0) += 1;
    }

    let mut best_bucket = 0i64;
    let mut best_count = 0usize;
    for (&bucket, &count) in &counts {
        if count > best_count {
            best_bucket = bucket;
            best_count = count;
        }
    }
    best_bucket as f64 / 10.0
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
    fn test_percentile_interpolation() {
        let values = vec![10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&values, 50.0), 25.0);
        assert_eq!(percentile(&values, 0.0), 10.0);
        assert_eq!(percentile(&values, 100.0), 40.0);
        assert_eq!(percentile(&values, 25.0), 17.5);
    }

    #[test]
    fn test_percentile_sorts_internally() {
        let values = vec![40.0, 10.0, 30.0, 20.0];
        assert_eq!(percentile(&values, 50.0), 25.0);
    }

    #[test]
    fn test_percentile_empty_and_single() {
        assert_eq!(percentile(&[], 50.0), 0.0);
        assert_eq!(percentile(&[7.0], 0.0), 7.0);
        assert_eq!(percentile(&[7.0], 100.0), 7.0);
    }

    #[test]
    fn test_descriptive_statistics_known_values() {
        let stats = descriptive_statistics(&series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]))
            .unwrap();

        assert_eq!(stats.mean, 5.0);
        assert!((stats.variance - 4.0).abs() < 1e-9);
        assert!((stats.std_dev - 2.0).abs() < 1e-9);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.range, 7.0);
        assert_eq!(stats.mode, 4.0);
        assert_eq!(stats.data_points, 8);
        assert!((stats.cv - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_quartiles_and_iqr() {
        let stats = descriptive_statistics(&series(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.iqr, 2.0);
    }

    #[test]
    fn test_symmetric_series_has_zero_skewness() {
        let stats = descriptive_statistics(&series(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        assert!(stats.skewness.abs() < 1e-9);
    }

    #[test]
    fn test_zero_variance_series() {
        let stats = descriptive_statistics(&series(&[5.0, 5.0, 5.0])).unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.skewness, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert!(stats.cv.is_finite());
    }

    #[test]
    fn test_zero_values_are_kept() {
        // Zero is a legitimate reading on the distribution path
        let stats = descriptive_statistics(&series(&[0.0, 0.0, 2.0, 2.0])).unwrap();
        assert_eq!(stats.data_points, 4);
        assert_eq!(stats.mean, 1.0);
    }

    #[test]
    fn test_mode_buckets_to_one_decimal() {
        // 1.04, 1.01 and 0.99 share the 1.0 bucket and outvote the 2.0s
        let stats =
            descriptive_statistics(&series(&[1.04, 1.01, 0.99, 2.0, 2.0])).unwrap();
        assert_eq!(stats.mode, 1.0);
    }

    #[test]
    fn test_no_valid_values() {
        let samples = vec![
            Sample::new(Utc.timestamp_millis_opt(0).unwrap(), None),
            Sample::new(Utc.timestamp_millis_opt(1).unwrap(), Some(f64::NAN)),
        ];
        assert!(descriptive_statistics(&samples).is_none());
    }
}
