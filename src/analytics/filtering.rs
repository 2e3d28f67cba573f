// Entry filters for the statistics pipeline
use crate::domain::series::Sample;

/// Trend/regression entry filter. Zero is a "no reading" sentinel from the
/// historian, not a physical measurement, so it is dropped along with null
/// and non-finite values.
pub fn filter_nonzero_finite(samples: &[Sample]) -> Vec<Sample> {
    samples
        .iter()
        .copied()
        .filter(|s| matches!(s.value, Some(v) if v.is_finite() && v != 0.0))
        .collect()
}

/// Percentile/ACF entry filter. Zero is a legitimate reading on these
/// paths; only null and non-finite values are dropped. Distinct from
/// `filter_nonzero_finite` on purpose: the two paths disagree about zero
/// and must keep disagreeing.
pub fn filter_finite_only(samples: &[Sample]) -> Vec<Sample> {
    samples
        .iter()
        .copied()
        .filter(|s| matches!(s.value, Some(v) if v.is_finite()))
        .collect()
}

/// Finite values of a series, in order, for the value-only computations.
pub fn finite_values(samples: &[Sample]) -> Vec<f64> {
    filter_finite_only(samples)
        .into_iter()
        .filter_map(|s| s.value)
        .collect()
}

/// Replace values beyond `sigma` population standard deviations from the
/// mean with the mean itself. Replacement, not removal: the output stays
/// aligned with the parallel timestamp array it is zipped back against.
/// Arrays of length <= 2 are returned unchanged.
pub fn suppress_outliers(values: &[f64], sigma: f64) -> Vec<f64> {
    if values.len() <= 2 {
        return values.to_vec();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return values.to_vec();
    }

    values
        .iter()
        .map(|&v| if ((v - mean) / std_dev).abs() > sigma { mean } else { v })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(ms: i64, value: Option<f64>) -> Sample {
        Sample::new(Utc.timestamp_millis_opt(ms).unwrap(), value)
    }

    #[test]
    fn test_nonzero_filter_drops_zero_null_and_nan() {
        let samples = vec![
            sample(0, Some(1.5)),
            sample(1, Some(0.0)),
            sample(2, None),
            sample(3, Some(f64::NAN)),
            sample(4, Some(f64::INFINITY)),
            sample(5, Some(-2.0)),
        ];

        let filtered = filter_nonzero_finite(&samples);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].value, Some(1.5));
        assert_eq!(filtered[1].value, Some(-2.0));
    }

    #[test]
    fn test_finite_filter_keeps_zero() {
        let samples = vec![
            sample(0, Some(0.0)),
            sample(1, None),
            sample(2, Some(f64::NAN)),
            sample(3, Some(4.0)),
        ];

        let filtered = filter_finite_only(&samples);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].value, Some(0.0));
        assert_eq!(filtered[1].value, Some(4.0));
    }

    // Twenty values alternating around 10 plus one spike. The spike sits
    // about 4.4 sigma out, the rest well inside the band.
    fn spiky() -> Vec<f64> {
        let mut values = Vec::new();
        for _ in 0..10 {
            values.push(9.0);
            values.push(11.0);
        }
        values.push(30.0);
        values
    }

    #[test]
    fn test_suppress_outliers_replaces_with_mean() {
        let values = spiky();
        let cleaned = suppress_outliers(&values, 3.0);

        assert_eq!(cleaned.len(), values.len());
        // The spike becomes the series mean (230 / 21)
        assert!((cleaned[20] - 230.0 / 21.0).abs() < 1e-9);
        assert_eq!(cleaned[0], 9.0);
        assert_eq!(cleaned[1], 11.0);
    }

    #[test]
    fn test_suppress_outliers_short_array_unchanged() {
        let values = vec![1.0, 1000.0];
        assert_eq!(suppress_outliers(&values, 3.0), values);
    }

    #[test]
    fn test_suppress_outliers_zero_variance_unchanged() {
        let values = vec![5.0; 10];
        assert_eq!(suppress_outliers(&values, 3.0), values);
    }

    #[test]
    fn test_suppress_outliers_idempotent() {
        let once = suppress_outliers(&spiky(), 3.0);
        let twice = suppress_outliers(&once, 3.0);
        assert_eq!(once, twice);
    }
}
