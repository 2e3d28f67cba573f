// Least-squares trend fit over a time series
use crate::analytics::filtering::filter_nonzero_finite;
use crate::domain::series::{Sample, sort_by_timestamp};
use crate::domain::trend::RegressionResult;

/// Ordinary least-squares fit of value against time (milliseconds since
/// the Unix epoch). Returns `None` when fewer than 2 valid points remain
/// after filtering, or when all timestamps are identical. Callers treat
/// `None` as "trend unknown", not as an error.
pub fn regress(samples: &[Sample]) -> Option<RegressionResult> {
    let mut points = filter_nonzero_finite(samples);
    if points.len() < 2 {
        return None;
    }
    sort_by_timestamp(&mut points);

    let xs: Vec<f64> = points
        .iter()
        .map(|s| s.timestamp.timestamp_millis() as f64)
        .collect();
    let ys: Vec<f64> = points.iter().map(|s| s.value.unwrap_or(0.0)).collect();

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        sum_xy += (x - mean_x) * (y - mean_y);
        sum_xx += (x - mean_x).powi(2);
    }
    if sum_xx == 0.0 {
        // All timestamps equal, slope is undefined
        return None;
    }

    let slope = sum_xy / sum_xx;
    let intercept = mean_y - slope * mean_x;

    let ss_total: f64 = ys.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_residual: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    // A flat series has no variance to explain. The zero-slope fit matches
    // it exactly, so report a perfect fit rather than leaking NaN.
    let r_squared = if ss_total == 0.0 {
        if ss_residual == 0.0 { 1.0 } else { 0.0 }
    } else {
        1.0 - ss_residual / ss_total
    };

    let start_value = slope * xs[0] + intercept;
    let end_value = slope * xs[xs.len() - 1] + intercept;
    let percent_change = if start_value == 0.0 {
        0.0
    } else {
        (end_value - start_value) / start_value.abs() * 100.0
    };

    Some(RegressionResult {
        slope,
        intercept,
        start_value,
        end_value,
        percent_change,
        r_squared,
    })
}

/// The fitted line evaluated at every timestamp of the filtered series,
/// used as a chart overlay. Empty when the fit is unavailable.
pub fn regression_line(samples: &[Sample]) -> Vec<Sample> {
    let Some(fit) = regress(samples) else {
        return Vec::new();
    };
    let mut points = filter_nonzero_finite(samples);
    sort_by_timestamp(&mut points);
    points
        .iter()
        .map(|s| {
            let x = s.timestamp.timestamp_millis() as f64;
            Sample::new(s.timestamp, Some(fit.slope * x + fit.intercept))
        })
        .collect()
}
