// Cross-unit Pearson correlation matrix
use std::collections::BTreeMap;

use crate::domain::statistics::CorrelationMatrix;

/// Pearson correlation between every pair of named series (one per unit).
///
/// Series of different length are truncated to the shorter length by
/// position, not aligned by timestamp; callers are expected to hand in
/// series sampled on the same grid. The diagonal is forced to exactly 1
/// rather than computed, so it stays clean under floating-point noise.
pub fn correlate(series: &BTreeMap<String, Vec<f64>>) -> CorrelationMatrix {
    let names: Vec<String> = series.keys().cloned().collect();
    let mut values = vec![vec![0.0; names.len()]; names.len()];

    for (i, a) in names.iter().enumerate() {
        for (j, b) in names.iter().enumerate() {
            values[i][j] = if i == j {
                1.0
            } else {
                pearson(&series[a], &series[b])
            };
        }
    }
    CorrelationMatrix::new(names, values)
}

/// Pearson coefficient over the positional overlap of two series. Zero
/// variance on either side is defined as 0, never NaN.
fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let a = &a[..n];
    let b = &b[..n];

    let mean_a = a.iter().sum::<f64>() / n as f64;
    let mean_b = b.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        covariance += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a).powi(2);
        var_b += (y - mean_b).powi(2);
    }
    if var_a == 0.0 || var_b == 0.0 {
        return 0.0;
    }
    covariance / (var_a.sqrt() * var_b.sqrt())
}
