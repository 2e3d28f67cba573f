// Derived statistics domain models
use serde::Serialize;

/// One-shot distribution snapshot for a dataset. Stale as soon as new
/// samples arrive; recomputed wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStatistics {
    pub mean: f64,
    pub median: f64,
    /// Estimated on 1-decimal buckets, not an exact mode.
    pub mode: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub skewness: f64,
    /// Excess kurtosis (fourth standardized moment minus 3).
    pub kurtosis: f64,
    /// Coefficient of variation, stddev/mean as a percentage.
    pub cv: f64,
    pub range: f64,
    pub data_points: usize,
}

/// One autocorrelation estimate. Lag 0 is 1 by construction and is never
/// flagged significant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcfPoint {
    pub lag: usize,
    pub value: f64,
    pub is_significant: bool,
}

/// Pairwise Pearson coefficients indexed by unit name. Symmetric by
/// construction; the diagonal is forced to exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn new(names: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        Self { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Coefficient for a named pair, `None` when either name is unknown.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        Some(self.values[i][j])
    }
}

/// Y-axis window for chart rendering. `min_value` is floored at zero:
/// plant telemetry is non-negative physical quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub min_value: f64,
    pub max_value: f64,
    /// Maximum below 0.1 switches the chart to higher-precision labels.
    pub is_very_small_value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_matrix_get() {
        let matrix = CorrelationMatrix::new(
            vec!["mill_1".to_string(), "mill_2".to_string()],
            vec![vec![1.0, 0.5], vec![0.5, 1.0]],
        );

        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.get("mill_1", "mill_2"), Some(0.5));
        assert_eq!(matrix.get("mill_2", "mill_2"), Some(1.0));
        assert_eq!(matrix.get("mill_1", "crusher"), None);
    }
}
