// Trend and regression domain models
use serde::Serialize;

/// Ordinary least-squares fit over one series. Recomputed fresh on every
/// call; never cached or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Fitted line evaluated at the first timestamp of the filtered series.
    pub start_value: f64,
    /// Fitted line evaluated at the last timestamp of the filtered series.
    pub end_value: f64,
    pub percent_change: f64,
    pub r_squared: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Three-state verdict shown next to a chart. `Neutral` covers both "not
/// enough data" and "change not statistically significant"; the chart
/// renders the same muted indicator for either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendVerdict {
    pub direction: TrendDirection,
    pub percentage: String,
}

impl TrendVerdict {
    pub fn neutral() -> Self {
        Self {
            direction: TrendDirection::Neutral,
            percentage: "0%".to_string(),
        }
    }
}
