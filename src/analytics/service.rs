// Analytics service - assembles the per-chart statistics pipeline
use std::collections::BTreeMap;

use serde::Serialize;

use crate::analytics::autocorrelation::acf;
use crate::analytics::axis::compute_bounds;
use crate::analytics::correlation::correlate;
use crate::analytics::descriptive::descriptive_statistics;
use crate::analytics::filtering::{finite_values, suppress_outliers};
use crate::analytics::regression::{regress, regression_line};
use crate::analytics::trend::classify_trend;
use crate::domain::series::Sample;
use crate::domain::statistics::{AcfPoint, AxisBounds, CorrelationMatrix, DescriptiveStatistics};
use crate::domain::trend::{RegressionResult, TrendVerdict};
use crate::ingestion::config::AnalyticsConfig;

/// Everything a single chart needs: verdict, fitted overlay, axis window
/// and the distribution snapshot. Recomputed wholesale per request.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesAnalysis {
    pub name: String,
    pub trend: TrendVerdict,
    pub regression: Option<RegressionResult>,
    pub overlay: Vec<Sample>,
    pub bounds: AxisBounds,
    pub statistics: Option<DescriptiveStatistics>,
}

#[derive(Clone)]
pub struct AnalyticsService {
    config: AnalyticsConfig,
}

impl AnalyticsService {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Run the full per-chart pipeline for one named series: outlier
    /// suppression, regression, trend verdict, overlay line, axis bounds
    /// and the distribution snapshot.
    pub fn analyze(&self, name: &str, samples: &[Sample]) -> SeriesAnalysis {
        let cleaned = self.clean(samples);
        let regression = regress(&cleaned);
        if regression.is_none() {
            tracing::debug!(
                "regression unavailable for {} ({} raw samples)",
                name,
                samples.len()
            );
        }

        let overlay = regression_line(&cleaned);
        let overlay_ref = if overlay.is_empty() {
            None
        } else {
            Some(overlay.as_slice())
        };
        let bounds = compute_bounds(&cleaned, overlay_ref);

        SeriesAnalysis {
            name: name.to_string(),
            trend: classify_trend(&cleaned, &self.config.trend),
            regression,
            bounds,
            statistics: descriptive_statistics(&cleaned),
            overlay,
        }
    }

    /// Autocorrelation over the configured lag window, for the seasonality
    /// panel. Empty means "insufficient data", not an error.
    pub fn seasonality(&self, samples: &[Sample]) -> Vec<AcfPoint> {
        let points = acf(samples, self.config.acf.max_lag, self.config.acf.confidence);
        if points.is_empty() {
            tracing::debug!("acf skipped: not enough valid points");
        }
        points
    }

    /// Pearson matrix across units (one series per mill), truncated to the
    /// positional overlap of the valid values.
    pub fn correlate_units(&self, units: &BTreeMap<String, Vec<Sample>>) -> CorrelationMatrix {
        let by_name: BTreeMap<String, Vec<f64>> = units
            .iter()
            .map(|(name, samples)| (name.clone(), finite_values(samples)))
            .collect();
        correlate(&by_name)
    }

    /// Outlier suppression keeps the output aligned with the input: valid
    /// values are cleaned in place, missing readings stay missing.
    fn clean(&self, samples: &[Sample]) -> Vec<Sample> {
        let finite = finite_values(samples);
        let cleaned = suppress_outliers(&finite, self.config.outlier.sigma_threshold);

        let mut replacements = cleaned.into_iter();
        samples
            .iter()
            .map(|s| match s.value {
                Some(v) if v.is_finite() => Sample::new(s.timestamp, replacements.next()),
                _ => Sample::new(s.timestamp, None),
            })
            .collect()
    }
}
