// Statistics engine for the plant operations dashboard: trend detection,
// axis scaling, distribution analysis and cross-unit correlation over
// telemetry time series.
pub mod analytics;
pub mod domain;
pub mod ingestion;

pub use analytics::autocorrelation::{ConfidenceLevel, acf};
pub use analytics::axis::compute_bounds;
pub use analytics::correlation::correlate;
pub use analytics::descriptive::{descriptive_statistics, percentile};
pub use analytics::filtering::{filter_finite_only, filter_nonzero_finite, suppress_outliers};
pub use analytics::regression::{regress, regression_line};
pub use analytics::service::{AnalyticsService, SeriesAnalysis};
pub use analytics::trend::classify_trend;
pub use domain::series::Sample;
pub use domain::statistics::{AcfPoint, AxisBounds, CorrelationMatrix, DescriptiveStatistics};
pub use domain::trend::{RegressionResult, TrendDirection, TrendVerdict};
pub use ingestion::config::{AnalyticsConfig, load_analytics_config};
pub use ingestion::series_source::{
    IngestError, series_from_json, series_from_parallel_json, series_set_from_json,
};
