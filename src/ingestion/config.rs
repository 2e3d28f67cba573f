// Analytics configuration - explicit thresholds, no ambient globals
use serde::Deserialize;

use crate::analytics::autocorrelation::ConfidenceLevel;

/// Thresholds for the statistics pipeline. Passed explicitly into the
/// service; the analytics functions themselves hold no state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub trend: TrendConfig,
    #[serde(default)]
    pub outlier: OutlierConfig,
    #[serde(default)]
    pub acf: AcfConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendConfig {
    /// Minimum rounded percent change before a trend is shown.
    #[serde(default = "default_min_percent_change")]
    pub min_percent_change: f64,
    /// Minimum R² before a trend is trusted. Both gates must pass.
    #[serde(default = "default_min_r_squared")]
    pub min_r_squared: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            min_percent_change: default_min_percent_change(),
            min_r_squared: default_min_r_squared(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutlierConfig {
    /// Standard deviations from the mean before a value is suppressed.
    #[serde(default = "default_sigma_threshold")]
    pub sigma_threshold: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            sigma_threshold: default_sigma_threshold(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AcfConfig {
    /// Requested lag window; the estimator still caps it at n/4.
    #[serde(default = "default_max_lag")]
    pub max_lag: usize,
    #[serde(default = "default_confidence")]
    pub confidence: ConfidenceLevel,
}

impl Default for AcfConfig {
    fn default() -> Self {
        Self {
            max_lag: default_max_lag(),
            confidence: default_confidence(),
        }
    }
}

fn default_min_percent_change() -> f64 {
    3.0
}

fn default_min_r_squared() -> f64 {
    0.1
}

fn default_sigma_threshold() -> f64 {
    3.0
}

fn default_max_lag() -> usize {
    24
}

fn default_confidence() -> ConfidenceLevel {
    ConfidenceLevel::NinetyFive
}

/// Load thresholds from `config/analytics.{toml,yaml,json}`. A missing
/// file falls back to the defaults above.
pub fn load_analytics_config() -> anyhow::Result<AnalyticsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/analytics").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
