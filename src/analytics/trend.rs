// Trend classification with a noise-suppression gate
use crate::analytics::regression::regress;
use crate::domain::series::Sample;
use crate::domain::trend::{TrendDirection, TrendVerdict};
use crate::ingestion::config::TrendConfig;

/// Classify a series as up/down/neutral. Both gates are required: a small
/// rounded change or a weak fit (low R²) reports neutral even when the
/// slope is nonzero, which keeps flat jittery tags from flapping.
pub fn classify_trend(samples: &[Sample], config: &TrendConfig) -> TrendVerdict {
    let Some(fit) = regress(samples) else {
        return TrendVerdict::neutral();
    };

    let rounded = fit.percent_change.round();
    if rounded.abs() >= config.min_percent_change && fit.r_squared > config.min_r_squared {
        let direction = if rounded > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        TrendVerdict {
            direction,
            percentage: format!("{}%", rounded.abs() as i64),
        }
    } else {
        TrendVerdict::neutral()
    }
}
