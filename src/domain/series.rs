// Telemetry series domain models
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single observation from the telemetry backend. `value` is `None` when
/// the historian reported no reading for the interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: Option<f64>) -> Self {
        Self { timestamp, value }
    }
}

/// Sort samples ascending by timestamp. Callers must not assume input
/// order, so every windowed computation sorts before it reads.
pub fn sort_by_timestamp(samples: &mut [Sample]) {
    samples.sort_by_key(|s| s.timestamp);
}
