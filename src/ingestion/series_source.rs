// JSON boundary - maps backend payloads onto domain series
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::series::{Sample, sort_by_timestamp};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unparseable timestamp {timestamp:?}: {source}")]
    Timestamp {
        timestamp: String,
        source: chrono::ParseError,
    },
    #[error("parallel arrays differ in length: {timestamps} timestamps, {values} values")]
    LengthMismatch { timestamps: usize, values: usize },
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    timestamp: String,
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawParallelSeries {
    timestamps: Vec<String>,
    values: Vec<Option<f64>>,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, IngestError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| IngestError::Timestamp {
            timestamp: raw.to_string(),
            source,
        })
}

fn into_samples(points: Vec<RawPoint>) -> Result<Vec<Sample>, IngestError> {
    let mut samples = points
        .into_iter()
        .map(|p| Ok(Sample::new(parse_timestamp(&p.timestamp)?, p.value)))
        .collect::<Result<Vec<_>, IngestError>>()?;
    sort_by_timestamp(&mut samples);
    Ok(samples)
}

/// Parse a `[{timestamp, value}]` payload. Timestamps are ISO-8601, values
/// numeric or null. Samples come back sorted ascending by timestamp
/// regardless of backend order.
pub fn series_from_json(payload: &str) -> Result<Vec<Sample>, IngestError> {
    let raw: Vec<RawPoint> = serde_json::from_str(payload)?;
    into_samples(raw)
}

/// Parse the `{timestamps: [...], values: [...]}` payload shape some
/// backend endpoints use. The arrays must be the same length.
pub fn series_from_parallel_json(payload: &str) -> Result<Vec<Sample>, IngestError> {
    let raw: RawParallelSeries = serde_json::from_str(payload)?;
    if raw.timestamps.len() != raw.values.len() {
        return Err(IngestError::LengthMismatch {
            timestamps: raw.timestamps.len(),
            values: raw.values.len(),
        });
    }
    let mut samples = raw
        .timestamps
        .iter()
        .zip(raw.values)
        .map(|(t, v)| Ok(Sample::new(parse_timestamp(t)?, v)))
        .collect::<Result<Vec<_>, IngestError>>()?;
    sort_by_timestamp(&mut samples);
    Ok(samples)
}

/// Parse one series per unit, e.g. `{"mill_1": [...], "mill_2": [...]}`.
/// The explicit name-to-series map is built once here; nothing downstream
/// enumerates dynamic keys.
pub fn series_set_from_json(
    payload: &str,
) -> Result<BTreeMap<String, Vec<Sample>>, IngestError> {
    let raw: BTreeMap<String, Vec<RawPoint>> = serde_json::from_str(payload)?;
    raw.into_iter()
        .map(|(name, points)| Ok((name, into_samples(points)?)))
        .collect()
}
