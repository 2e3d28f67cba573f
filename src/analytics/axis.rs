// Y-axis bounds with magnitude-aware nice rounding
use crate::analytics::filtering::finite_values;
use crate::domain::series::Sample;
use crate::domain::statistics::AxisBounds;

const VERY_SMALL_MAX: f64 = 0.1;

/// Compute chart Y bounds from a series plus an optional overlay (for
/// example the regression line), so the overlay is never clipped. Bounds
/// are floored at zero: plant telemetry is non-negative physical
/// quantities, even when a sensor glitches negative.
pub fn compute_bounds(samples: &[Sample], overlay: Option<&[Sample]>) -> AxisBounds {
    let mut values = finite_values(samples);
    if let Some(overlay) = overlay {
        values.extend(finite_values(overlay));
    }
    if values.is_empty() {
        return AxisBounds {
            min_value: 0.0,
            max_value: 0.0,
            is_very_small_value: false,
        };
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max).max(0.0);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min).max(0.0);

    let is_very_small_value = max < VERY_SMALL_MAX;
    let variation_threshold = if is_very_small_value { 0.5 } else { 0.1 };
    let is_small_variation = min > 0.0 && (max - min) / min < variation_threshold;

    // Tight band around low-variation data, generous headroom otherwise
    let padding = if is_small_variation {
        if is_very_small_value { 0.10 } else { 0.05 }
    } else {
        0.20
    };

    let range = max - min;
    let pad = if range > 0.0 {
        range * padding
    } else if max > 0.0 {
        // Flat series still needs visible headroom around the single value
        max * 0.1
    } else {
        1.0
    };

    AxisBounds {
        min_value: round_down_to_nice((min - pad).max(0.0)),
        max_value: round_up_to_nice(max + pad),
        is_very_small_value,
    }
}

/// Magnitude-tiered gridline increment. These tiers are what the dashboard
/// charts have always rendered; changing them changes every gridline.
fn nice_increment(value: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude < 0.1 {
        0.01
    } else if magnitude < 1.0 {
        0.1
    } else if magnitude < 10.0 {
        0.5
    } else if magnitude < 100.0 {
        1.0
    } else if magnitude < 1000.0 {
        5.0
    } else if magnitude < 10000.0 {
        100.0
    } else {
        1000.0
    }
}

fn round_down_to_nice(value: f64) -> f64 {
    let increment = nice_increment(value);
    (value / increment).floor() * increment
}

fn round_up_to_nice(value: f64) -> f64 {
    let increment = nice_increment(value);
    (value / increment).ceil() * increment
}
