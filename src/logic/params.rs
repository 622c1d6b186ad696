//! Processing parameter ranges
//!
//! Pure functions for clamping and stepping the Group-mode sliders.

use crate::api::ProcessingParams;
use crate::ParamField;

/// Declared (min, max, step) for a parameter field
pub fn range(field: ParamField) -> (f64, f64, f64) {
    match field {
        ParamField::Pitch => (-12.0, 12.0, 1.0),
        ParamField::Volume => (0.5, 1.5, 0.1),
        ParamField::Speed => (0.5, 1.5, 0.1),
    }
}

/// Clamp a value into the field's range and snap it to the field's step
///
/// Snapping is relative to the minimum so 0.1 steps don't accumulate
/// floating point drift (1.0 + 0.1 + 0.1 stays 1.2).
///
/// # Examples
/// ```
/// use echotui::ParamField;
/// use echotui::logic::params::normalize;
///
/// assert_eq!(normalize(ParamField::Pitch, 20.0), 12.0);
/// assert_eq!(normalize(ParamField::Volume, 0.1), 0.5);
/// assert_eq!(normalize(ParamField::Speed, 1.04), 1.0);
/// ```
pub fn normalize(field: ParamField, value: f64) -> f64 {
    let (min, max, step) = range(field);
    if !value.is_finite() {
        return min;
    }
    let clamped = value.clamp(min, max);
    let steps = ((clamped - min) / step).round();
    let snapped = min + steps * step;
    // Round to two decimals so the wire value is 1.2, not 1.2000000000000002
    ((snapped * 100.0).round() / 100.0).clamp(min, max)
}

pub fn get(params: &ProcessingParams, field: ParamField) -> f64 {
    match field {
        ParamField::Pitch => params.pitch,
        ParamField::Volume => params.volume,
        ParamField::Speed => params.speed,
    }
}

/// Return a copy of `params` with `field` set to the normalized `value`
pub fn with_value(params: ProcessingParams, field: ParamField, value: f64) -> ProcessingParams {
    let value = normalize(field, value);
    let mut updated = params;
    match field {
        ParamField::Pitch => updated.pitch = value,
        ParamField::Volume => updated.volume = value,
        ParamField::Speed => updated.speed = value,
    }
    updated
}

/// Move a field by a number of steps (negative moves down)
pub fn step(params: ProcessingParams, field: ParamField, steps: i32) -> ProcessingParams {
    let (_, _, step) = range(field);
    let current = get(&params, field);
    with_value(params, field, current + step * steps as f64)
}

/// Position of the value inside its range, 0.0..=1.0 (for slider rendering)
pub fn ratio(field: ParamField, value: f64) -> f64 {
    let (min, max, _) = range(field);
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Format a value the way the slider label shows it
pub fn format_value(field: ParamField, value: f64) -> String {
    match field {
        ParamField::Pitch => format!("{:+}", value as i64),
        ParamField::Volume | ParamField::Speed => format!("{:.1}", value),
    }
}

/// Select the next/previous field, wrapping around
pub fn cycle_field(current: ParamField, forward: bool) -> ParamField {
    let idx = ParamField::ALL
        .iter()
        .position(|f| *f == current)
        .unwrap_or(0);
    let len = ParamField::ALL.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    ParamField::ALL[next]
}
