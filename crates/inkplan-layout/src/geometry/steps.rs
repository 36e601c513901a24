//! Evenly spaced position sequences for rules, grids, and dots

use crate::error::{LayoutError, Result};

/// Relative tolerance used to absorb floating-point drift at the end bound
const STEP_EPSILON: f64 = 1e-9;

fn check_step(step: f64) -> Result<()> {
    if step <= 0.0 || step.is_nan() {
        return Err(LayoutError::validation("step must be positive."));
    }
    if step.is_infinite() {
        return Err(LayoutError::validation("step must be finite."));
    }
    Ok(())
}

/// Positions from `start` towards `end`, increasing by `step`.
///
/// The first position is `start` when `include_start` is set, otherwise
/// `start + step`. A position within `step * 1e-9` of `end` counts as `end`
/// and is emitted only when `include_end` is set.
///
/// # Example
/// `(0, 10, 3)` exclusive yields `[3, 6, 9]`; `(0, 10, 5)` inclusive yields
/// `[0, 5, 10]`.
pub fn ascending_step_positions(
    start: f64,
    end: f64,
    step: f64,
    include_start: bool,
    include_end: bool,
) -> Result<Vec<f64>> {
    check_step(step)?;
    let epsilon = step * STEP_EPSILON;
    let mut positions = Vec::new();
    let mut pos = if include_start { start } else { start + step };
    while pos < end - epsilon || (include_end && (pos - end).abs() <= epsilon) {
        positions.push(pos);
        pos += step;
    }
    Ok(positions)
}

/// Positions from `start` towards `end`, decreasing by `step`.
///
/// Mirror image of [`ascending_step_positions`].
pub fn descending_step_positions(
    start: f64,
    end: f64,
    step: f64,
    include_start: bool,
    include_end: bool,
) -> Result<Vec<f64>> {
    check_step(step)?;
    let epsilon = step * STEP_EPSILON;
    let mut positions = Vec::new();
    let mut pos = if include_start { start } else { start - step };
    while pos > end + epsilon || (include_end && (pos - end).abs() <= epsilon) {
        positions.push(pos);
        pos -= step;
    }
    Ok(positions)
}

/// Hour labels from `start_hour`, optionally including `end_hour`.
///
/// Never empty: a degenerate range yields just `start_hour`.
pub fn schedule_hours(start_hour: u32, end_hour: u32, include_end_hour: bool) -> Vec<u32> {
    let stop = if include_end_hour {
        end_hour + 1
    } else {
        end_hour
    };
    let hours: Vec<u32> = (start_hour..stop).collect();
    if hours.is_empty() {
        vec![start_hour]
    } else {
        hours
    }
}
