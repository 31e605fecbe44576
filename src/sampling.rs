//! Parameter sampling helpers.

use crate::float_types::{Real, TAU};
use crate::params::GearParams;

/// `n` evenly spaced values over the closed interval `[start, end]`.
///
/// The first value is exactly `start` and the last exactly `end`, so the
/// endpoints never pick up accumulated rounding. `n == 1` yields `[start]`.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            let mut values: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            values[n - 1] = end;
            values
        },
    }
}

/// Sweep parameter `beta` over `[0, 2π·z]`, one value per sample.
///
/// Scaling the range by `z` makes the compressed angle `beta / z` cover exactly
/// one turn.
pub fn beta_samples(params: &GearParams) -> Vec<Real> {
    linspace(0.0, TAU * params.z as Real, params.resolution)
}

/// `count` indices spread evenly over `0..len`, truncated toward zero.
///
/// Used to pick the sample positions at which rolling elements sit.
pub fn spaced_indices(len: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    linspace(0.0, (len - 1) as Real, count)
        .into_iter()
        .map(|v| v as usize)
        .collect()
}
