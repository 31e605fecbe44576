//! Test support library
//! Provides various helper functions & utilities for tests.
// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use rollgear::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Relative comparison, falling back to absolute near zero.
pub fn rel_eq(a: Real, b: Real, rel: Real) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

/// Designs covering small and large lobe counts, with and without eccentricity.
pub fn sample_designs() -> Vec<(Real, Real, Real, i32)> {
    vec![
        (25.0, 3.0, 1.2, 10),
        (25.0, 3.0, 0.0, 10),
        (40.0, 5.0, 2.4, 11),
        (12.0, 2.0, 0.9, 3),
        (60.0, 4.0, 1.9, 57),
        (25.0, 3.0, 1.2, -4),
        (8.0, 1.5, 0.7, 1),
    ]
}
