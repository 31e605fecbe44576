//! Closed-form evaluation of a single profile sample.
//!
//! ## **Radial distance law**
//! The rolling-element center sits at distance
//! ```text
//! c(β) = e·cos β + √((a+b)² − e²·sin² β)
//! ```
//! from the fixed center, in the direction of the compressed angle `α = β / z`.
//!
//! ## **Normal field**
//! The (non-unit) normal to the center path is decomposed along the radial
//! direction `(cos α, sin α)` and the tangential direction `(−sin α, cos α)`:
//! ```text
//! n = (c/z)·r̂ + e·sin β·(1 + e·cos β / √(…))·t̂
//! ```
//! The gear surface is the equidistant curve `r = c + b·n/|n|`.

use crate::errors::ProfileError;
use crate::float_types::{Real, tolerance};
use crate::params::GearParams;
use nalgebra::{Point2, Vector2};

/// One evaluated sample of the profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// Position of the sample in the sweep
    pub index: usize,
    /// Raw sweep parameter
    pub beta: Real,
    /// Distance from the fixed center to the rolling-element center
    pub c: Real,
    /// Compressed angle `beta / z`
    pub angle: Real,
    /// Rolling-element center
    pub path: Point2<Real>,
    /// Unit normal at `path`
    pub normal: Vector2<Real>,
    /// Point on the gear surface, `path + b * normal`
    pub gear: Point2<Real>,
}

/// Radial distance `c` at `beta`, together with the square-root term it is built from.
///
/// The radicand is clamped at zero so that `|e| = a + b` (where it touches zero)
/// does not turn into NaN through rounding.
#[inline]
pub fn radial_distance(a: Real, b: Real, e: Real, beta: Real) -> (Real, Real) {
    let (sin_b, cos_b) = beta.sin_cos();
    let term_sqrt = ((a + b).powi(2) - e * e * sin_b * sin_b).max(0.0).sqrt();
    (e * cos_b + term_sqrt, term_sqrt)
}

/// Evaluates the path point, unit normal and gear point for sample `index` at `beta`.
///
/// `params` is expected to have passed [`GearParams::validate`].
pub fn evaluate_sample(
    params: &GearParams,
    index: usize,
    beta: Real,
) -> Result<ProfileSample, ProfileError> {
    let GearParams { a, b, e, z, .. } = *params;
    let z = z as Real;

    let (c, term_sqrt) = radial_distance(a, b, e, beta);
    let angle = beta / z;

    let (sin_a, cos_a) = angle.sin_cos();
    let radial = Vector2::new(cos_a, sin_a);
    let tangential = Vector2::new(-sin_a, cos_a);
    let path = Point2::from(radial * c);

    let (sin_b, cos_b) = beta.sin_cos();
    let tangential_factor = e * sin_b * (1.0 + e * cos_b / term_sqrt);
    let n = radial * (c / z) + tangential * tangential_factor;

    // |n| scales like a length over |z|, so the threshold does too
    let length_scale = (a.abs() + b.abs() + e.abs()) / z.abs();
    let norm = n.norm();
    if !norm.is_finite() || norm <= tolerance() * length_scale {
        return Err(ProfileError::DegenerateNormal { index, beta });
    }
    let normal = n / norm;

    Ok(ProfileSample {
        index,
        beta,
        c,
        angle,
        path,
        normal,
        gear: path + normal * b,
    })
}
