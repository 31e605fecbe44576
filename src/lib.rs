//! Geometry of **rolling-element eccentric gears**: the path traced by the
//! rolling-element centers and the equidistant gear surface around it.
//!
//! From four design parameters, crank radius `a`, rolling-element radius `b`,
//! eccentricity `e` and lobe count `z`, the generator samples
//! ```text
//! c(β) = e·cos β + √((a+b)² − e²·sin² β),    β ∈ [0, 2π·z]
//! ```
//! places each rolling-element center at distance `c` along the angle `β / z`,
//! and offsets it by `b` along the analytic unit normal of the center path.
//!
//! ```
//! let profile = rollgear::generate(25.0, 3.0, 1.2, 10, 2000).unwrap();
//! assert_eq!(profile.len(), 2000);
//! let (gear_x, gear_y, path_x, path_y) = profile.into_parts();
//! # let _ = (gear_x, gear_y, path_x, path_y);
//! ```
//!
//! # Features
//! #### Optional
//! - **parallel**: use rayon to spread the sample sweep over threads
//!
//! Advisories (e.g. `e ≥ b/2`) are returned with the profile and also emitted
//! through [`tracing`]; install a subscriber to see them.

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod params;
pub mod profile;
pub mod sampling;

pub use errors::{Advisory, ProfileError};
pub use params::{DEFAULT_RESOLUTION, GearParams};
pub use profile::{GearProfile, ProfileOps, ProfileSample};

use float_types::Real;

/// Generates the gear surface and the rolling-element center path.
///
/// Returns the index-aligned sequences of length `resolution`; split them with
/// [`GearProfile::into_parts`] to get `(gear_x, gear_y, path_x, path_y)`.
pub fn generate(
    a: Real,
    b: Real,
    e: Real,
    z: i32,
    resolution: usize,
) -> Result<GearProfile, ProfileError> {
    GearParams::new(a, b, e, z)
        .with_resolution(resolution)
        .generate()
}
