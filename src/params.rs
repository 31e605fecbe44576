//! Design parameters of a rolling-element eccentric gear.

use crate::errors::{Advisory, ProfileError};
use crate::float_types::Real;
use crate::profile::GearProfile;

/// Number of samples used when none is given.
pub const DEFAULT_RESOLUTION: usize = 2000;

/// The four scalar design parameters plus the sample count.
///
/// All lengths share one (arbitrary) unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParams {
    /// Crank radius
    pub a: Real,
    /// Rolling-element radius
    pub b: Real,
    /// Eccentricity of the crank
    pub e: Real,
    /// Lobe / tooth count
    pub z: i32,
    /// Number of samples along the curve
    pub resolution: usize,
}

impl Default for GearParams {
    /// The reference design: `a = 25`, `b = 3`, `e = 1.2`, `z = 10`.
    fn default() -> Self {
        Self::new(25.0, 3.0, 1.2, 10)
    }
}

impl GearParams {
    pub const fn new(a: Real, b: Real, e: Real, z: i32) -> Self {
        Self {
            a,
            b,
            e,
            z,
            resolution: DEFAULT_RESOLUTION,
        }
    }

    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Recommended upper bound for the eccentricity, `b / 2`.
    pub fn eccentricity_limit(&self) -> Real {
        self.b / 2.0
    }

    /// `true` when `e < b/2`, i.e. no advisory is due.
    pub fn is_eccentricity_advised(&self) -> bool {
        self.e < self.eccentricity_limit()
    }

    /// Checks the hard preconditions and collects the advisory diagnostics.
    ///
    /// Fatal checks run in a fixed order: lobe count, resolution, rolling-element
    /// radius, eccentricity range. The eccentricity range check keeps the radicand
    /// `(a+b)^2 - e^2 sin^2(beta)` non-negative for every `beta`.
    pub fn validate(&self) -> Result<Vec<Advisory>, ProfileError> {
        if self.z == 0 {
            return Err(ProfileError::InvalidLobeCount);
        }
        if self.resolution < 2 {
            return Err(ProfileError::InvalidResolution {
                resolution: self.resolution,
            });
        }
        if !self.b.is_finite() || self.b <= 0.0 {
            return Err(ProfileError::InvalidRadius { b: self.b });
        }
        let limit = self.a + self.b;
        if limit.is_nan() || self.e.is_nan() || self.e.abs() > limit {
            return Err(ProfileError::InvalidEccentricity { e: self.e, limit });
        }

        let mut advisories = Vec::new();
        if !self.is_eccentricity_advised() {
            advisories.push(Advisory::EccentricityAdvisory {
                e: self.e,
                half_b: self.eccentricity_limit(),
            });
        }
        Ok(advisories)
    }

    /// Generates the profile with the default ops for this build
    /// (parallel when the `parallel` feature is enabled).
    pub fn generate(&self) -> Result<GearProfile, ProfileError> {
        use crate::profile::ProfileOps;

        #[cfg(feature = "parallel")]
        let ops = crate::profile::ParallelProfileOps::new();
        #[cfg(not(feature = "parallel"))]
        let ops = crate::profile::SerialProfileOps::new();

        ops.generate(self)
    }
}
