//! Traits for profile generation.

use crate::errors::{Advisory, ProfileError};
use crate::params::GearParams;
use crate::profile::GearProfile;

/// Trait for generating a gear profile from its design parameters.
pub trait ProfileOps {
    /// Validates `params`, reports advisories and sweeps all samples.
    ///
    /// Fails on the first precondition violation, or with the
    /// [`ProfileError::DegenerateNormal`] of the lowest failing sample index.
    fn generate(&self, params: &GearParams) -> Result<GearProfile, ProfileError>;
}

/// Validates `params` and emits each advisory once on the `tracing` channel.
pub(crate) fn validate_and_report(params: &GearParams) -> Result<Vec<Advisory>, ProfileError> {
    let advisories = params.validate()?;
    for advisory in &advisories {
        match advisory {
            Advisory::EccentricityAdvisory { e, half_b } => {
                tracing::warn!(e = *e, half_b = *half_b, "{}", advisory);
            },
        }
    }
    Ok(advisories)
}
