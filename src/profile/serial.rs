//! Serial implementation of profile generation.

use super::traits::{ProfileOps, validate_and_report};
use crate::errors::ProfileError;
use crate::params::GearParams;
use crate::profile::{GearProfile, evaluate_sample};
use crate::sampling::beta_samples;

/// Serial implementation of `ProfileOps`.
pub struct SerialProfileOps;

impl Default for SerialProfileOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialProfileOps {
    pub const fn new() -> Self {
        Self
    }
}

impl ProfileOps for SerialProfileOps {
    fn generate(&self, params: &GearParams) -> Result<GearProfile, ProfileError> {
        let advisories = validate_and_report(params)?;
        tracing::debug!(resolution = params.resolution, "generating profile serially");

        let samples = beta_samples(params)
            .into_iter()
            .enumerate()
            .map(|(index, beta)| evaluate_sample(params, index, beta))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GearProfile::from_samples(*params, &samples, advisories))
    }
}
