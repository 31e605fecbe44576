//! Parallel implementation of profile generation.

use super::traits::{ProfileOps, validate_and_report};
use crate::errors::ProfileError;
use crate::params::GearParams;
use crate::profile::{GearProfile, ProfileSample, evaluate_sample};
use crate::sampling::beta_samples;
use rayon::prelude::*;

/// Parallel implementation of `ProfileOps`.
///
/// Samples are independent, so the sweep is split across the rayon pool and
/// placed back by index. Results are identical to [`super::SerialProfileOps`].
pub struct ParallelProfileOps;

impl Default for ParallelProfileOps {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelProfileOps {
    pub const fn new() -> Self {
        Self
    }
}

impl ProfileOps for ParallelProfileOps {
    fn generate(&self, params: &GearParams) -> Result<GearProfile, ProfileError> {
        let advisories = validate_and_report(params)?;
        tracing::debug!(resolution = params.resolution, "generating profile in parallel");

        let evaluated: Vec<Result<ProfileSample, ProfileError>> = beta_samples(params)
            .into_par_iter()
            .enumerate()
            .map(|(index, beta)| evaluate_sample(params, index, beta))
            .collect();

        // sequential collect keeps the lowest failing index
        let samples = evaluated.into_iter().collect::<Result<Vec<_>, _>>()?;

        Ok(GearProfile::from_samples(*params, &samples, advisories))
    }
}
