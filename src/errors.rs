//! Profile errors and advisories

use crate::float_types::Real;
use std::fmt::Display;

/// Everything that can abort a profile generation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// (InvalidLobeCount) The lobe count `z` is zero
    #[error("(InvalidLobeCount) lobe count z must be non-zero")]
    InvalidLobeCount,
    /// (InvalidResolution) Fewer than two samples were requested
    #[error("(InvalidResolution) resolution must be at least 2, got {resolution}")]
    InvalidResolution { resolution: usize },
    /// (InvalidRadius) The rolling-element radius `b` is not strictly positive
    #[error("(InvalidRadius) rolling-element radius b must be > 0, got {b}")]
    InvalidRadius { b: Real },
    /// (InvalidEccentricity) `|e|` exceeds `a + b`, the square root term would turn imaginary
    #[error("(InvalidEccentricity) eccentricity |e| = {e} must not exceed a + b = {limit}")]
    InvalidEccentricity { e: Real, limit: Real },
    /// (DegenerateNormal) The normal vector vanished (or blew up) at a sample
    #[error("(DegenerateNormal) normal vector is degenerate at sample {index} (beta = {beta})")]
    DegenerateNormal { index: usize, beta: Real },
}

/// Non-fatal design diagnostics reported alongside a generated profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// The eccentricity is not smaller than half the rolling-element radius
    EccentricityAdvisory { e: Real, half_b: Real },
}

impl Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::EccentricityAdvisory { e, half_b } => write!(
                f,
                "Eccentricity e={} is not smaller than b/2 ({}). This may violate geometric constraints.",
                e, half_b
            ),
        }
    }
}
