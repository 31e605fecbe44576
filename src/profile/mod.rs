//! The profile generator: center path, normal field and equidistant gear curve.

pub mod gear_profile;
pub mod sample;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use gear_profile::GearProfile;
pub use sample::{ProfileSample, evaluate_sample, radial_distance};
pub use serial::SerialProfileOps;
pub use traits::ProfileOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelProfileOps;
