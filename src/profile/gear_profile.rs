//! The sampled output of a profile generation.

use crate::errors::Advisory;
use crate::float_types::Real;
use crate::params::GearParams;
use crate::profile::ProfileSample;
use crate::sampling::spaced_indices;
use geo::{LineString, coord};
use nalgebra::{Point2, Vector2};

/// Index-aligned sequences describing the gear surface and the rolling-element
/// center path, one entry per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GearProfile {
    /// Parameters the profile was generated from
    pub params: GearParams,
    pub gear_x: Vec<Real>,
    pub gear_y: Vec<Real>,
    pub path_x: Vec<Real>,
    pub path_y: Vec<Real>,
    /// Unit normal components at each path point
    pub normal_x: Vec<Real>,
    pub normal_y: Vec<Real>,
    /// Compressed angle `beta / z` of each sample
    pub angles: Vec<Real>,
    /// Non-fatal diagnostics raised while validating `params`
    pub advisories: Vec<Advisory>,
}

impl GearProfile {
    /// Splits evaluated samples into the per-coordinate sequences.
    /// `samples` must be ordered by index.
    pub fn from_samples(
        params: GearParams,
        samples: &[ProfileSample],
        advisories: Vec<Advisory>,
    ) -> Self {
        let n = samples.len();
        let mut profile = GearProfile {
            params,
            gear_x: Vec::with_capacity(n),
            gear_y: Vec::with_capacity(n),
            path_x: Vec::with_capacity(n),
            path_y: Vec::with_capacity(n),
            normal_x: Vec::with_capacity(n),
            normal_y: Vec::with_capacity(n),
            angles: Vec::with_capacity(n),
            advisories,
        };
        for s in samples {
            profile.gear_x.push(s.gear.x);
            profile.gear_y.push(s.gear.y);
            profile.path_x.push(s.path.x);
            profile.path_y.push(s.path.y);
            profile.normal_x.push(s.normal.x);
            profile.normal_y.push(s.normal.y);
            profile.angles.push(s.angle);
        }
        profile
    }

    pub fn len(&self) -> usize {
        self.gear_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gear_x.is_empty()
    }

    /// `(gear_x, gear_y, path_x, path_y)`
    pub fn into_parts(self) -> (Vec<Real>, Vec<Real>, Vec<Real>, Vec<Real>) {
        (self.gear_x, self.gear_y, self.path_x, self.path_y)
    }

    pub fn gear_points(&self) -> Vec<Point2<Real>> {
        zip_points(&self.gear_x, &self.gear_y)
    }

    pub fn path_points(&self) -> Vec<Point2<Real>> {
        zip_points(&self.path_x, &self.path_y)
    }

    pub fn normals(&self) -> Vec<Vector2<Real>> {
        self.normal_x
            .iter()
            .zip(&self.normal_y)
            .map(|(&x, &y)| Vector2::new(x, y))
            .collect()
    }

    /// Centers of `count` rolling elements spread evenly along the center path.
    ///
    /// Each element is a circle of radius `params.b` around the returned point.
    pub fn element_centers(&self, count: usize) -> Vec<Point2<Real>> {
        spaced_indices(self.len(), count)
            .into_iter()
            .map(|i| Point2::new(self.path_x[i], self.path_y[i]))
            .collect()
    }

    /// The gear surface as a georust `LineString`, in sample order.
    pub fn gear_line_string(&self) -> LineString<Real> {
        zip_line_string(&self.gear_x, &self.gear_y)
    }

    /// The rolling-element center path as a georust `LineString`, in sample order.
    pub fn path_line_string(&self) -> LineString<Real> {
        zip_line_string(&self.path_x, &self.path_y)
    }
}

fn zip_points(xs: &[Real], ys: &[Real]) -> Vec<Point2<Real>> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| Point2::new(x, y))
        .collect()
}

fn zip_line_string(xs: &[Real], ys: &[Real]) -> LineString<Real> {
    LineString::new(
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| coord! { x: x, y: y })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::evaluate_sample;

    fn small_profile() -> GearProfile {
        let params = GearParams::new(25.0, 3.0, 1.2, 10).with_resolution(4);
        let samples: Vec<ProfileSample> = [0.0, 1.0, 2.0, 3.0]
            .into_iter()
            .enumerate()
            .map(|(i, beta)| evaluate_sample(&params, i, beta).expect("regular"))
            .collect();
        GearProfile::from_samples(params, &samples, Vec::new())
    }

    #[test]
    fn sequences_stay_aligned() {
        let profile = small_profile();
        assert_eq!(profile.len(), 4);
        assert!(!profile.is_empty());
        assert_eq!(profile.gear_points().len(), 4);
        assert_eq!(profile.normals().len(), 4);
        assert_eq!(profile.angles[1], 0.1);

        let path = profile.path_points();
        let (gx, gy, px, py) = profile.clone().into_parts();
        assert_eq!(px[2], path[2].x);
        assert_eq!(py[2], path[2].y);
        assert_eq!(gx.len(), gy.len());
    }

    #[test]
    fn element_centers_sit_on_the_path() {
        let profile = small_profile();
        let centers = profile.element_centers(2);
        assert_eq!(centers.len(), 2);
        assert_eq!(centers[0], Point2::new(profile.path_x[0], profile.path_y[0]));
        assert_eq!(centers[1], Point2::new(profile.path_x[3], profile.path_y[3]));
    }

    #[test]
    fn line_strings_follow_sample_order() {
        let profile = small_profile();
        let gear = profile.gear_line_string();
        assert_eq!(gear.0.len(), 4);
        assert_eq!(gear.0[0].x, profile.gear_x[0]);
        assert_eq!(profile.path_line_string().0[3].y, profile.path_y[3]);
    }
}
