//! # Angular Sampler
//!
//! Evenly spaced angles over a sector, and rotation of a radius vector
//! about the Z axis by each of them.

use glam::{DQuat, DVec3};

/// Evenly spaced angular samples over `[from, to]`.
///
/// A closed sector (full turn) yields `divisions` samples, the last one a
/// step short of the start. An open sector yields `divisions + 1` samples so
/// both ends of the arc get their own vertex.
///
/// # Example
///
/// ```rust
/// use ring_mesh::AngularSampler;
/// use std::f64::consts::PI;
///
/// let sampler = AngularSampler::new(0.0, PI, 4, false);
/// assert_eq!(sampler.count(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSampler {
    start: f64,
    step: f64,
    count: u32,
}

impl AngularSampler {
    /// Creates a sampler dividing `[from, to]` into `divisions` steps.
    ///
    /// `divisions` is expected to be at least 1.
    pub fn new(from: f64, to: f64, divisions: u32, closed: bool) -> Self {
        let step = (to - from) / f64::from(divisions.max(1));
        let count = if closed { divisions } else { divisions + 1 };
        Self::from_step(from, step, count)
    }

    /// Creates a sampler from an explicit start, step and sample count.
    pub fn from_step(start: f64, step: f64, count: u32) -> Self {
        Self { start, step, count }
    }

    /// Number of samples.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Angle between neighbouring samples.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Angle of sample `s`.
    #[inline]
    pub fn angle(&self, s: u32) -> f64 {
        f64::from(s) * self.step + self.start
    }

    /// Iterates over all sample angles in order.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |s| self.angle(s))
    }

    /// Rotates `vector` by `angle` about the Z axis.
    #[inline]
    pub fn rotate(vector: DVec3, angle: f64) -> DVec3 {
        DQuat::from_axis_angle(DVec3::Z, angle) * vector
    }

    /// Positions of a loop of the given radius, one per sample.
    pub fn sample(&self, radius: f64) -> impl Iterator<Item = DVec3> + '_ {
        let arm = DVec3::new(radius, 0.0, 0.0);
        self.angles().map(move |angle| Self::rotate(arm, angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_closed_sampler_skips_duplicate_end() {
        let sampler = AngularSampler::new(0.0, TAU, 4, true);
        let angles: Vec<f64> = sampler.angles().collect();
        assert_eq!(angles.len(), 4);
        assert_relative_eq!(angles[3], 3.0 * FRAC_PI_2);
    }

    #[test]
    fn test_open_sampler_includes_both_ends() {
        let sampler = AngularSampler::new(0.5, 0.5 + PI, 4, false);
        let angles: Vec<f64> = sampler.angles().collect();
        assert_eq!(angles.len(), 5);
        assert_relative_eq!(angles[0], 0.5);
        assert_relative_eq!(angles[4], 0.5 + PI);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = AngularSampler::rotate(DVec3::new(2.0, 0.0, 0.0), FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 2.0, epsilon = 1e-12);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_sample_stays_on_circle_in_xy_plane() {
        let sampler = AngularSampler::new(0.0, TAU, 7, true);
        for p in sampler.sample(3.0) {
            assert_relative_eq!(p.truncate().length(), 3.0, epsilon = 1e-12);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_samples_run_counter_clockwise() {
        let sampler = AngularSampler::new(0.0, FRAC_PI_2, 2, false);
        let points: Vec<DVec3> = sampler.sample(1.0).collect();
        for pair in points.windows(2) {
            assert!(pair[0].cross(pair[1]).z > 0.0);
        }
    }
}
