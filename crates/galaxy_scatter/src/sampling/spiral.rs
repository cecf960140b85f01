//! Spiral galaxy candidate sampling.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;

use crate::sampling::{rand_index, rand_range, CandidateSampling};

/// Polar sampling with a radius-dependent twist replicated over several arms.
///
/// A candidate at radius `r` is rotated by `r / tan(pitch_angle)` and then by
/// `2π·k / num_arms` for a uniformly chosen arm `k`, so outer stars trail
/// further along their arm.
#[derive(Debug, Clone)]
pub struct SpiralSampling {
    /// Number of arms, at least 1.
    pub num_arms: u32,
    /// Pitch angle in radians, inside (0, π/2).
    pub pitch_angle: f64,
}

impl SpiralSampling {
    /// Create a spiral sampler from a pitch angle in radians.
    pub fn new(num_arms: u32, pitch_angle: f64) -> Self {
        Self {
            num_arms,
            pitch_angle,
        }
    }

    /// Create a spiral sampler from a pitch angle in degrees.
    pub fn from_degrees(num_arms: u32, pitch_angle_degrees: f64) -> Self {
        Self::new(num_arms, pitch_angle_degrees.to_radians())
    }

    /// Angular shift applied to a candidate at `radius`.
    #[inline]
    pub fn arm_offset(&self, radius: f64) -> f64 {
        radius / self.pitch_angle.tan()
    }

    /// Rotation of arm `arm_index` relative to arm 0.
    #[inline]
    pub fn arm_rotation(&self, arm_index: usize) -> f64 {
        TAU * arm_index as f64 / self.num_arms.max(1) as f64
    }
}

impl CandidateSampling for SpiralSampling {
    fn draw(&self, radius_limit: f64, rng: &mut dyn RngCore) -> DVec2 {
        let radius = rand_range(rng, 0.0, radius_limit);
        let base_angle = rand_range(rng, 0.0, TAU);
        let arm_index = rand_index(rng, self.num_arms.max(1) as usize);

        let arm_angle = base_angle + self.arm_offset(radius) + self.arm_rotation(arm_index);
        DVec2::new(radius * arm_angle.cos(), radius * arm_angle.sin())
    }

    fn domain_diameter(&self, radius_limit: f64) -> f64 {
        2.0 * radius_limit
    }

    fn contains(&self, point: DVec2, radius_limit: f64) -> bool {
        point.length() <= radius_limit
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::tests::FixedRng;

    #[test]
    fn from_degrees_converts_to_radians() {
        let s = SpiralSampling::from_degrees(4, 90.0);
        assert!((s.pitch_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn arm_offset_grows_linearly_with_radius() {
        let s = SpiralSampling::from_degrees(2, 45.0);
        assert!((s.arm_offset(1.0) - 1.0).abs() < 1e-9);
        assert!((s.arm_offset(3.0) - 3.0).abs() < 1e-9);
        assert_eq!(s.arm_offset(0.0), 0.0);
    }

    #[test]
    fn arm_rotations_are_evenly_spaced() {
        let s = SpiralSampling::from_degrees(4, 12.0);
        assert_eq!(s.arm_rotation(0), 0.0);
        assert!((s.arm_rotation(1) - TAU / 4.0).abs() < 1e-12);
        assert!((s.arm_rotation(3) - 3.0 * TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_draw_lands_on_origin() {
        let s = SpiralSampling::from_degrees(3, 20.0);
        let mut rng = FixedRng { value: 0 };
        let p = s.draw(10.0, &mut rng);
        assert_eq!(p, DVec2::ZERO);
    }

    #[test]
    fn draws_stay_inside_radius_limit() {
        let s = SpiralSampling::from_degrees(4, 12.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = s.draw(25.0, &mut rng);
            assert!(s.contains(p, 25.0), "{p:?} escaped the disc");
        }
    }

    #[test]
    fn determinism_for_same_seed() {
        let s = SpiralSampling::from_degrees(4, 12.0);
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        for _ in 0..16 {
            assert_eq!(s.draw(5.0, &mut rng_a), s.draw(5.0, &mut rng_b));
        }
    }
}
