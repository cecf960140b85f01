//! Irregular galaxy candidate sampling.
use glam::DVec2;
use rand::RngCore;

use crate::sampling::{rand_range, CandidateSampling};

/// Uniform i.i.d. sampling over the square `[-radius_limit, radius_limit)²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IrregularSampling;

impl IrregularSampling {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateSampling for IrregularSampling {
    fn draw(&self, radius_limit: f64, rng: &mut dyn RngCore) -> DVec2 {
        let x = rand_range(rng, -radius_limit, radius_limit);
        let y = rand_range(rng, -radius_limit, radius_limit);
        DVec2::new(x, y)
    }

    fn domain_diameter(&self, radius_limit: f64) -> f64 {
        2.0 * std::f64::consts::SQRT_2 * radius_limit
    }

    fn contains(&self, point: DVec2, radius_limit: f64) -> bool {
        point.x.abs() <= radius_limit && point.y.abs() <= radius_limit
    }
}
