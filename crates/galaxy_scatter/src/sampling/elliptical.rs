//! Elliptical galaxy candidate sampling.
use std::f64::consts::TAU;

use glam::DVec2;
use rand::RngCore;

use crate::sampling::{rand_range, CandidateSampling};

/// Polar sampling with uniform radius and angle and no arm structure.
///
/// Uniform radius concentrates stars towards the core, which gives the
/// elliptical look without any extra shaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipticalSampling;

impl EllipticalSampling {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateSampling for EllipticalSampling {
    fn draw(&self, radius_limit: f64, rng: &mut dyn RngCore) -> DVec2 {
        let radius = rand_range(rng, 0.0, radius_limit);
        let angle = rand_range(rng, 0.0, TAU);
        DVec2::new(radius * angle.cos(), radius * angle.sin())
    }

    fn domain_diameter(&self, radius_limit: f64) -> f64 {
        2.0 * radius_limit
    }

    fn contains(&self, point: DVec2, radius_limit: f64) -> bool {
        point.length() <= radius_limit
    }
}
