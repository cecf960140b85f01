//! Candidate sampling for the three galaxy shapes.
//!
//! Each strategy draws one candidate position at a time from its domain. The
//! rejection loop in [`crate::placement`] decides whether a candidate is kept.
use glam::DVec2;
use rand::RngCore;

pub mod elliptical;
pub mod irregular;
pub mod spiral;

pub use elliptical::EllipticalSampling;
pub use irregular::IrregularSampling;
pub use spiral::SpiralSampling;

/// Trait for drawing single candidate positions around the galactic origin.
pub trait CandidateSampling: Send + Sync {
    /// Draw one candidate inside the domain bounded by `radius_limit`.
    fn draw(&self, radius_limit: f64, rng: &mut dyn RngCore) -> DVec2;

    /// Largest possible distance between two points of the domain.
    fn domain_diameter(&self, radius_limit: f64) -> f64;

    /// Whether `point` lies inside the domain bounded by `radius_limit`.
    fn contains(&self, point: DVec2, radius_limit: f64) -> bool;
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    // 53 random mantissa bits.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Generate a random float in the range [low, high).
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, low: f64, high: f64) -> f64 {
    low + rand01(rng) * (high - low)
}

/// Generate a random index in `0..n`. Returns 0 for `n == 0`.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    ((rand01(rng) * n as f64) as usize).min(n - 1)
}

/// Generate a random integer in the inclusive range [low, high].
///
/// A degenerate range (`low >= high`) still consumes one draw so that the
/// random stream does not depend on which ranges happen to be singletons.
#[inline]
pub(crate) fn rand_int_inclusive(rng: &mut dyn RngCore, low: i64, high: i64) -> i64 {
    if low >= high {
        rng.next_u64();
        return low;
    }
    let offset = match high.abs_diff(low).checked_add(1) {
        // Every i64 is in range.
        None => rng.next_u64(),
        Some(span) if span <= u32::MAX as u64 => rand_index(rng, span as usize) as u64,
        Some(span) => rng.next_u64() % span,
    };
    low.wrapping_add_unsigned(offset)
}
