//! Generation parameters for the rejection sampler.
use crate::error::{Error, Result};
use crate::sampling::{CandidateSampling, EllipticalSampling, IrregularSampling, SpiralSampling};

/// Default candidate budget before a run is declared infeasible.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// Spatial distribution policy for candidate positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationPolicy {
    /// Arms wound by `pitch_angle` (radians).
    Spiral { num_arms: u32, pitch_angle: f64 },
    Elliptical,
    Irregular,
}

impl GenerationPolicy {
    /// Spiral policy with the pitch angle given in degrees.
    pub fn spiral_degrees(num_arms: u32, pitch_angle_degrees: f64) -> Self {
        GenerationPolicy::Spiral {
            num_arms,
            pitch_angle: pitch_angle_degrees.to_radians(),
        }
    }

    /// Lowercase tag used in configuration files and chart titles.
    pub fn tag(&self) -> &'static str {
        match self {
            GenerationPolicy::Spiral { .. } => "spiral",
            GenerationPolicy::Elliptical => "elliptical",
            GenerationPolicy::Irregular => "irregular",
        }
    }

    /// Builds the candidate sampler for this policy.
    pub fn sampling(&self) -> Box<dyn CandidateSampling> {
        match *self {
            GenerationPolicy::Spiral {
                num_arms,
                pitch_angle,
            } => Box::new(SpiralSampling::new(num_arms, pitch_angle)),
            GenerationPolicy::Elliptical => Box::new(EllipticalSampling::new()),
            GenerationPolicy::Irregular => Box::new(IrregularSampling::new()),
        }
    }
}

/// Configuration for one point generation run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Number of points to place.
    pub total_points: usize,
    /// Minimum pairwise distance between accepted points.
    pub min_distance: f64,
    /// Radius (or half-width for irregular galaxies) of the sampling domain.
    pub radius_limit: f64,
    /// Distribution policy.
    pub policy: GenerationPolicy,
    /// Candidate draws allowed before giving up.
    pub max_attempts: usize,
}

impl GenerationConfig {
    /// Creates a new [`GenerationConfig`] with the default attempt budget.
    pub fn new(
        total_points: usize,
        min_distance: f64,
        radius_limit: f64,
        policy: GenerationPolicy,
    ) -> Self {
        Self {
            total_points,
            min_distance,
            radius_limit,
            policy,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the candidate budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the distribution policy.
    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.total_points == 0 {
            return Err(Error::InvalidConfig("total_points must be > 0".into()));
        }
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(Error::InvalidConfig(
                "min_distance must be finite and >= 0".into(),
            ));
        }
        if !self.radius_limit.is_finite() || self.radius_limit <= 0.0 {
            return Err(Error::InvalidConfig(
                "radius_limit must be finite and > 0".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be > 0".into()));
        }
        if let GenerationPolicy::Spiral {
            num_arms,
            pitch_angle,
        } = self.policy
        {
            if num_arms == 0 {
                return Err(Error::InvalidConfig("num_arms must be > 0".into()));
            }
            if !(pitch_angle > 0.0 && pitch_angle < std::f64::consts::FRAC_PI_2) {
                return Err(Error::InvalidConfig(format!(
                    "pitch angle must lie strictly between 0 and 90 degrees, got {:.3}",
                    pitch_angle.to_degrees()
                )));
            }
        }

        Ok(())
    }
}
