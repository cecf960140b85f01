//! Run configuration loaded from RON files.
//!
//! A [`MapConfig`] holds every immutable parameter of one generation run. It is
//! parsed once and passed explicitly to [`crate::pipeline`].
//!
//! ```ron
//! (
//!     galaxy: (
//!         total_points: 200,
//!         galaxy_type: "spiral",
//!         num_arms: Some(4),
//!         pitch_angle_degrees: Some(12.0),
//!         min_distance: 1.5,
//!         radius_limit: 100.0,
//!     ),
//!     wormholes: [(1, 2), (3, 7)],
//! )
//! ```
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::{validate_wormholes, Wormhole};
use crate::error::{Error, Result};
use crate::placement::config::{GenerationConfig, GenerationPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::stars::AttributeRanges;

/// Galaxy shape tag as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalaxyType {
    Spiral,
    Elliptical,
    Irregular,
}

impl GalaxyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalaxyType::Spiral => "spiral",
            GalaxyType::Elliptical => "elliptical",
            GalaxyType::Irregular => "irregular",
        }
    }
}

impl FromStr for GalaxyType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "spiral" => Ok(GalaxyType::Spiral),
            "elliptical" => Ok(GalaxyType::Elliptical),
            "irregular" => Ok(GalaxyType::Irregular),
            other => Err(Error::UnknownGalaxyType { tag: other.into() }),
        }
    }
}

impl fmt::Display for GalaxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `galaxy` section of a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalaxySection {
    pub total_points: usize,
    pub galaxy_type: String,
    /// Required for spiral galaxies.
    #[serde(default)]
    pub num_arms: Option<u32>,
    /// Required for spiral galaxies.
    #[serde(default)]
    pub pitch_angle_degrees: Option<f64>,
    pub min_distance: f64,
    pub radius_limit: f64,
    #[serde(default)]
    pub max_attempts: Option<usize>,
}

impl GalaxySection {
    pub fn new(
        total_points: usize,
        galaxy_type: GalaxyType,
        min_distance: f64,
        radius_limit: f64,
    ) -> Self {
        Self {
            total_points,
            galaxy_type: galaxy_type.as_str().into(),
            num_arms: None,
            pitch_angle_degrees: None,
            min_distance,
            radius_limit,
            max_attempts: None,
        }
    }

    /// Sets the spiral arm parameters.
    pub fn with_arms(mut self, num_arms: u32, pitch_angle_degrees: f64) -> Self {
        self.num_arms = Some(num_arms);
        self.pitch_angle_degrees = Some(pitch_angle_degrees);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// Complete configuration of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub galaxy: GalaxySection,
    /// 1-based uid pairs.
    #[serde(default)]
    pub wormholes: Vec<Wormhole>,
    #[serde(default)]
    pub attributes: AttributeRanges,
    /// Seed for the run RNG; a fresh one is chosen when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MapConfig {
    pub fn new(galaxy: GalaxySection) -> Self {
        Self {
            galaxy,
            wormholes: Vec::new(),
            attributes: AttributeRanges::default(),
            seed: None,
        }
    }

    pub fn with_wormholes(mut self, wormholes: Vec<Wormhole>) -> Self {
        self.wormholes = wormholes;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeRanges) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_ron_str(source: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        Self::from_ron_str(&source)
            .map_err(|e| Error::ConfigParse(format!("{}: {e}", path.display())))
    }

    pub fn galaxy_type(&self) -> Result<GalaxyType> {
        self.galaxy.galaxy_type.parse()
    }

    /// Translates the galaxy section into a validated [`GenerationConfig`].
    pub fn generation_config(&self) -> Result<GenerationConfig> {
        let galaxy = &self.galaxy;
        let policy = match self.galaxy_type()? {
            GalaxyType::Spiral => {
                let (Some(num_arms), Some(pitch)) = (galaxy.num_arms, galaxy.pitch_angle_degrees)
                else {
                    return Err(Error::InvalidConfig(
                        "spiral galaxies need num_arms and pitch_angle_degrees".into(),
                    ));
                };
                GenerationPolicy::spiral_degrees(num_arms, pitch)
            }
            GalaxyType::Elliptical => GenerationPolicy::Elliptical,
            GalaxyType::Irregular => GenerationPolicy::Irregular,
        };

        let config = GenerationConfig::new(
            galaxy.total_points,
            galaxy.min_distance,
            galaxy.radius_limit,
            policy,
        )
        .with_max_attempts(galaxy.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS));
        config.validate()?;
        Ok(config)
    }

    /// Validates everything that can be checked before generation starts.
    pub fn validate(&self) -> Result<()> {
        self.generation_config()?;
        self.attributes.validate()?;
        validate_wormholes(&self.wormholes, self.galaxy.total_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stars::IntRange;

    const SPIRAL: &str = r#"(
        galaxy: (
            total_points: 50,
            galaxy_type: "spiral",
            num_arms: Some(4),
            pitch_angle_degrees: Some(12.0),
            min_distance: 1.0,
            radius_limit: 40.0,
        ),
        wormholes: [(1, 2), (10, 50)],
        seed: Some(7),
    )"#;

    #[test]
    fn parses_spiral_config() {
        let config = MapConfig::from_ron_str(SPIRAL).expect("parses");
        assert_eq!(config.galaxy_type().expect("known"), GalaxyType::Spiral);
        assert_eq!(config.wormholes, vec![Wormhole(1, 2), Wormhole(10, 50)]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.attributes, AttributeRanges::default());

        let generation = config.generation_config().expect("valid");
        assert_eq!(generation.total_points, 50);
        assert_eq!(generation.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(generation.policy, GenerationPolicy::spiral_degrees(4, 12.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_attribute_ranges_keep_defaults() {
        let source = r#"(
            galaxy: (
                total_points: 3,
                galaxy_type: "irregular",
                min_distance: 0.0,
                radius_limit: 5.0,
            ),
            attributes: (st: (min: 0, max: 4)),
        )"#;
        let config = MapConfig::from_ron_str(source).expect("parses");
        assert_eq!(config.attributes.st, IntRange::new(0, 4));
        assert_eq!(config.attributes.r, IntRange::new(1, 50));
        assert!(config.wormholes.is_empty());
    }

    #[test]
    fn unknown_galaxy_type_is_a_configuration_error() {
        let config = MapConfig::new(GalaxySection {
            galaxy_type: "ring".into(),
            ..GalaxySection::new(5, GalaxyType::Irregular, 0.0, 10.0)
        });
        let err = config.generation_config().expect_err("unknown tag");
        assert!(matches!(err, Error::UnknownGalaxyType { ref tag } if tag == "ring"));
        assert!(err.is_configuration());
    }

    #[test]
    fn galaxy_type_tags_are_case_sensitive() {
        assert!("Spiral".parse::<GalaxyType>().is_err());
        assert_eq!("irregular".parse::<GalaxyType>().expect("known"), GalaxyType::Irregular);
        assert_eq!(GalaxyType::Elliptical.to_string(), "elliptical");
    }

    #[test]
    fn spiral_without_arms_is_rejected() {
        let config = MapConfig::new(GalaxySection::new(5, GalaxyType::Spiral, 0.0, 10.0));
        assert!(matches!(
            config.generation_config(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn wormholes_outside_star_range_fail_validation() {
        let config = MapConfig::new(GalaxySection::new(5, GalaxyType::Elliptical, 0.0, 10.0))
            .with_wormholes(vec![Wormhole(1, 6)]);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidWormholeReference { uid2: 6, .. })
        ));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        assert!(matches!(
            MapConfig::from_ron_str("(galaxy: ())"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn ron_round_trip() {
        let config = MapConfig::new(
            GalaxySection::new(20, GalaxyType::Spiral, 1.0, 30.0)
                .with_arms(2, 15.0)
                .with_max_attempts(5_000),
        )
        .with_wormholes(vec![Wormhole(1, 20)])
        .with_seed(99);
        let text = ron::to_string(&config).expect("serializes");
        assert_eq!(MapConfig::from_ron_str(&text).expect("parses"), config);
    }
}
