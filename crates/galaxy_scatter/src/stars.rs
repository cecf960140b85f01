//! Star records built from accepted points.
use glam::DVec2;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::names::{display_name, name_of};
use crate::sampling::rand_int_inclusive;

/// Stable 1-based star identity.
pub type Uid = u32;

/// Decimal digits kept for persisted coordinates.
pub const COORDINATE_DECIMALS: i32 = 3;

/// Inclusive integer range an attribute is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Range holding a single value.
    pub const fn fixed(value: i64) -> Self {
        Self::new(value, value)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> i64 {
        rand_int_inclusive(rng, self.min, self.max)
    }
}

/// Ranges for every star attribute.
///
/// `e`, `i`, `s` and `st` are reserved fields; they default to the singleton `{0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeRanges {
    /// Intensity.
    pub r: IntRange,
    /// Binary flag.
    pub g: IntRange,
    pub e: IntRange,
    pub i: IntRange,
    pub s: IntRange,
    pub st: IntRange,
}

impl Default for AttributeRanges {
    fn default() -> Self {
        Self {
            r: IntRange::new(1, 50),
            g: IntRange::new(0, 1),
            e: IntRange::fixed(0),
            i: IntRange::fixed(0),
            s: IntRange::fixed(0),
            st: IntRange::fixed(0),
        }
    }
}

impl AttributeRanges {
    fn named(&self) -> [(&'static str, IntRange); 6] {
        [
            ("r", self.r),
            ("g", self.g),
            ("e", self.e),
            ("i", self.i),
            ("s", self.s),
            ("st", self.st),
        ]
    }

    /// Validates that every range is non-empty.
    pub fn validate(&self) -> Result<()> {
        for (name, range) in self.named() {
            if range.min > range.max {
                return Err(Error::InvalidConfig(format!(
                    "attribute range '{name}' is empty: {}..={}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

/// One star of the generated map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub uid: Uid,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub r: i64,
    pub g: i64,
    pub e: i64,
    pub i: i64,
    pub s: i64,
    pub st: i64,
}

impl Star {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Rounds to [`COORDINATE_DECIMALS`] digits.
#[inline]
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    (value * scale).round() / scale
}

/// Builds one [`Star`] per point, in order, with uids `1..=points.len()`.
///
/// Names depend only on the uid; attributes are drawn from `rng` in the
/// order r, g, e, i, s, st for each star.
pub fn assign_attributes(
    points: &[DVec2],
    ranges: &AttributeRanges,
    rng: &mut dyn RngCore,
) -> Result<Vec<Star>> {
    ranges.validate()?;

    let stars = points
        .iter()
        .enumerate()
        .map(|(idx, point)| -> Result<Star> {
            let uid = Uid::try_from(idx + 1).map_err(|_| {
                Error::InvalidConfig(format!("star count {} exceeds uid range", idx + 1))
            })?;
            Ok(Star {
                uid,
                name: display_name(&name_of(uid as u64)),
                x: round_coordinate(point.x),
                y: round_coordinate(point.y),
                r: ranges.r.draw(rng),
                g: ranges.g.draw(rng),
                e: ranges.e.draw(rng),
                i: ranges.i.draw(rng),
                s: ranges.s.draw(rng),
                st: ranges.st.draw(rng),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Assigned attributes to {} stars.", stars.len());
    Ok(stars)
}
