//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, infeasible packings, dangling wormhole references,
//! malformed chart input, IO, and serialization failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown galaxy type '{tag}' (expected spiral, elliptical or irregular)")]
    UnknownGalaxyType { tag: String },

    #[error("could not parse configuration: {0}")]
    ConfigParse(String),

    #[error(
        "cannot place {requested} points: only {placed} accepted after {attempts} candidate draws"
    )]
    PackingInfeasible {
        requested: usize,
        placed: usize,
        attempts: usize,
    },

    #[error("wormhole ({uid1}, {uid2}) references a star outside 1..={star_count}")]
    InvalidWormholeReference {
        uid1: u32,
        uid2: u32,
        star_count: usize,
    },

    #[error("malformed chart input: {0}")]
    Shape(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Returns `true` for errors caused by the run configuration itself.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfig(_) | Error::UnknownGalaxyType { .. } | Error::ConfigParse(_)
        )
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
