//! Rejection-sampling placement of star positions.
//!
//! [`generator::generate_points`] draws candidates from the policy's
//! [`crate::sampling::CandidateSampling`] strategy and keeps those that are at
//! least `min_distance` away from every point accepted so far.
pub mod config;
pub mod events;
pub mod generator;
pub(crate) mod grid;

pub use config::{GenerationConfig, GenerationPolicy, DEFAULT_MAX_ATTEMPTS};
pub use events::{EventSink, FnSink, GenerationEvent, VecSink};
pub use generator::{generate_points, generate_points_with_events, GenerationReport, PointGenerator};
