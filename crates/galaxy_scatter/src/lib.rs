#![forbid(unsafe_code)]
//! galaxy_scatter: star-field synthesis for fictional galaxies.
//!
//! Modules:
//! - sampling: candidate draws for spiral, elliptical and irregular galaxies
//! - placement: rejection sampling with a minimum-separation guarantee and an attempt budget
//! - stars, names: star records, attribute ranges and procedural names
//! - document: the persisted JSON map (stars + wormholes)
//! - render: SVG/PNG charts of a map
//! - config, pipeline: RON run configuration and the end-to-end run
pub mod config;
pub mod document;
pub mod error;
pub mod names;
pub mod pipeline;
pub mod placement;
pub mod render;
pub mod sampling;
pub mod stars;

/// Convenient re-exports for common types. Import with `use galaxy_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::config::{GalaxySection, GalaxyType, MapConfig};
    pub use crate::document::{persist, run_directory, unix_epoch_now, MapDocument, Wormhole};
    pub use crate::error::{Error, Result};
    pub use crate::names::{display_name, name_of};
    pub use crate::pipeline::{
        generate_map, generate_map_with_events, render_run, run, GeneratedMap, RunOptions,
        RunOutput,
    };
    pub use crate::placement::{
        generate_points, generate_points_with_events, EventSink, FnSink, GenerationConfig,
        GenerationEvent, GenerationPolicy, GenerationReport, PointGenerator, VecSink,
    };
    pub use crate::render::{chart_title, render_chart, ChartInput, RenderConfig};
    pub use crate::sampling::{
        CandidateSampling, EllipticalSampling, IrregularSampling, SpiralSampling,
    };
    pub use crate::stars::{assign_attributes, AttributeRanges, IntRange, Star, Uid};
}
