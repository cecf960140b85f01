//! End-to-end generation: points, stars, document, chart.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{info, warn};

use crate::config::{GalaxyType, MapConfig};
use crate::document::{self, MapDocument};
use crate::error::Result;
use crate::names::mix_u64;
use crate::placement::events::EventSink;
use crate::placement::generator::{generate_points_with_events, GenerationReport};
use crate::render::{render_chart, ChartInput, RenderConfig};
use crate::stars::assign_attributes;

/// Output of [`generate_map`] before anything touches the filesystem.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    pub galaxy_type: GalaxyType,
    pub document: MapDocument,
    /// Candidate statistics of the placement step.
    pub report: GenerationReport,
}

/// Generates stars for `config` with the given RNG.
pub fn generate_map(config: &MapConfig, rng: &mut dyn RngCore) -> Result<GeneratedMap> {
    generate_map_with_events(config, rng, &mut ())
}

pub fn generate_map_with_events(
    config: &MapConfig,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> Result<GeneratedMap> {
    config.validate()?;
    let galaxy_type = config.galaxy_type()?;
    let generation = config.generation_config()?;

    let report = generate_points_with_events(&generation, rng, sink)?;
    let stars = assign_attributes(&report.points, &config.attributes, rng)?;
    let document = MapDocument::new(stars, config.wormholes.clone());

    Ok(GeneratedMap {
        galaxy_type,
        document,
        report,
    })
}

/// Where and how a run is persisted.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Parent of the per-epoch run directories.
    pub output_root: PathBuf,
    /// Chart settings; `None` skips rendering.
    pub render: Option<RenderConfig>,
    /// Fixed epoch instead of the current time.
    pub epoch: Option<u64>,
    /// Seed overriding the one in the configuration.
    pub seed: Option<u64>,
    /// File name of the JSON document inside the run directory.
    pub document_name: String,
}

impl RunOptions {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            render: Some(RenderConfig::default()),
            epoch: None,
            seed: None,
            document_name: document::DOCUMENT_FILE_NAME.to_string(),
        }
    }

    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = Some(render);
        self
    }

    pub fn without_chart(mut self) -> Self {
        self.render = None;
        self
    }

    pub fn with_epoch(mut self, epoch: u64) -> Self {
        self.epoch = Some(epoch);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_document_name(mut self, document_name: impl Into<String>) -> Self {
        self.document_name = document_name.into();
        self
    }
}

/// What a run wrote.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub epoch: u64,
    /// Seed the run RNG was created from.
    pub seed: u64,
    pub run_dir: PathBuf,
    pub document_path: PathBuf,
    pub chart_paths: Vec<PathBuf>,
    pub map: GeneratedMap,
}

/// Seed used when neither the options nor the configuration provide one.
fn fresh_seed(epoch: u64) -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or_default();
    mix_u64(epoch ^ (nanos << 32) ^ std::process::id() as u64)
}

/// Generates, persists and renders one map.
///
/// Nothing is written when configuration or placement fails. The chart is
/// rendered after the document is on disk; a chart failure is returned as an
/// error but leaves the document in place.
pub fn run(config: &MapConfig, options: &RunOptions) -> Result<RunOutput> {
    let epoch = match options.epoch {
        Some(epoch) => epoch,
        None => document::unix_epoch_now()?,
    };
    let seed = options
        .seed
        .or(config.seed)
        .unwrap_or_else(|| fresh_seed(epoch));
    info!("Run {epoch} using seed {seed}.");

    let mut rng = StdRng::seed_from_u64(seed);
    let map = generate_map(config, &mut rng)?;

    let document_path = document::persist_as(
        &map.document,
        &options.output_root,
        epoch,
        &options.document_name,
    )?;
    let run_dir = document::run_directory(&options.output_root, epoch);

    let chart_paths = match &options.render {
        Some(render) => render_run(&map, epoch, render, &run_dir).inspect_err(|e| {
            warn!(
                "Chart rendering failed ({e}); document kept at {}.",
                document_path.display()
            );
        })?,
        None => Vec::new(),
    };

    Ok(RunOutput {
        epoch,
        seed,
        run_dir,
        document_path,
        chart_paths,
        map,
    })
}

/// Renders the chart for an already persisted map.
pub fn render_run(
    map: &GeneratedMap,
    epoch: u64,
    render: &RenderConfig,
    run_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let input = ChartInput::from_document(&map.document, map.galaxy_type.as_str(), epoch)?;
    render_chart(&input, render, run_dir)
}
