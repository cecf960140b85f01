use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use galaxy_scatter::document::DOCUMENT_FILE_NAME;
use galaxy_scatter::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a galaxy map: stars, wormholes and a chart.
#[derive(Debug, Parser)]
#[command(name = "galaxy-map")]
#[command(version)]
#[command(about = "Star-field generator for fictional galaxies", long_about = None)]
pub struct Cli {
    /// RON run configuration
    #[arg(short, long, default_value = "galaxy.ron")]
    pub config: PathBuf,

    /// Parent directory of the per-epoch run directories
    #[arg(short, long, default_value = "map_dump")]
    pub out: PathBuf,

    /// RNG seed, overrides the configuration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write a PNG raster of the chart
    #[arg(long)]
    pub png: bool,

    /// Skip chart rendering
    #[arg(long, conflicts_with = "png")]
    pub no_chart: bool,

    /// File name of the JSON document inside the run directory
    #[arg(long, default_value = DOCUMENT_FILE_NAME)]
    pub document_name: String,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        let mut options = RunOptions::new(&self.out);
        if self.no_chart {
            options = options.without_chart();
        } else {
            options = options.with_render(RenderConfig::default().with_png(self.png));
        }
        if let Some(seed) = self.seed {
            options = options.with_seed(seed);
        }
        options.with_document_name(&self.document_name)
    }
}

/// Installs a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Loads the configuration and performs one run.
pub fn execute(cli: &Cli) -> anyhow::Result<RunOutput> {
    let config = MapConfig::load(&cli.config)
        .with_context(|| format!("loading configuration {}", cli.config.display()))?;
    info!(
        "Generating {} {} stars with {} wormholes.",
        config.galaxy.total_points,
        config.galaxy.galaxy_type,
        config.wormholes.len()
    );

    let output = run(&config, &cli.run_options()).context("generating galaxy map")?;
    info!(
        "Epoch {}: {} ({} candidates, {} rejected).",
        output.epoch,
        output.document_path.display(),
        output.map.report.attempts,
        output.map.report.rejected
    );
    Ok(output)
}
