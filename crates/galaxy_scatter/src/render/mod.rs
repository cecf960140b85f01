//! Chart rendering of a generated map.
//!
//! [`ChartInput`] is the only thing the renderers see: coordinates in uid
//! order, display names for tooltips, and wormholes already resolved to
//! coordinate pairs. Building it is where malformed coordinate data and
//! dangling wormhole uids are caught.
use std::path::{Path, PathBuf};

use glam::DVec2;
use tracing::info;

use crate::document::{MapDocument, Wormhole};
use crate::error::{Error, Result};

pub mod png;
pub mod svg;

/// File name of the SVG chart inside a run directory.
pub const SVG_FILE_NAME: &str = "galaxy_map.svg";
/// File name of the PNG chart inside a run directory.
pub const PNG_FILE_NAME: &str = "galaxy_map.png";

/// `Galaxy Map - Spiral Galaxy: EPOCH - 1700000000`.
pub fn chart_title(galaxy_type: &str, epoch: u64) -> String {
    let mut chars = galaxy_type.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("Galaxy Map - {capitalized} Galaxy: EPOCH - {epoch}")
}

/// Everything a chart needs, validated.
#[derive(Debug, Clone)]
pub struct ChartInput {
    /// Star positions in uid order.
    pub coordinates: Vec<DVec2>,
    /// Tooltip labels, parallel to `coordinates`.
    pub names: Vec<String>,
    /// Wormhole endpoints resolved through `uid - 1`.
    pub wormholes: Vec<(DVec2, DVec2)>,
    pub title: String,
}

impl ChartInput {
    /// Builds chart input from raw coordinate rows.
    ///
    /// Every row must hold exactly two finite values and there must be one name per row.
    pub fn from_rows(
        rows: &[Vec<f64>],
        names: Vec<String>,
        wormholes: &[Wormhole],
        title: impl Into<String>,
    ) -> Result<Self> {
        let mut coordinates = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            let [x, y] = row.as_slice() else {
                return Err(Error::Shape(format!(
                    "row {idx} has {} columns, expected 2",
                    row.len()
                )));
            };
            if !x.is_finite() || !y.is_finite() {
                return Err(Error::Shape(format!("row {idx} is not finite: ({x}, {y})")));
            }
            coordinates.push(DVec2::new(*x, *y));
        }

        if names.len() != coordinates.len() {
            return Err(Error::Shape(format!(
                "{} names for {} coordinates",
                names.len(),
                coordinates.len()
            )));
        }

        let wormholes = wormholes
            .iter()
            .map(|w| -> Result<(DVec2, DVec2)> {
                let (a, b) = w.indices(coordinates.len())?;
                Ok((coordinates[a], coordinates[b]))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            coordinates,
            names,
            wormholes,
            title: title.into(),
        })
    }

    /// Builds chart input from a persisted document.
    pub fn from_document(document: &MapDocument, galaxy_type: &str, epoch: u64) -> Result<Self> {
        let rows: Vec<Vec<f64>> = document.coordinates().iter().map(|c| c.to_vec()).collect();
        Self::from_rows(
            &rows,
            document.names(),
            &document.wormholes,
            chart_title(galaxy_type, epoch),
        )
    }

    /// Half-width of a square centred on the origin that holds every star.
    pub fn half_extent(&self) -> f64 {
        let max = self
            .coordinates
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max);
        if max > 0.0 {
            max * 1.05
        } else {
            1.0
        }
    }
}

/// Options shared by the chart renderers.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Edge length of the square plot area in pixels.
    pub plot_size_px: u32,
    /// Margin around the plot area for title, axes and legend.
    pub margin_px: u32,
    /// Star marker radius in pixels.
    pub star_radius_px: u32,
    /// Also write a PNG raster.
    pub png: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            plot_size_px: 900,
            margin_px: 70,
            star_radius_px: 4,
            png: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plot_size(mut self, plot_size_px: u32) -> Self {
        self.plot_size_px = plot_size_px;
        self
    }

    pub fn with_star_radius(mut self, star_radius_px: u32) -> Self {
        self.star_radius_px = star_radius_px;
        self
    }

    pub fn with_png(mut self, png: bool) -> Self {
        self.png = png;
        self
    }

    /// Total image edge length in pixels.
    pub fn image_size_px(&self) -> u32 {
        self.plot_size_px + 2 * self.margin_px
    }

    pub fn validate(&self) -> Result<()> {
        if self.plot_size_px == 0 {
            return Err(Error::InvalidConfig("plot_size_px must be > 0".into()));
        }
        Ok(())
    }
}

/// Maps world coordinates onto image pixels, y pointing up.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Viewport {
    half_extent: f64,
    plot_size: f64,
    margin: f64,
}

impl Viewport {
    pub fn new(input: &ChartInput, config: &RenderConfig) -> Self {
        Self {
            half_extent: input.half_extent(),
            plot_size: config.plot_size_px as f64,
            margin: config.margin_px as f64,
        }
    }

    #[inline]
    pub fn to_pixel(&self, p: DVec2) -> DVec2 {
        let scale = self.plot_size / (2.0 * self.half_extent);
        DVec2::new(
            self.margin + (p.x + self.half_extent) * scale,
            self.margin + (self.half_extent - p.y) * scale,
        )
    }
}

/// Writes the SVG chart (and the PNG when enabled) into `dir`.
pub fn render_chart(
    input: &ChartInput,
    config: &RenderConfig,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let dir = dir.as_ref();
    let mut written = Vec::new();

    let svg_path = dir.join(SVG_FILE_NAME);
    svg::write_svg(input, config, &svg_path)?;
    written.push(svg_path);

    if config.png {
        let png_path = dir.join(PNG_FILE_NAME);
        png::write_png(input, config, &png_path)?;
        written.push(png_path);
    }

    info!(
        "Rendered {} stars and {} wormholes into {}.",
        input.coordinates.len(),
        input.wormholes.len(),
        dir.display()
    );
    Ok(written)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_input() -> ChartInput {
        ChartInput::from_rows(
            &[vec![0.0, 0.0], vec![10.0, -5.0], vec![-4.0, 8.0]],
            vec!["Ancient-River".into(), "Bold-Comet".into(), "Idle <Tide>".into()],
            &[Wormhole(1, 3)],
            chart_title("spiral", 42),
        )
        .expect("valid input")
    }

    #[test]
    fn chart_title_capitalizes_galaxy_type() {
        assert_eq!(
            chart_title("elliptical", 1700000000),
            "Galaxy Map - Elliptical Galaxy: EPOCH - 1700000000"
        );
    }

    #[test]
    fn wormholes_resolve_through_uid_minus_one() {
        let input = sample_input();
        assert_eq!(
            input.wormholes,
            vec![(DVec2::new(0.0, 0.0), DVec2::new(-4.0, 8.0))]
        );
    }

    #[test]
    fn rows_with_wrong_width_are_shape_errors() {
        let err = ChartInput::from_rows(
            &[vec![1.0, 2.0], vec![1.0, 2.0, 3.0]],
            vec!["A".into(), "B".into()],
            &[],
            "t",
        )
        .expect_err("three columns");
        assert!(matches!(err, Error::Shape(ref msg) if msg.contains("row 1")));
    }

    #[test]
    fn non_finite_rows_and_name_mismatch_are_shape_errors() {
        assert!(matches!(
            ChartInput::from_rows(&[vec![f64::NAN, 0.0]], vec!["A".into()], &[], "t"),
            Err(Error::Shape(_))
        ));
        assert!(matches!(
            ChartInput::from_rows(&[vec![0.0, 0.0]], vec![], &[], "t"),
            Err(Error::Shape(_))
        ));
    }

    #[test]
    fn dangling_wormholes_are_rejected() {
        assert!(matches!(
            ChartInput::from_rows(&[vec![0.0, 0.0]], vec!["A".into()], &[Wormhole(1, 2)], "t"),
            Err(Error::InvalidWormholeReference { .. })
        ));
    }

    #[test]
    fn viewport_keeps_stars_inside_plot_area() {
        let input = sample_input();
        let config = RenderConfig::default();
        let viewport = Viewport::new(&input, &config);
        let lo = config.margin_px as f64;
        let hi = (config.margin_px + config.plot_size_px) as f64;
        for p in &input.coordinates {
            let px = viewport.to_pixel(*p);
            assert!(px.x > lo && px.x < hi);
            assert!(px.y > lo && px.y < hi);
        }
        let origin = viewport.to_pixel(DVec2::ZERO);
        assert!((origin.x - (lo + hi) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_has_unit_extent() {
        let input = ChartInput::from_rows(&[], vec![], &[], "t").expect("empty is valid");
        assert_eq!(input.half_extent(), 1.0);
    }
}
