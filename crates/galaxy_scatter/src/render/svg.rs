//! SVG chart with hover tooltips.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use glam::DVec2;

use crate::error::{Error, Result};
use crate::render::{ChartInput, RenderConfig, Viewport};

const STAR_FILL: &str = "#ffffff";
const WORMHOLE_STROKE: &str = "#ff0000";

/// Accumulates SVG markup for one chart.
struct SvgBuilder {
    content: String,
    size: f64,
}

impl SvgBuilder {
    fn new(size: u32) -> Self {
        let size = size as f64;
        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
  <style>
    .background {{ fill: #000000; }}
    .title {{ font-family: sans-serif; font-size: 20px; fill: #ffffff; text-anchor: middle; }}
    .axis {{ font-family: sans-serif; font-size: 14px; fill: #bbbbbb; text-anchor: middle; }}
    .legend {{ font-family: sans-serif; font-size: 13px; fill: #ffffff; dominant-baseline: middle; }}
    .star {{ fill: {STAR_FILL}; }}
    .star:hover {{ fill: #ffd54f; }}
    .wormhole {{ stroke: {WORMHOLE_STROKE}; stroke-width: 1.5; }}
    .wormhole-end {{ fill: {WORMHOLE_STROKE}; }}
  </style>
  <rect x="0" y="0" width="{size}" height="{size}" class="background" />
"#
        );
        Self { content, size }
    }

    fn text(&mut self, pos: DVec2, text: &str, class: &str, rotate: bool) {
        let transform = if rotate {
            format!(r#" transform="rotate(-90 {:.3} {:.3})""#, pos.x, pos.y)
        } else {
            String::new()
        };
        let _ = writeln!(
            self.content,
            r#"  <text x="{:.3}" y="{:.3}" class="{}"{}>{}</text>"#,
            pos.x,
            pos.y,
            class,
            transform,
            escape(text)
        );
    }

    fn line(&mut self, a: DVec2, b: DVec2, class: &str) {
        let _ = writeln!(
            self.content,
            r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" class="{}" />"#,
            a.x, a.y, b.x, b.y, class
        );
    }

    fn circle(&mut self, center: DVec2, radius: f64, class: &str) {
        let _ = writeln!(
            self.content,
            r#"  <circle cx="{:.3}" cy="{:.3}" r="{:.3}" class="{}" />"#,
            center.x, center.y, radius, class
        );
    }

    /// Five-pointed star marker carrying a `<title>` tooltip.
    fn star(&mut self, center: DVec2, radius: f64, label: &str) {
        let points = star_polygon(center, radius)
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            self.content,
            r#"  <polygon points="{}" class="star"><title>{}</title></polygon>"#,
            points,
            escape(label)
        );
    }

    fn finish(mut self) -> String {
        self.content.push_str("</svg>\n");
        self.content
    }
}

/// Outer and inner vertices of a five-pointed star, tip up.
fn star_polygon(center: DVec2, radius: f64) -> [DVec2; 10] {
    let inner = radius * 0.45;
    std::array::from_fn(|k| {
        let r = if k % 2 == 0 { radius } else { inner };
        let angle = -std::f64::consts::FRAC_PI_2 + k as f64 * std::f64::consts::PI / 5.0;
        center + DVec2::new(r * angle.cos(), r * angle.sin())
    })
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the chart to an SVG string.
pub fn render_svg(input: &ChartInput, config: &RenderConfig) -> String {
    let viewport = Viewport::new(input, config);
    let mut svg = SvgBuilder::new(config.image_size_px());
    let margin = config.margin_px as f64;
    let center = svg.size / 2.0;
    let star_radius = config.star_radius_px as f64;

    svg.text(DVec2::new(center, margin * 0.5), &input.title, "title", false);
    svg.text(
        DVec2::new(center, svg.size - margin * 0.35),
        "X Coordinate",
        "axis",
        false,
    );
    svg.text(DVec2::new(margin * 0.4, center), "Y Coordinate", "axis", true);

    for (a, b) in &input.wormholes {
        let (pa, pb) = (viewport.to_pixel(*a), viewport.to_pixel(*b));
        svg.line(pa, pb, "wormhole");
        svg.circle(pa, star_radius * 0.8, "wormhole-end");
        svg.circle(pb, star_radius * 0.8, "wormhole-end");
    }

    for (point, name) in input.coordinates.iter().zip(&input.names) {
        svg.star(viewport.to_pixel(*point), star_radius * 1.4, name);
    }

    let legend_x = svg.size - margin - 110.0;
    let legend_y = margin * 0.5 + 14.0;
    svg.star(DVec2::new(legend_x, legend_y), star_radius * 1.4, "Stars");
    svg.text(DVec2::new(legend_x + 12.0, legend_y), "Stars", "legend", false);
    svg.line(
        DVec2::new(legend_x - 8.0, legend_y + 20.0),
        DVec2::new(legend_x + 8.0, legend_y + 20.0),
        "wormhole",
    );
    svg.text(
        DVec2::new(legend_x + 12.0, legend_y + 20.0),
        "Wormholes",
        "legend",
        false,
    );

    svg.finish()
}

/// Renders the chart and writes it to `path`.
pub fn write_svg(input: &ChartInput, config: &RenderConfig, path: &Path) -> Result<()> {
    fs::write(path, render_svg(input, config)).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::sample_input;

    #[test]
    fn svg_contains_title_and_tooltips() {
        let svg = render_svg(&sample_input(), &RenderConfig::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Galaxy Map - Spiral Galaxy: EPOCH - 42"));
        assert!(svg.contains("<title>Ancient-River</title>"));
        assert!(svg.contains("<title>Bold-Comet</title>"));
    }

    #[test]
    fn labels_are_escaped() {
        let svg = render_svg(&sample_input(), &RenderConfig::default());
        assert!(svg.contains("<title>Idle &lt;Tide&gt;</title>"));
        assert!(!svg.contains("<Tide>"));
    }

    #[test]
    fn one_marker_per_star_and_line_per_wormhole() {
        let input = sample_input();
        let svg = render_svg(&input, &RenderConfig::default());
        // Star markers plus the legend marker.
        assert_eq!(svg.matches(r#"class="star""#).count(), input.coordinates.len() + 1);
        // Wormholes plus the legend swatch.
        assert_eq!(svg.matches(r#"class="wormhole""#).count(), input.wormholes.len() + 1);
    }

    #[test]
    fn star_polygon_alternates_radii() {
        let pts = star_polygon(DVec2::ZERO, 10.0);
        assert!((pts[0] - DVec2::new(0.0, -10.0)).length() < 1e-9);
        assert!((pts[1].length() - 4.5).abs() < 1e-9);
        assert!((pts[2].length() - 10.0).abs() < 1e-9);
    }
}
