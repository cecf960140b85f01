//! PNG raster of the chart. Labels are left to the SVG version.
use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::render::{ChartInput, RenderConfig, Viewport};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const STAR: Rgb<u8> = Rgb([255, 255, 255]);
const WORMHOLE: Rgb<u8> = Rgb([255, 0, 0]);

/// Rasterizes the chart into an RGB image.
pub fn render_png(input: &ChartInput, config: &RenderConfig) -> RgbImage {
    let size = config.image_size_px();
    let mut img = RgbImage::from_pixel(size, size, BACKGROUND);
    let viewport = Viewport::new(input, config);
    let radius = config.star_radius_px as i64;

    for (a, b) in &input.wormholes {
        let (pa, pb) = (viewport.to_pixel(*a), viewport.to_pixel(*b));
        draw_line(&mut img, pa, pb, WORMHOLE);
        fill_circle(&mut img, pa, radius, WORMHOLE);
        fill_circle(&mut img, pb, radius, WORMHOLE);
    }

    for point in &input.coordinates {
        fill_circle(&mut img, viewport.to_pixel(*point), radius, STAR);
    }

    img
}

/// Rasterizes the chart and saves it as PNG.
pub fn write_png(input: &ChartInput, config: &RenderConfig, path: &Path) -> Result<()> {
    render_png(input, config).save(path)?;
    Ok(())
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn fill_circle(img: &mut RgbImage, center: DVec2, radius: i64, color: Rgb<u8>) {
    let cx = center.x.round() as i64;
    let cy = center.y.round() as i64;
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Bresenham line between two pixel positions.
fn draw_line(img: &mut RgbImage, from: DVec2, to: DVec2, color: Rgb<u8>) {
    let (mut x0, mut y0) = (from.x.round() as i64, from.y.round() as i64);
    let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
