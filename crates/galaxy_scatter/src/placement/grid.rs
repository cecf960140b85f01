//! Bucket grid answering "is this candidate far enough from every accepted point".
use std::collections::HashMap;

use glam::DVec2;

/// Upper bound on cells per axis; keeps cell coordinates bounded for tiny separations.
const MAX_CELLS_PER_AXIS: usize = 1024;

/// Uniform grid over `[-half_extent, half_extent]²` whose cells are at least
/// `min_distance` wide, so every neighbour closer than `min_distance` lives in
/// the 3×3 block around a candidate's cell. Only occupied cells are stored.
pub(crate) struct SeparationGrid {
    min_distance_squared: f64,
    cell_size: f64,
    half_extent: f64,
    cells_per_axis: usize,
    cells: HashMap<(usize, usize), Vec<DVec2>>,
}

impl SeparationGrid {
    pub fn new(min_distance: f64, half_extent: f64) -> Self {
        debug_assert!(min_distance > 0.0);
        debug_assert!(half_extent > 0.0);

        let extent = 2.0 * half_extent;
        let cell_size = min_distance.max(extent / MAX_CELLS_PER_AXIS as f64);
        let cells_per_axis = ((extent / cell_size).ceil() as usize).clamp(1, MAX_CELLS_PER_AXIS);

        Self {
            min_distance_squared: min_distance * min_distance,
            cell_size,
            half_extent,
            cells_per_axis,
            cells: HashMap::new(),
        }
    }

    #[inline]
    fn point_to_cell(&self, point: DVec2) -> (usize, usize) {
        let max = self.cells_per_axis as isize - 1;
        let x = (((point.x + self.half_extent) / self.cell_size).floor() as isize).clamp(0, max);
        let y = (((point.y + self.half_extent) / self.cell_size).floor() as isize).clamp(0, max);
        (x as usize, y as usize)
    }

    /// Returns `true` when `point` is at least `min_distance` from every inserted point.
    pub fn is_separated(&self, point: DVec2) -> bool {
        let (cx, cy) = self.point_to_cell(point);
        let start_x = cx.saturating_sub(1);
        let end_x = (cx + 2).min(self.cells_per_axis);
        let start_y = cy.saturating_sub(1);
        let end_y = (cy + 2).min(self.cells_per_axis);

        for y in start_y..end_y {
            for x in start_x..end_x {
                let Some(bucket) = self.cells.get(&(x, y)) else {
                    continue;
                };
                if bucket
                    .iter()
                    .any(|existing| existing.distance_squared(point) < self.min_distance_squared)
                {
                    return false;
                }
            }
        }

        true
    }

    pub fn insert(&mut self, point: DVec2) {
        let cell = self.point_to_cell(point);
        self.cells.entry(cell).or_default().push(point);
    }

    #[cfg(test)]
    pub fn cells_per_axis(&self) -> usize {
        self.cells_per_axis
    }

    #[cfg(test)]
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
