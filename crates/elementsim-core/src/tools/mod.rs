//! Paint tools that write materials into the grid

mod erase;
mod pen;

pub use erase::EraseTool;
pub use pen::PenTool;

use glam::IVec2;

use crate::simulation::{Cell, Material, Payload};
use crate::world::Grid;

/// Largest accepted brush radius; larger requests are clamped
pub const MAX_BRUSH_RADIUS: u32 = 2;

/// Trait for drawing tools
pub trait Tool {
    /// Tool display name
    fn name(&self) -> &str;

    /// Apply tool at position with given brush size. Returns the number of
    /// cells written.
    fn apply(&self, grid: &mut Grid, x: i32, y: i32, brush_size: u32) -> usize;
}

/// Write `material` around `(x, y)`.
///
/// Radius 0 writes exactly one cell. Larger radii fill the square of side
/// `2 * radius + 1`, skipping occupied cells unless `material` is empty.
/// Cells outside the grid are ignored.
pub fn paint(grid: &mut Grid, material: Material, radius: u32, x: i32, y: i32) -> usize {
    let radius = if radius > MAX_BRUSH_RADIUS {
        log::debug!("Brush radius {radius} clamped to {MAX_BRUSH_RADIUS}");
        MAX_BRUSH_RADIUS
    } else {
        radius
    };

    let origin = IVec2::new(x, y);
    let painted = brush_cell(material, origin);

    let written = if radius == 0 {
        if grid.in_bounds(x, y) {
            grid.set(x, y, painted);
            1
        } else {
            0
        }
    } else {
        let erasing = material == Material::Empty;
        let r = radius as i32;
        let mut written = 0;
        for dy in -r..=r {
            for dx in -r..=r {
                let (px, py) = (x + dx, y + dy);
                if !grid.in_bounds(px, py) {
                    continue;
                }
                if erasing || grid.get(px, py).is_empty() {
                    grid.set(px, py, painted);
                    written += 1;
                }
            }
        }
        written
    };

    log::trace!(
        "Painted {written} {} cells at ({x}, {y}), radius {radius}",
        material.name()
    );
    written
}

/// At-rest cell of `material` as placed by a brush centered on `origin`
fn brush_cell(material: Material, origin: IVec2) -> Cell {
    let mut cell = Cell::new(material);
    if let Payload::Granular {
        previous_position, ..
    } = &mut cell.payload
    {
        *previous_position = origin;
    }
    cell
}
