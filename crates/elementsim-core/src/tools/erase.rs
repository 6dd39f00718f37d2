//! Eraser tool

use super::{Tool, paint};
use crate::simulation::Material;
use crate::world::Grid;

/// Eraser tool that paints empty cells over anything
pub struct EraseTool;

impl Tool for EraseTool {
    fn name(&self) -> &str {
        "Eraser"
    }

    fn apply(&self, grid: &mut Grid, x: i32, y: i32, brush_size: u32) -> usize {
        paint(grid, Material::Empty, brush_size, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Cell;

    #[test]
    fn test_eraser_clears_occupied_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, Cell::new(Material::Stone));
        grid.set(0, 0, Cell::new(Material::Water));

        let written = EraseTool.apply(&mut grid, 1, 1, 1);

        assert_eq!(written, 9);
        assert_eq!(grid.count_non_empty(), 0);
        assert_eq!(EraseTool.name(), "Eraser");
    }
}
