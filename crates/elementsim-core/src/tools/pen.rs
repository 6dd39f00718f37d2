//! Pen tool for drawing materials

use super::{Tool, paint};
use crate::simulation::Material;
use crate::world::Grid;

/// Pen tool that draws a specific material
pub struct PenTool {
    material: Material,
}

impl PenTool {
    /// Create a new pen tool for the given material
    pub fn new(material: Material) -> Self {
        Self { material }
    }

    /// Set the material this pen draws
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn material(&self) -> Material {
        self.material
    }
}

impl Tool for PenTool {
    fn name(&self) -> &str {
        "Pen"
    }

    fn apply(&self, grid: &mut Grid, x: i32, y: i32, brush_size: u32) -> usize {
        paint(grid, self.material, brush_size, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_draws_selected_material() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut pen = PenTool::new(Material::Sand);

        pen.apply(&mut grid, 1, 1, 0);
        pen.set_material(Material::Acid);
        pen.apply(&mut grid, 0, 0, 0);

        assert_eq!(pen.material(), Material::Acid);
        assert_eq!(grid.get(1, 1).material, Material::Sand);
        assert_eq!(grid.get(0, 0).material, Material::Acid);
    }
}
