//! CPU-based pixel renderer for headless PNG snapshots
//!
//! Rasterizes the grid without GPU dependencies, one square block per cell.

use std::path::Path;

use anyhow::{Context, Result};
use glam::IVec2;
use image::{Rgba, RgbaImage};

use elementsim_core::world::Grid;

/// CPU-based renderer that outputs to an RGBA image
pub struct PixelRenderer {
    /// Screen pixels per cell edge
    block_size: u32,
    image: RgbaImage,
}

impl PixelRenderer {
    /// Create a renderer for a grid of `grid_width` x `grid_height` cells
    pub fn new(grid_width: u32, grid_height: u32, block_size: u32) -> Self {
        Self {
            block_size,
            image: RgbaImage::new(grid_width * block_size, grid_height * block_size),
        }
    }

    /// Draw every cell of `grid`. Row 0 is the top of the image.
    pub fn render(&mut self, grid: &Grid) {
        for (pos, color) in grid.cells() {
            self.fill_block(pos, Rgba(color));
        }
    }

    fn fill_block(&mut self, pos: IVec2, color: Rgba<u8>) {
        let left = pos.x as u32 * self.block_size;
        let top = pos.y as u32 * self.block_size;

        for dy in 0..self.block_size {
            for dx in 0..self.block_size {
                let (px, py) = (left + dx, top + dy);
                if px < self.image.width() && py < self.image.height() {
                    self.image.put_pixel(px, py, color);
                }
            }
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Save the last rendered frame as PNG
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image
            .save(path)
            .with_context(|| format!("Failed to save snapshot: {}", path.display()))?;
        log::info!("Saved snapshot to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementsim_core::simulation::{Cell, Material, colors};

    #[test]
    fn test_blocks_use_material_colors() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, Cell::new(Material::Lava));
        let mut renderer = PixelRenderer::new(3, 2, 4);

        renderer.render(&grid);

        let image = renderer.image();
        assert_eq!(image.dimensions(), (12, 8));
        assert_eq!(*image.get_pixel(0, 0), Rgba(colors::EMPTY));
        // Every pixel of the lava block
        for y in 4..8 {
            for x in 8..12 {
                assert_eq!(*image.get_pixel(x, y), Rgba(colors::LAVA));
            }
        }
        assert_eq!(*image.get_pixel(7, 7), Rgba(colors::EMPTY));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, Cell::new(Material::Water));
        let mut renderer = PixelRenderer::new(2, 2, 1);
        renderer.render(&grid);

        renderer.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(*loaded.get_pixel(0, 0), Rgba(colors::WATER));
    }
}
