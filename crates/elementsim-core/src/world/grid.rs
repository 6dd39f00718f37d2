//! Fixed-size cell storage

use glam::IVec2;

use crate::error::SimulationError;
use crate::simulation::{Cell, Color, Material};

/// Row-major W×H array of cells.
///
/// `in_bounds` is the only validity test. Accessors expect the caller to have
/// checked bounds already and panic instead of aliasing another cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a grid filled with empty cells
    pub fn new(width: u32, height: u32) -> Result<Self, SimulationError> {
        let invalid = SimulationError::InvalidDimensions { width, height };
        let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(invalid);
        };
        if w == 0 || h == 0 {
            return Err(invalid);
        }
        let len = (width as usize).checked_mul(height as usize).ok_or(invalid)?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| SimulationError::Allocation { cells: len, source })?;
        cells.resize(len, Cell::EMPTY);

        Ok(Self {
            width: w,
            height: h,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        (y * self.width + x) as usize
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        *self.get_mut(x, y) = cell;
    }

    /// Exchange the whole state of two cells
    #[inline]
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let a = self.index(x1, y1);
        let b = self.index(x2, y2);
        self.cells.swap(a, b);
    }

    /// Reset a cell to the canonical empty state
    pub fn clear(&mut self, x: i32, y: i32) {
        self.set(x, y, Cell::EMPTY);
    }

    /// Set the tick marker. Returns false if the cell was already advanced
    /// this tick.
    #[inline]
    pub fn claim(&mut self, x: i32, y: i32) -> bool {
        let cell = self.get_mut(x, y);
        if cell.updated {
            return false;
        }
        cell.updated = true;
        true
    }

    pub fn reset_update_flags(&mut self) {
        for cell in &mut self.cells {
            cell.updated = false;
        }
    }

    /// Set every cell back to empty
    pub fn reset(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    fn position(&self, index: usize) -> IVec2 {
        let index = index as i32;
        IVec2::new(index % self.width, index / self.width)
    }

    /// Read-only `(position, color)` pairs for renderers
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.position(i), cell.color()))
    }

    /// Every cell with its position
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.position(i), cell))
    }

    pub fn count_non_empty(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn count_material(&self, material: Material) -> usize {
        self.cells.iter().filter(|c| c.material == material).count()
    }

    /// Cells the frame dispatcher would advance
    pub fn count_active(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !c.material.is_static())
            .count()
    }
}
