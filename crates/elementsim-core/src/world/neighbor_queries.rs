//! Neighbor offset sets and short-circuiting neighbor scans
//!
//! +y points down, so `(0, 1)` is the cell below.

use glam::IVec2;

use super::Grid;

/// Below, right, left
pub const BELOW_AND_SIDES: [IVec2; 3] = [IVec2::new(0, 1), IVec2::new(1, 0), IVec2::new(-1, 0)];

/// Below, above, right, left
pub const ORTHOGONAL: [IVec2; 4] = [
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
];

/// Orthogonal neighbors first, then diagonals (below-right, above-right,
/// below-left, above-left)
pub const SURROUNDING: [IVec2; 8] = [
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(-1, -1),
];

/// Neighbor scanning utilities - stateless methods over the grid
pub struct NeighborQueries;

impl NeighborQueries {
    /// Run `check` on each in-bounds neighbor in order and stop at the first
    /// that returns true. Out-of-bounds neighbors are skipped without calling
    /// `check`.
    pub fn any<F>(grid: &mut Grid, center: IVec2, offsets: &[IVec2], mut check: F) -> bool
    where
        F: FnMut(&mut Grid, IVec2) -> bool,
    {
        for offset in offsets {
            let pos = center + *offset;
            if grid.in_bounds(pos.x, pos.y) && check(grid, pos) {
                return true;
            }
        }
        false
    }

    /// Run `visit` on every in-bounds neighbor
    pub fn for_each<F>(grid: &mut Grid, center: IVec2, offsets: &[IVec2], mut visit: F)
    where
        F: FnMut(&mut Grid, IVec2),
    {
        for offset in offsets {
            let pos = center + *offset;
            if grid.in_bounds(pos.x, pos.y) {
                visit(grid, pos);
            }
        }
    }
}
