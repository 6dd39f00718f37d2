//! World - owns the grid and the RNG and advances the simulation one tick at a time

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::{CellularAutomataUpdater, ChemistrySystem, Grid, NoopStats, SimRng, SimStats};
use crate::error::SimulationError;
use crate::simulation::Material;
use crate::tools::{self, Tool};

/// Explicit simulation context
///
/// All mutation goes through `&mut self`; the RNG is the single source of
/// randomness, so a fixed seed and a fixed sequence of paints reproduce the
/// same grid.
pub struct World<R: SimRng = Xoshiro256StarStar> {
    grid: Grid,
    rng: R,
    /// Column scan direction of the next tick
    left_to_right: bool,
    tick: u64,
}

impl World<Xoshiro256StarStar> {
    /// Create a world driven by a seeded xoshiro engine
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, SimulationError> {
        Self::new(width, height, Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<R: SimRng> World<R> {
    pub fn new(width: u32, height: u32, rng: R) -> Result<Self, SimulationError> {
        let grid = Grid::new(width, height)?;
        log::info!("Created {width}x{height} world");

        Ok(Self {
            grid,
            rng,
            left_to_right: true,
            tick: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of completed ticks
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        self.step_with_stats(&mut NoopStats);
    }

    /// Advance one tick, reporting rule activity to `stats`.
    ///
    /// Columns are scanned in alternating direction each tick, rows bottom to
    /// top. Markers are cleared in a separate pass afterwards.
    pub fn step_with_stats(&mut self, stats: &mut dyn SimStats) {
        let width = self.grid.width();
        let height = self.grid.height();

        for i in 0..width {
            let x = if self.left_to_right { i } else { width - 1 - i };
            for y in (0..height).rev() {
                self.update_cell(x, y, stats);
            }
        }

        self.grid.reset_update_flags();
        self.left_to_right = !self.left_to_right;
        self.tick += 1;
    }

    fn update_cell(&mut self, x: i32, y: i32, stats: &mut dyn SimStats) {
        let grid = &mut self.grid;
        let rng = &mut self.rng;

        match grid.get(x, y).material {
            Material::Empty | Material::Wood | Material::Stone => {}
            Material::Oil => {
                CellularAutomataUpdater::update_liquid(grid, x, y, stats, rng);
            }
            Material::Water => {
                if let Some(pos) = CellularAutomataUpdater::update_liquid(grid, x, y, stats, rng) {
                    ChemistrySystem::react_water(grid, pos, stats);
                }
            }
            Material::Acid => {
                if let Some(pos) = CellularAutomataUpdater::update_liquid(grid, x, y, stats, rng) {
                    ChemistrySystem::react_acid(grid, pos, stats, rng);
                }
            }
            Material::Lava => {
                if let Some(pos) = CellularAutomataUpdater::update_liquid(grid, x, y, stats, rng) {
                    ChemistrySystem::react_lava(grid, pos, stats, rng);
                }
            }
            Material::Sand | Material::Gunpowder => {
                CellularAutomataUpdater::update_granular(grid, x, y, stats, rng);
            }
            Material::ToxicGas => {
                CellularAutomataUpdater::update_gas(grid, x, y, stats, rng);
            }
            Material::Steam | Material::Smoke => {
                ChemistrySystem::update_decaying_gas(grid, x, y, stats, rng);
            }
            Material::Fire => {
                ChemistrySystem::update_fire(grid, x, y, stats, rng);
            }
        }
    }

    /// Paint `material` with a square brush. Returns the number of cells written.
    pub fn paint(&mut self, material: Material, radius: u32, x: i32, y: i32) -> usize {
        tools::paint(&mut self.grid, material, radius, x, y)
    }

    /// Apply a front-end tool at `(x, y)`
    pub fn apply_tool(&mut self, tool: &dyn Tool, x: i32, y: i32, brush_size: u32) -> usize {
        log::trace!("Applying {} at ({x}, {y})", tool.name());
        tool.apply(&mut self.grid, x, y, brush_size)
    }

    /// Empty every cell and restart the tick counter
    pub fn reset(&mut self) {
        self.grid.reset();
        self.left_to_right = true;
        self.tick = 0;
        log::info!("World reset");
    }

    /// Release the grid
    pub fn shutdown(self) {
        log::info!(
            "Shutting down world after {} ticks ({} cells occupied)",
            self.tick,
            self.grid.count_non_empty()
        );
    }
}
