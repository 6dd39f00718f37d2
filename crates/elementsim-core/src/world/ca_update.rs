//! Cellular automata update logic - material movement physics
//!
//! Every rule claims the tick marker of its cell first and bails out if the
//! cell was already advanced this tick. Movement rules return the position the
//! particle ended up at so reactions can run there.

use glam::IVec2;

use super::neighbor_queries::{BELOW_AND_SIDES, NeighborQueries};
use super::{Grid, SimRng, SimStats};
use crate::simulation::physics::{FRICTION, GRAVITY_ACCELERATION, MAX_VELOCITY};
use crate::simulation::{Payload, Phase};

/// Cellular automata updater - handles material movement physics
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Update a liquid (falls, displaces lighter liquids, spreads sideways)
    pub fn update_liquid<R: SimRng>(
        grid: &mut Grid,
        x: i32,
        y: i32,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> Option<IVec2> {
        let profile = grid.get(x, y).material.liquid_profile()?;
        if !grid.claim(x, y) {
            return None;
        }
        stats.record_cell_updated();

        let dir = rng.random_side();
        let (mut x, mut y) = (x, y);

        // Fall straight down
        let mut fell = false;
        Self::apply_gravity(grid, x, y);
        let mut step = 0;
        while (step as f32) < grid.get(x, y).velocity.y.round() + 1.0 {
            if Self::liquid_can_enter(grid, x, y, x, y + 1) {
                // Sinking through a lighter liquid costs all momentum
                if !grid.get(x, y + 1).is_empty() {
                    grid.get_mut(x, y).velocity.y = 0.0;
                }
                Self::move_cell(grid, x, y, x, y + 1, stats);
                y += 1;
                fell = true;
            } else {
                grid.get_mut(x, y).velocity.y = 0.0;
                break;
            }
            step += 1;
        }

        if !fell {
            if Self::liquid_can_enter(grid, x, y, x + dir, y + 1) {
                Self::move_cell(grid, x, y, x + dir, y + 1, stats);
                x += dir;
                y += 1;
            } else if Self::liquid_can_enter(grid, x, y, x - dir, y + 1) {
                Self::move_cell(grid, x, y, x - dir, y + 1, stats);
                x -= dir;
                y += 1;
            } else if Self::liquid_can_enter(grid, x, y, x + dir, y) {
                x = Self::spread_sideways(grid, x, y, dir, profile.spread, stats);
            } else if Self::liquid_can_enter(grid, x, y, x - dir, y) {
                x = Self::spread_sideways(grid, x, y, -dir, profile.spread, stats);
            }
        }

        Some(IVec2::new(x, y))
    }

    /// Update a granular solid (sand, gunpowder): horizontal momentum, falling,
    /// slipping and free-fall propagation
    pub fn update_granular<R: SimRng>(
        grid: &mut Grid,
        x: i32,
        y: i32,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> Option<IVec2> {
        let profile = grid.get(x, y).material.granular_profile()?;
        if !grid.claim(x, y) {
            return None;
        }
        stats.record_cell_updated();

        let dir = rng.random_side();
        let start = IVec2::new(x, y);
        let (mut x, mut y) = (x, y);

        if let Payload::Granular {
            previous_position, ..
        } = &mut grid.get_mut(x, y).payload
        {
            *previous_position = start;
        }

        // Horizontal momentum
        let vx = grid.get(x, y).velocity.x;
        let sign = if vx > 0.0 {
            1
        } else if vx < 0.0 {
            -1
        } else {
            0
        };
        let mut step = 0;
        while (step as f32) < grid.get(x, y).velocity.x.round().abs() {
            if Self::solid_can_enter(grid, x + sign, y) {
                Self::move_cell(grid, x, y, x + sign, y, stats);
                x += sign;

                if grid.in_bounds(x, y + 1) && grid.get(x, y + 1).phase() == Phase::Solid {
                    let velocity = &mut grid.get_mut(x, y).velocity;
                    velocity.x = (velocity.x.abs() - FRICTION).max(0.0) * velocity.x.signum();
                }
            } else {
                grid.get_mut(x, y).velocity.x = 0.0;
            }
            step += 1;
        }

        // Fall straight down
        let mut fell = false;
        Self::apply_gravity(grid, x, y);
        let mut step = 0;
        while (step as f32) < grid.get(x, y).velocity.y.round() + 1.0 {
            if Self::solid_can_enter(grid, x, y + 1) {
                Self::move_cell(grid, x, y, x, y + 1, stats);
                y += 1;
                fell = true;
            } else {
                // Landing turns the fall into a sideways slide
                let velocity = &mut grid.get_mut(x, y).velocity;
                velocity.x = velocity.y * dir as f32 / profile.spread;
                velocity.y = 0.0;
                break;
            }
            step += 1;
        }

        let free_fall = grid.get(x, y).free_fall().unwrap_or(false);
        if !fell && (free_fall || rng.one_in(profile.slip_chance)) {
            for side in [dir, -dir] {
                if Self::solid_can_enter(grid, x + side, y + 1) {
                    Self::move_cell(grid, x, y, x + side, y + 1, stats);
                    x += side;
                    y += 1;
                    break;
                }
            }
        }

        let pos = IVec2::new(x, y);
        let mut moved = false;
        if let Payload::Granular {
            previous_position,
            free_fall,
        } = &mut grid.get_mut(x, y).payload
        {
            moved = *previous_position != pos;
            *free_fall = moved;
        }

        // A moving particle can shake resting neighbors loose
        if moved {
            let change = rng.one_in(profile.inertial_resistance);
            NeighborQueries::for_each(grid, pos, &BELOW_AND_SIDES, |grid, n| {
                if let Payload::Granular { free_fall, .. } = &mut grid.get_mut(n.x, n.y).payload {
                    if !*free_fall {
                        *free_fall = change;
                    }
                }
            });
        }

        Some(pos)
    }

    /// Update a non-decaying gas
    pub fn update_gas<R: SimRng>(
        grid: &mut Grid,
        x: i32,
        y: i32,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> Option<IVec2> {
        if !grid.claim(x, y) {
            return None;
        }
        stats.record_cell_updated();
        Some(Self::diffuse_gas(grid, x, y, stats, rng))
    }

    /// Gas motion without claiming the cell (callers claim first)
    ///
    /// Rising straight up and diagonally can both happen in the same tick.
    pub fn diffuse_gas<R: SimRng>(
        grid: &mut Grid,
        x: i32,
        y: i32,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> IVec2 {
        let dir = rng.random_side();
        let (mut x, mut y) = (x, y);
        let mut rose = false;

        if Self::gas_can_enter(grid, x, y - 1) {
            Self::move_cell(grid, x, y, x, y - 1, stats);
            y -= 1;
            rose = true;
        }

        if Self::gas_can_enter(grid, x + dir, y - 1) {
            Self::move_cell(grid, x, y, x + dir, y - 1, stats);
            x += dir;
            y -= 1;
            rose = true;
        } else if Self::gas_can_enter(grid, x - dir, y - 1) {
            Self::move_cell(grid, x, y, x - dir, y - 1, stats);
            x -= dir;
            y -= 1;
            rose = true;
        }

        if !rose {
            // Both sides are tried from the starting slot. If the first swap
            // went through, the second one shuffles whatever took our place.
            let origin = x;
            if Self::gas_can_enter(grid, origin + dir, y) {
                Self::move_cell(grid, origin, y, origin + dir, y, stats);
                x = origin + dir;
            }
            if Self::gas_can_enter(grid, origin - dir, y) {
                Self::move_cell(grid, origin, y, origin - dir, y, stats);
                if x == origin {
                    x = origin - dir;
                }
            }
        }

        IVec2::new(x, y)
    }

    fn apply_gravity(grid: &mut Grid, x: i32, y: i32) {
        let velocity = &mut grid.get_mut(x, y).velocity;
        velocity.y = (velocity.y + GRAVITY_ACCELERATION).min(MAX_VELOCITY);
    }

    /// Liquids move into empty cells or sink through lighter liquids
    fn liquid_can_enter(grid: &Grid, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        if !grid.in_bounds(to_x, to_y) {
            return false;
        }
        let target = grid.get(to_x, to_y);
        target.phase() == Phase::Empty
            || grid.get(from_x, from_y).material.is_denser_than(target.material)
    }

    /// Granular solids push through anything that is not solid
    fn solid_can_enter(grid: &Grid, x: i32, y: i32) -> bool {
        grid.in_bounds(x, y) && grid.get(x, y).phase() != Phase::Solid
    }

    /// Gases rise through empty space and liquids
    fn gas_can_enter(grid: &Grid, x: i32, y: i32) -> bool {
        grid.in_bounds(x, y) && matches!(grid.get(x, y).phase(), Phase::Empty | Phase::Liquid)
    }

    /// Move one step toward `side`, then keep going up to `spread` cells total
    /// while the way stays open. Returns the new x.
    fn spread_sideways(
        grid: &mut Grid,
        mut x: i32,
        y: i32,
        side: i32,
        spread: i32,
        stats: &mut dyn SimStats,
    ) -> i32 {
        Self::move_cell(grid, x, y, x + side, y, stats);
        x += side;

        for _ in 1..spread {
            if !Self::liquid_can_enter(grid, x, y, x + side, y) {
                break;
            }
            Self::move_cell(grid, x, y, x + side, y, stats);
            x += side;
        }
        x
    }

    fn move_cell(
        grid: &mut Grid,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        stats: &mut dyn SimStats,
    ) {
        grid.swap(from_x, from_y, to_x, to_y);
        stats.record_cell_moved();
    }
}
