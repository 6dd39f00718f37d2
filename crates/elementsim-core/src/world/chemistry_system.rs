//! Chemistry system for fire, burning, ignition, and chemical reactions

use glam::IVec2;

use super::ca_update::CellularAutomataUpdater;
use super::neighbor_queries::{BELOW_AND_SIDES, NeighborQueries, ORTHOGONAL, SURROUNDING};
use super::{Grid, SimRng, SimStats};
use crate::simulation::physics::{EXTINGUISH_CHANCE, SMOKE_CHANCE};
use crate::simulation::{Cell, Flammability, Material, Payload};

/// What is touching a potentially flammable neighbor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// A fire; liquids in contact may put it out
    Flame,
    /// Lava; ignites fuel but is never put out
    Heat,
}

/// Handles chemistry simulation: fire, burning, ignition, and reactions
pub struct ChemistrySystem;

impl ChemistrySystem {
    /// Water touching lava boils to steam and petrifies that lava
    pub fn react_water(grid: &mut Grid, pos: IVec2, stats: &mut dyn SimStats) -> bool {
        let boiled = NeighborQueries::any(grid, pos, &ORTHOGONAL, |grid, n| {
            if grid.get(n.x, n.y).material != Material::Lava {
                return false;
            }
            grid.set(n.x, n.y, Cell::new(Material::Stone).marked());
            true
        });

        if boiled {
            grid.set(pos.x, pos.y, Cell::new(Material::Steam).marked());
            stats.record_reaction();
        }
        boiled
    }

    /// Acid eats the first neighbor below or beside it that fails its
    /// corrosion roll and turns into toxic gas doing so
    pub fn react_acid<R: SimRng>(
        grid: &mut Grid,
        pos: IVec2,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        let corroded = NeighborQueries::any(grid, pos, &BELOW_AND_SIDES, |grid, n| {
            let Some(resistance) = grid.get(n.x, n.y).material.corrosion_resistance() else {
                return false;
            };
            if !rng.one_in(resistance) {
                return false;
            }
            grid.clear(n.x, n.y);
            true
        });

        if corroded {
            grid.set(pos.x, pos.y, Cell::new(Material::ToxicGas).marked());
            stats.record_reaction();
        }
        corroded
    }

    /// Lava tries to ignite everything below and beside it
    pub fn react_lava<R: SimRng>(
        grid: &mut Grid,
        pos: IVec2,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        NeighborQueries::for_each(grid, pos, &BELOW_AND_SIDES, |grid, n| {
            Self::flammability_check(grid, n, Contact::Heat, stats, rng);
        });
    }

    /// Update fire cell: burn down, spread, get put out, give off smoke
    pub fn update_fire<R: SimRng>(
        grid: &mut Grid,
        x: i32,
        y: i32,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) {
        if !grid.claim(x, y) {
            return;
        }
        stats.record_cell_updated();

        let cell = grid.get_mut(x, y);
        let Payload::Burning { health, consumed } = &mut cell.payload else {
            return;
        };
        if *health <= 0 {
            grid.set(x, y, Cell::EMPTY.marked());
            stats.record_reaction();
            return;
        }
        *health -= 1;
        let consumed = *consumed;

        let pos = IVec2::new(x, y);
        let extinguished = NeighborQueries::any(grid, pos, &SURROUNDING, |grid, n| {
            Self::flammability_check(grid, n, Contact::Flame, stats, rng)
        });
        if extinguished {
            log::trace!("Fire at ({x}, {y}) put out, restoring {}", consumed.material.name());
            grid.set(x, y, Cell::from_identity(consumed).marked());
            stats.record_reaction();
        }

        if rng.one_in(SMOKE_CHANCE) {
            for smoke_y in [y - 1, y + 1] {
                if grid.in_bounds(x, smoke_y) && grid.get(x, smoke_y).is_empty() {
                    grid.set(x, smoke_y, Cell::new(Material::Smoke).marked());
                    stats.record_reaction();
                    break;
                }
            }
        }
    }

    /// Update steam or smoke: lose one health per tick, then behave as a gas.
    /// Spent steam condenses to water, spent smoke vanishes.
    pub fn update_decaying_gas<R: SimRng>(
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

        let cell = grid.get_mut(x, y);
        let material = cell.material;
        let Payload::Decaying { health } = &mut cell.payload else {
            return None;
        };
        if *health <= 0 {
            let remains = match material {
                Material::Steam => Cell::new(Material::Water),
                _ => Cell::EMPTY,
            };
            grid.set(x, y, remains.marked());
            stats.record_reaction();
            return None;
        }
        *health -= 1;

        Some(CellularAutomataUpdater::diffuse_gas(grid, x, y, stats, rng))
    }

    /// Apply fire or lava contact to the cell at `target`.
    ///
    /// Returns true if the source fire should go out. Ignition never puts the
    /// source out.
    pub fn flammability_check<R: SimRng>(
        grid: &mut Grid,
        target: IVec2,
        contact: Contact,
        stats: &mut dyn SimStats,
        rng: &mut R,
    ) -> bool {
        let fuel = *grid.get(target.x, target.y);
        match fuel.material.flammability() {
            Flammability::Immune => false,
            Flammability::Extinguishes => {
                contact == Contact::Flame && rng.one_in(EXTINGUISH_CHANCE)
            }
            Flammability::ExtinguishesToSteam => {
                if contact == Contact::Flame && rng.one_in(EXTINGUISH_CHANCE) {
                    grid.set(target.x, target.y, Cell::new(Material::Steam).marked());
                    stats.record_reaction();
                    return true;
                }
                false
            }
            Flammability::Ignites { one_in } => {
                if rng.one_in(one_in) {
                    grid.set(target.x, target.y, Cell::ignited(&fuel).marked());
                    stats.record_reaction();
                }
                false
            }
        }
    }
}
