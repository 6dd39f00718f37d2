//! World management - grid storage, frame dispatch and the material rules

mod ca_update;
mod chemistry_system;
mod grid;
pub mod neighbor_queries;
pub mod rng_trait;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use ca_update::CellularAutomataUpdater;
pub use chemistry_system::{ChemistrySystem, Contact};
pub use grid::Grid;
pub use neighbor_queries::NeighborQueries;
pub use rng_trait::SimRng;
pub use stats::{NoopStats, SimStats, TickStats};
pub use world::World;
