//! Falling-sand simulation engine for ElementSim
//!
//! - `world`: grid store, frame dispatcher and the material rules
//! - `tools`: paint tools that write materials into the grid
//! - `simulation`: material and cell data (re-exported from elementsim-simulation)

pub mod error;
pub mod tools;
pub mod world;

// Re-export from elementsim-simulation so front-ends only need this crate
pub mod simulation {
    pub use elementsim_simulation::*;
}

pub use error::SimulationError;
