//! Error type for simulation setup

use std::collections::TryReserveError;

use thiserror::Error;

/// Failures surfaced while creating a simulation. Stepping never fails.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("failed to allocate grid of {cells} cells: {source}")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },
}
