//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// Rules report through this so callers can instrument a tick without the
/// engine keeping counters of its own.
pub trait SimStats {
    /// A rule claimed a cell and advanced it
    fn record_cell_updated(&mut self);

    /// A cell was swapped into a new position
    fn record_cell_moved(&mut self);

    /// A cell changed material (ignition, corrosion, decay, ...)
    fn record_reaction(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_cell_updated(&mut self) {}
    fn record_cell_moved(&mut self) {}
    fn record_reaction(&mut self) {}
}

/// Counters for one or more ticks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub cells_updated: u64,
    pub cells_moved: u64,
    pub reactions: u64,
}

impl TickStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl SimStats for TickStats {
    fn record_cell_updated(&mut self) {
        self.cells_updated += 1;
    }

    fn record_cell_moved(&mut self) {
        self.cells_moved += 1;
    }

    fn record_reaction(&mut self) {
        self.reactions += 1;
    }
}
