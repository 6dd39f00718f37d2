//! # ElementSim
//!
//! Headless driver for the falling-sand simulation: layered configuration,
//! scripted paint scenarios, fixed-rate pacing and PNG snapshots.

pub mod app;
pub mod config;
pub mod render;
pub mod scenario;

pub use app::App;
pub use config::SimConfig;
pub use scenario::{PaintCommand, ScenarioDefinition};
