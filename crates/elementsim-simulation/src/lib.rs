//! Material data and cell state for ElementSim
//!
//! This crate provides the foundational data types for the simulation:
//! - Material definitions and per-material constants (Material, Phase, Flammability)
//! - Movement profiles (LiquidProfile, GranularProfile)
//! - Cell state with its category payload (Cell, Payload, Identity)

mod cell;
mod materials;

pub use cell::{Cell, Identity, Payload};
pub use materials::{
    Color, Flammability, GranularProfile, LiquidProfile, Material, Phase, colors, physics,
};
