//! Driver configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `elementsim.ron` file (if exists), or the file passed with `--config`
//! 3. Environment variables prefixed with `ELEMENTSIM_`
//!
//! Example environment variable: `ELEMENTSIM_GRID__WIDTH=512`

use std::path::Path;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Main driver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Grid dimensions in cells
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 128,
        }
    }
}

/// Snapshot rasterization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Screen pixels per cell edge
    pub block_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { block_size: 4 }
    }
}

/// Tick pacing and reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target tick rate in `--realtime` mode
    pub ticks_per_second: u32,
    /// RNG seed; a random one is drawn and logged when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Ticks between stats log lines (0 disables them)
    pub log_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            seed: None,
            log_interval: 60,
        }
    }
}

impl SimConfig {
    /// Load configuration from `elementsim.ron` in the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with layered priority. An explicit `path` must exist;
    /// the default `elementsim.ron` is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("elementsim")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("grid.width", 256_i64)?
            .set_default("grid.height", 128_i64)?
            .set_default("render.block_size", 4_i64)?
            .set_default("simulation.ticks_per_second", 60_i64)?
            .set_default("simulation.log_interval", 60_i64)?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (ELEMENTSIM_GRID__WIDTH, etc.)
            .add_source(Environment::with_prefix("ELEMENTSIM").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the driver cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            bail!(
                "Grid must be at least 1x1, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }
        if self.render.block_size == 0 {
            bail!("render.block_size must be at least 1");
        }
        if self.simulation.ticks_per_second == 0 {
            bail!("simulation.ticks_per_second must be at least 1");
        }
        Ok(())
    }
}
