//! Headless application: runs a scenario for a number of ticks, optionally
//! paced in real time, and writes a PNG snapshot

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use web_time::Instant;

use elementsim_core::world::{TickStats, World};

use crate::config::SimConfig;
use crate::render::PixelRenderer;
use crate::scenario::ScenarioDefinition;

/// Catch-up limit per frame so a stall does not trigger a burst of ticks
const MAX_STEPS_PER_FRAME: u32 = 2;

/// Fixed-timestep accumulator
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    last_update: Instant,
}

impl FixedTimestep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f32,
            accumulator: 0.0,
            last_update: Instant::now(),
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Ticks due since the previous call
    pub fn steps_due(&mut self) -> u32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;
        self.advance(dt)
    }

    /// Add `dt` seconds and return how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }

        // Clamp accumulator to prevent runaway
        if self.accumulator > self.step * 2.0 {
            self.accumulator = self.step;
        }

        steps
    }
}

/// Headless driver state
pub struct App {
    config: SimConfig,
    world: World,
    scenario: ScenarioDefinition,
    renderer: PixelRenderer,
    /// Counters since the last stats log line
    stats: TickStats,
}

impl App {
    /// Build the world from `config` and load `scenario`, or the built-in demo
    /// scene when none is given
    pub fn new(config: SimConfig, scenario: Option<ScenarioDefinition>) -> Result<Self> {
        let seed = config.simulation.seed.unwrap_or_else(rand::random);
        log::info!("Using seed {seed}");

        let world = World::with_seed(config.grid.width, config.grid.height, seed)
            .context("Failed to create world")?;
        let scenario = scenario
            .unwrap_or_else(|| ScenarioDefinition::demo(config.grid.width, config.grid.height));
        log::info!(
            "Loaded scenario '{}' ({} paint commands)",
            scenario.name,
            scenario.paints.len()
        );

        let renderer = PixelRenderer::new(
            config.grid.width,
            config.grid.height,
            config.render.block_size,
        );

        Ok(Self {
            config,
            world,
            scenario,
            renderer,
            stats: TickStats::default(),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Apply this tick's paint commands, then advance the simulation once
    pub fn tick(&mut self) {
        let tick = self.world.tick();
        self.scenario.apply_tick(&mut self.world, tick);
        self.world.step_with_stats(&mut self.stats);

        let interval = self.config.simulation.log_interval;
        if interval > 0 && self.world.tick() % interval == 0 {
            log::info!(
                "Tick {} | {} cells | {} updated, {} moved, {} reactions",
                self.world.tick(),
                self.world.grid().count_non_empty(),
                self.stats.cells_updated,
                self.stats.cells_moved,
                self.stats.reactions
            );
            self.stats.reset();
        }
    }

    /// Run `ticks` ticks, back-to-back or paced to the configured tick rate
    pub fn run(&mut self, ticks: u64, realtime: bool) {
        log::info!(
            "Running {ticks} ticks{}",
            if realtime { " in real time" } else { "" }
        );
        let target = self.world.tick() + ticks;

        if !realtime {
            while self.world.tick() < target {
                self.tick();
            }
            return;
        }

        let mut timestep = FixedTimestep::new(self.config.simulation.ticks_per_second);
        let idle = Duration::from_secs_f32(timestep.step() / 4.0);
        while self.world.tick() < target {
            let due = timestep.steps_due();
            for _ in 0..due {
                if self.world.tick() >= target {
                    break;
                }
                self.tick();
            }
            if due == 0 {
                std::thread::sleep(idle);
            }
        }
    }

    /// Render the current grid and save it as PNG
    pub fn save_snapshot(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.renderer.render(self.world.grid());
        self.renderer.save(path)
    }

    pub fn shutdown(self) {
        self.world.shutdown();
    }
}
