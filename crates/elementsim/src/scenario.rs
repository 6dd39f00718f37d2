//! Scripted paint scenarios and RON file loading

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use elementsim_core::simulation::Material;
use elementsim_core::world::{SimRng, World};

/// One brush stroke, applied right before the tick with index `tick`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintCommand {
    pub tick: u64,
    pub material: Material,
    /// Brush radius, clamped to the largest brush the world accepts
    #[serde(default)]
    pub radius: u32,
    pub x: i32,
    pub y: i32,
}

/// Top-level scenario definition loaded from RON files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    /// Scenario name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Brush strokes in any order
    pub paints: Vec<PaintCommand>,
}

impl ScenarioDefinition {
    /// Load scenario from RON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;

        let scenario = ron::from_str(&content)
            .with_context(|| format!("Failed to parse RON scenario: {}", path.display()))?;

        Ok(scenario)
    }

    /// Save scenario to RON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let ron = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("Failed to serialize scenario to RON")?;

        std::fs::write(path.as_ref(), ron).with_context(|| {
            format!("Failed to write scenario file: {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Built-in scene sized to the grid: a walled basin with a sand pile, a
    /// water pool next to a lava pocket, oil over water, and a burning
    /// wooden beam with a gunpowder fuse
    pub fn demo(width: u32, height: u32) -> Self {
        let w = width as i32;
        let h = height as i32;
        let floor = h - 1;
        let mut paints = Vec::new();
        let mut stroke = |tick: u64, material: Material, radius: u32, x: i32, y: i32| {
            paints.push(PaintCommand {
                tick,
                material,
                radius,
                x,
                y,
            });
        };

        // Stone floor and side walls
        for x in 0..w {
            stroke(0, Material::Stone, 0, x, floor);
        }
        for y in h / 2..floor {
            stroke(0, Material::Stone, 0, 0, y);
            stroke(0, Material::Stone, 0, w - 1, y);
        }

        // Wooden beam across the middle with gunpowder on top
        let beam_y = h / 2;
        for x in w / 4..w / 2 {
            stroke(0, Material::Wood, 0, x, beam_y);
            stroke(0, Material::Gunpowder, 0, x, beam_y - 1);
        }
        stroke(0, Material::Fire, 0, w / 4, beam_y - 2);

        // Falling material poured in over the first ticks
        for tick in 0..20 {
            stroke(tick, Material::Sand, 2, w / 8, 2);
            stroke(tick, Material::Water, 2, 5 * w / 8, 2);
            stroke(tick, Material::Oil, 1, 3 * w / 4, 2);
        }
        stroke(30, Material::Lava, 2, 7 * w / 8, floor - 3);
        stroke(60, Material::Acid, 1, w / 3, 2);

        Self {
            name: "Demo".to_string(),
            description: "Built-in scene exercising every material".to_string(),
            paints,
        }
    }

    /// Apply every stroke scheduled for `tick`. Returns the number of cells
    /// written.
    pub fn apply_tick<R: SimRng>(&self, world: &mut World<R>, tick: u64) -> usize {
        self.paints
            .iter()
            .filter(|paint| paint.tick == tick)
            .map(|paint| world.paint(paint.material, paint.radius, paint.x, paint.y))
            .sum()
    }

    /// Tick of the last scheduled stroke
    pub fn last_tick(&self) -> Option<u64> {
        self.paints.iter().map(|paint| paint.tick).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_serialization() {
        let scenario = ScenarioDefinition {
            name: "Test Scenario".to_string(),
            description: "A test scenario".to_string(),
            paints: vec![PaintCommand {
                tick: 3,
                material: Material::ToxicGas,
                radius: 1,
                x: 4,
                y: 5,
            }],
        };

        let ron = ron::ser::to_string_pretty(&scenario, ron::ser::PrettyConfig::default()).unwrap();
        assert!(ron.contains("Test Scenario"));
        assert!(ron.contains("toxic_gas"));

        let deserialized: ScenarioDefinition = ron::from_str(&ron).unwrap();
        assert_eq!(deserialized.name, scenario.name);
        assert_eq!(deserialized.paints, scenario.paints);
    }

    #[test]
    fn test_radius_defaults_to_single_cell() {
        let scenario: ScenarioDefinition = ron::from_str(
            r#"(name: "one", paints: [(tick: 0, material: sand, x: 1, y: 1)])"#,
        )
        .unwrap();

        assert_eq!(scenario.paints[0].radius, 0);
        assert_eq!(scenario.description, "");
    }

    #[test]
    fn test_apply_tick_only_runs_matching_strokes() {
        let scenario = ScenarioDefinition {
            name: "ticks".to_string(),
            description: String::new(),
            paints: vec![
                PaintCommand {
                    tick: 0,
                    material: Material::Stone,
                    radius: 0,
                    x: 0,
                    y: 0,
                },
                PaintCommand {
                    tick: 2,
                    material: Material::Wood,
                    radius: 0,
                    x: 1,
                    y: 0,
                },
            ],
        };
        let mut world = World::with_seed(4, 4, 1).unwrap();

        assert_eq!(scenario.apply_tick(&mut world, 0), 1);
        assert_eq!(scenario.apply_tick(&mut world, 1), 0);
        assert_eq!(world.grid().count_non_empty(), 1);
        assert_eq!(scenario.last_tick(), Some(2));
    }

    #[test]
    fn test_demo_fits_tiny_grid() {
        let scenario = ScenarioDefinition::demo(4, 4);
        let mut world = World::with_seed(4, 4, 1).unwrap();

        for tick in 0..=scenario.last_tick().unwrap() {
            scenario.apply_tick(&mut world, tick);
            world.step();
        }
    }

    #[test]
    fn test_bundled_scenario_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/hourglass.ron");
        let scenario = ScenarioDefinition::from_file(path).unwrap();

        assert_eq!(scenario.name, "Hourglass");
        assert!(!scenario.paints.is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.ron");
        let scenario = ScenarioDefinition::demo(32, 16);

        scenario.to_file(&path).unwrap();
        let loaded = ScenarioDefinition::from_file(&path).unwrap();

        assert_eq!(loaded.paints, scenario.paints);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ScenarioDefinition::from_file("does/not/exist.ron").unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.ron"));
    }
}
