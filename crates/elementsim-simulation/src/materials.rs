//! Material definitions and per-material constants

use serde::{Deserialize, Serialize};

/// RGBA color of a cell
pub type Color = [u8; 4];

/// Universal physics constants shared by the material rules
pub mod physics {
    /// Maximum fall speed in cells per tick
    pub const MAX_VELOCITY: f32 = 3.0;
    /// Vertical velocity gained every tick
    pub const GRAVITY_ACCELERATION: f32 = 0.1;
    /// Horizontal velocity lost per step while sliding on a solid
    pub const FRICTION: f32 = 0.5;

    /// Ticks a fresh steam particle lives before condensing
    pub const STEAM_BASE_HEALTH: i32 = 300;
    /// Ticks a fresh smoke particle lives before vanishing
    pub const SMOKE_BASE_HEALTH: i32 = 400;
    /// Health of fire placed by the paint tool
    pub const PAINTED_FIRE_HEALTH: i32 = 5;

    /// 1 in N chance that a touching liquid puts a fire out
    pub const EXTINGUISH_CHANCE: u32 = 20;
    /// 1 in N chance per tick that fire gives off smoke
    pub const SMOKE_CHANCE: u32 = 30;
}

/// Canonical material colors
pub mod colors {
    use super::Color;

    pub const EMPTY: Color = [40, 40, 41, 255];
    pub const OIL: Color = [162, 109, 63, 255];
    pub const WATER: Color = [51, 136, 222, 255];
    pub const ACID: Color = [90, 181, 82, 255];
    pub const LAVA: Color = [222, 93, 58, 255];
    pub const SAND: Color = [216, 200, 90, 255];
    pub const GUNPOWDER: Color = [121, 117, 117, 255];
    pub const WOOD: Color = [110, 76, 48, 255];
    pub const STONE: Color = [190, 190, 190, 255];
    pub const TOXIC_GAS: Color = [157, 230, 78, 255];
    pub const STEAM: Color = [204, 209, 229, 255];
    pub const SMOKE: Color = [17, 14, 12, 255];
    pub const FIRE: Color = [233, 133, 55, 255];
}

/// Every substance a cell can hold.
///
/// The declaration order is load-bearing: among liquids a higher ordinal
/// means a denser liquid (oil < water < acid < lava).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    Empty,
    Oil,
    Water,
    Acid,
    Lava,
    Sand,
    Gunpowder,
    Wood,
    Stone,
    ToxicGas,
    Steam,
    Smoke,
    Fire,
}

/// Coarse behavioral category of a material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Empty,
    Liquid,
    Solid,
    Gas,
}

/// How a material reacts when fire or lava touches it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flammability {
    /// Nothing happens
    Immune,
    /// A liquid that can put a fire out
    Extinguishes,
    /// A liquid that puts a fire out and boils to steam doing so
    ExtinguishesToSteam,
    /// Catches fire with a 1 in `one_in` chance per contact
    Ignites { one_in: u32 },
}

/// Flow parameters of a liquid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiquidProfile {
    /// Maximum cells travelled sideways in one tick
    pub spread: i32,
}

/// Motion parameters of a granular solid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GranularProfile {
    /// Divides the fall speed when converting it into a sideways slide
    pub spread: f32,
    /// 1 in N chance to knock resting neighbors into free fall
    pub inertial_resistance: u32,
    /// 1 in N chance to slip diagonally while at rest
    pub slip_chance: u32,
}

impl Material {
    /// All materials in ordinal order
    pub const ALL: [Material; 13] = [
        Material::Empty,
        Material::Oil,
        Material::Water,
        Material::Acid,
        Material::Lava,
        Material::Sand,
        Material::Gunpowder,
        Material::Wood,
        Material::Stone,
        Material::ToxicGas,
        Material::Steam,
        Material::Smoke,
        Material::Fire,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "empty",
            Material::Oil => "oil",
            Material::Water => "water",
            Material::Acid => "acid",
            Material::Lava => "lava",
            Material::Sand => "sand",
            Material::Gunpowder => "gunpowder",
            Material::Wood => "wood",
            Material::Stone => "stone",
            Material::ToxicGas => "toxic_gas",
            Material::Steam => "steam",
            Material::Smoke => "smoke",
            Material::Fire => "fire",
        }
    }

    /// Look a material up by its snake_case name
    pub fn from_name(name: &str) -> Option<Material> {
        Material::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Fire counts as a solid: nothing falls, flows or rises through it.
    pub fn phase(self) -> Phase {
        match self {
            Material::Empty => Phase::Empty,
            Material::Oil | Material::Water | Material::Acid | Material::Lava => Phase::Liquid,
            Material::Sand
            | Material::Gunpowder
            | Material::Wood
            | Material::Stone
            | Material::Fire => Phase::Solid,
            Material::ToxicGas | Material::Steam | Material::Smoke => Phase::Gas,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Material::Empty => colors::EMPTY,
            Material::Oil => colors::OIL,
            Material::Water => colors::WATER,
            Material::Acid => colors::ACID,
            Material::Lava => colors::LAVA,
            Material::Sand => colors::SAND,
            Material::Gunpowder => colors::GUNPOWDER,
            Material::Wood => colors::WOOD,
            Material::Stone => colors::STONE,
            Material::ToxicGas => colors::TOXIC_GAS,
            Material::Steam => colors::STEAM,
            Material::Smoke => colors::SMOKE,
            Material::Fire => colors::FIRE,
        }
    }

    pub fn flammability(self) -> Flammability {
        match self {
            Material::Oil => Flammability::Ignites { one_in: 10 },
            Material::Water => Flammability::ExtinguishesToSteam,
            Material::Acid => Flammability::Extinguishes,
            Material::Gunpowder => Flammability::Ignites { one_in: 12 },
            Material::Wood => Flammability::Ignites { one_in: 60 },
            Material::ToxicGas => Flammability::Ignites { one_in: 12 },
            Material::Empty
            | Material::Lava
            | Material::Sand
            | Material::Stone
            | Material::Steam
            | Material::Smoke
            | Material::Fire => Flammability::Immune,
        }
    }

    /// Ticks a fire started on this material burns for
    pub fn base_fire_health(self) -> i32 {
        match self {
            Material::Oil => 50,
            Material::Gunpowder => 20,
            Material::Wood => 200,
            Material::ToxicGas => 50,
            _ => 0,
        }
    }

    /// 1 in N chance for acid to eat through this material; `None` means immune
    pub fn corrosion_resistance(self) -> Option<u32> {
        match self {
            Material::Sand | Material::Gunpowder => Some(50),
            Material::Wood => Some(30),
            Material::Stone => Some(60),
            _ => None,
        }
    }

    pub fn liquid_profile(self) -> Option<LiquidProfile> {
        let spread = match self {
            Material::Oil | Material::Water => 4,
            Material::Acid => 2,
            Material::Lava => 1,
            _ => return None,
        };
        Some(LiquidProfile { spread })
    }

    pub fn granular_profile(self) -> Option<GranularProfile> {
        match self {
            Material::Sand => Some(GranularProfile {
                spread: 1.5,
                inertial_resistance: 2,
                slip_chance: 1000,
            }),
            Material::Gunpowder => Some(GranularProfile {
                spread: 2.0,
                inertial_resistance: 4,
                slip_chance: 3000,
            }),
            _ => None,
        }
    }

    /// True if `self` sinks through `other`. Only liquids have a density.
    pub fn is_denser_than(self, other: Material) -> bool {
        self.phase() == Phase::Liquid && other.phase() == Phase::Liquid && self > other
    }

    /// Materials the frame dispatcher never advances
    pub fn is_static(self) -> bool {
        matches!(self, Material::Empty | Material::Wood | Material::Stone)
    }
}
