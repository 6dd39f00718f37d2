//! Per-cell simulation state

use glam::{IVec2, Vec2};

use crate::materials::physics::{PAINTED_FIRE_HEALTH, SMOKE_BASE_HEALTH, STEAM_BASE_HEALTH};
use crate::{Color, Material, Phase};

/// Snapshot of what a fire is consuming, restored when the fire is put out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity {
    pub material: Material,
    pub phase: Phase,
    pub color: Color,
}

impl Identity {
    pub const EMPTY: Identity = Identity {
        material: Material::Empty,
        phase: Phase::Empty,
        color: crate::colors::EMPTY,
    };

    pub fn of(material: Material) -> Self {
        Self {
            material,
            phase: material.phase(),
            color: material.color(),
        }
    }
}

/// Category-specific state, keyed by the cell's material
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payload {
    /// No extra state (empty, liquids, wood, stone, toxic gas)
    Inert,
    /// Sand and gunpowder
    Granular {
        /// Position at the start of the current tick
        previous_position: IVec2,
        /// Set while the particle moves unobstructed
        free_fall: bool,
    },
    /// Steam and smoke
    Decaying { health: i32 },
    /// Fire
    Burning { health: i32, consumed: Identity },
}

impl Payload {
    /// Fresh payload for a newly created cell of `material`
    pub fn for_material(material: Material) -> Self {
        match material {
            Material::Sand | Material::Gunpowder => Payload::Granular {
                previous_position: IVec2::ZERO,
                free_fall: false,
            },
            Material::Steam => Payload::Decaying {
                health: STEAM_BASE_HEALTH,
            },
            Material::Smoke => Payload::Decaying {
                health: SMOKE_BASE_HEALTH,
            },
            Material::Fire => Payload::Burning {
                health: PAINTED_FIRE_HEALTH,
                consumed: Identity::EMPTY,
            },
            Material::Empty
            | Material::Oil
            | Material::Water
            | Material::Acid
            | Material::Lava
            | Material::Wood
            | Material::Stone
            | Material::ToxicGas => Payload::Inert,
        }
    }
}

/// A single cell of the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub material: Material,
    /// Cells per tick; +y points down
    pub velocity: Vec2,
    /// Already advanced during the current tick
    pub updated: bool,
    pub payload: Payload,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        material: Material::Empty,
        velocity: Vec2::ZERO,
        updated: false,
        payload: Payload::Inert,
    };

    /// Canonical at-rest cell of `material`
    pub fn new(material: Material) -> Self {
        Self {
            material,
            velocity: Vec2::ZERO,
            updated: false,
            payload: Payload::for_material(material),
        }
    }

    /// Fire consuming `fuel`, burning for the fuel's base fire health
    pub fn ignited(fuel: &Cell) -> Self {
        Self {
            material: Material::Fire,
            velocity: Vec2::ZERO,
            updated: false,
            payload: Payload::Burning {
                health: fuel.material.base_fire_health(),
                consumed: fuel.identity(),
            },
        }
    }

    /// Rebuild the cell a fire was consuming
    pub fn from_identity(identity: Identity) -> Self {
        Self::new(identity.material)
    }

    /// Mark as already advanced this tick
    pub fn marked(mut self) -> Self {
        self.updated = true;
        self
    }

    pub fn phase(&self) -> Phase {
        self.material.phase()
    }

    pub fn color(&self) -> Color {
        self.material.color()
    }

    pub fn identity(&self) -> Identity {
        Identity::of(self.material)
    }

    pub fn is_empty(&self) -> bool {
        self.material == Material::Empty
    }

    /// Remaining lifetime of steam, smoke and fire
    pub fn health(&self) -> Option<i32> {
        match self.payload {
            Payload::Decaying { health } | Payload::Burning { health, .. } => Some(health),
            Payload::Inert | Payload::Granular { .. } => None,
        }
    }

    /// Free-fall state of a granular particle
    pub fn free_fall(&self) -> Option<bool> {
        match self.payload {
            Payload::Granular { free_fall, .. } => Some(free_fall),
            _ => None,
        }
    }

    /// What a fire is consuming
    pub fn consumed(&self) -> Option<Identity> {
        match self.payload {
            Payload::Burning { consumed, .. } => Some(consumed),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
