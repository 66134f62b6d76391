//! World geometry store
//!
//! Static platform, collectible and enemy-template definitions, queried by
//! world id. Unknown ids resolve to `None` and callers treat that as a no-op.

mod catalog;

use glam::Vec2;

use crate::progression::RewardType;

pub use catalog::WORLDS;

/// Axis-aligned rectangle (y grows downward, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square box anchored at its top-left corner
    pub fn square(top_left: Vec2, size: f32) -> Self {
        Self::new(top_left.x, top_left.y, size, size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test (touching edges do not intersect)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Portal destination and gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Portal {
    pub name: &'static str,
    pub target_world: u32,
    pub target: (f32, f32),
    /// Minimum authoritative speed to pass
    pub requirement: f64,
}

impl Portal {
    pub fn target_pos(&self) -> Vec2 {
        Vec2::new(self.target.0, self.target.1)
    }
}

/// Semantic platform type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformKind {
    Ground,
    Hazard,
    Checkpoint,
    Portal(Portal),
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub color: u32,
    pub kind: PlatformKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub id: &'static str,
    pub pos: (f32, f32),
    pub radius: f32,
    pub value: f64,
    pub color: u32,
}

impl Collectible {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.0, self.pos.1)
    }
}

/// Enemy template; instances are built per world entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyDef {
    pub id: &'static str,
    pub name: &'static str,
    pub rect: Rect,
    pub max_hp: f64,
    pub damage: f64,
    pub reward: f64,
    pub reward_type: RewardType,
    pub pet_drop_chance: Option<f64>,
    pub color: u32,
    pub is_boss: bool,
}

/// Travel-menu metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldInfo {
    pub id: u32,
    pub name: &'static str,
    pub requirement: f64,
    pub spawn: (f32, f32),
}

impl WorldInfo {
    pub fn spawn_pos(&self) -> Vec2 {
        Vec2::new(self.spawn.0, self.spawn.1)
    }
}

/// Everything static about one world
#[derive(Debug, Clone, Copy)]
pub struct WorldGeometry {
    pub id: u32,
    pub platforms: &'static [Platform],
    pub collectibles: &'static [Collectible],
    pub enemies: &'static [EnemyDef],
}

pub fn info(id: u32) -> Option<&'static WorldInfo> {
    WORLDS.iter().find(|w| w.id == id)
}

pub fn geometry(id: u32) -> Option<WorldGeometry> {
    catalog::geometry(id)
}
