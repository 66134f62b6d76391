//! Speed Obby - an incremental platformer simulator
//!
//! Core modules:
//! - `progression`: Stat multipliers, pets, skins, quests (pure formulas)
//! - `world`: Static world geometry (platforms, collectibles, enemy templates)
//! - `sim`: Fixed-tick physics, collision and enemy combat on a local mirror
//! - `record`: Authoritative player record and its named transitions
//! - `bridge`: Reconciliation between the record and the simulation mirror
//! - `app`: Frame driver tying the above together
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Versioned save/load with defaults for missing fields
//! - `tuning`: Data-driven physics balance

pub mod advice;
pub mod app;
pub mod bridge;
pub mod persistence;
pub mod platform;
pub mod progression;
pub mod record;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod world;

pub use app::Game;
pub use record::PlayerRecord;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per animation frame at 60 Hz)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player bounding box is a fixed square
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Hub world id and spawn point
    pub const HUB_WORLD: u32 = 1;
    pub const HUB_SPAWN: (f32, f32) = (-50.0, 500.0);

    /// Logical world height; falling this far below it (plus margin) is a void death
    pub const WORLD_HEIGHT: f32 = 720.0;
    pub const VOID_MARGIN: f32 = 500.0;

    /// Enemy respawn delay after a kill
    pub const ENEMY_RESPAWN_TICKS: u32 = 180;
    /// Enemy hit flash
    pub const ENEMY_FLASH_TICKS: u32 = 10;
    /// Player hit invincibility window
    pub const INVINCIBILITY_TICKS: u32 = 60;
    /// Screen damage flash
    pub const DAMAGE_FLASH_TICKS: u32 = 20;
    /// Finish-line debounce (2 seconds)
    pub const FINISH_COOLDOWN_TICKS: u32 = 2 * TICKS_PER_SECOND;

    /// Passive regen per tick, as a fraction of effective max health
    pub const REGEN_FRACTION: f64 = 0.001;

    /// Enemy level-up scaling applied on every kill
    pub const LEVEL_HP_FACTOR: f64 = 1.2;
    pub const LEVEL_DAMAGE_FACTOR: f64 = 1.1;
    pub const LEVEL_REWARD_FACTOR: f64 = 1.15;

    /// Rebirth cost ladder base (paid in Speed)
    pub const REBIRTH_COST_BASE: f64 = 1000.0;
    /// Stat floors after a rebirth
    pub const BASE_ATTACK: f64 = 1.0;
    pub const BASE_MAX_HEALTH: f64 = 100.0;

    /// Course completion reward per (rebirths + 1)
    pub const FINISH_REWARD: f64 = 500.0;

    /// Authoritative/local health divergence that forces a sync
    pub const HEALTH_SYNC_THRESHOLD: f64 = 1.0;
}

/// Hub spawn as a vector
#[inline]
pub fn hub_spawn() -> Vec2 {
    Vec2::new(consts::HUB_SPAWN.0, consts::HUB_SPAWN.1)
}
