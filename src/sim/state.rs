//! Simulation-local player mirror
//!
//! Physics owns position, velocity, grounding and health here. Progression
//! stats are read-only copies refreshed by the bridge every pass.

use std::collections::BTreeSet;

use glam::Vec2;

use super::combat::Roster;
use super::events::SimEvent;
use crate::consts::*;
use crate::progression::Multipliers;
use crate::progression::skins::{DEFAULT_SKIN, skin_or_default};
use crate::world::Rect;

/// Read-only progression values the simulation needs
#[derive(Debug, Clone, PartialEq)]
pub struct Mirror {
    pub speed: f64,
    pub jump: f64,
    pub attack: f64,
    pub thorn: f64,
    pub max_health: f64,
    pub rebirths: u32,
    pub multipliers: Multipliers,
    pub skin_color: u32,
    pub collected: BTreeSet<String>,
}

impl Default for Mirror {
    fn default() -> Self {
        let skin = skin_or_default(DEFAULT_SKIN);
        Self {
            speed: 0.0,
            jump: 0.0,
            attack: BASE_ATTACK,
            thorn: 0.0,
            max_health: BASE_MAX_HEALTH,
            rebirths: 0,
            multipliers: Multipliers::compose(skin, &[]),
            skin_color: skin.color,
            collected: BTreeSet::new(),
        }
    }
}

/// Complete simulation state for one player
#[derive(Debug, Clone)]
pub struct SimState {
    pub world: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
    pub checkpoint: Vec2,
    pub health: f64,
    pub mirror: Mirror,
    pub roster: Roster,
    /// Contact damage is ignored while > 0
    pub invincibility_ticks: u32,
    /// Screen flash after taking damage
    pub damage_flash_ticks: u32,
    /// Finish line debounce
    pub finish_cooldown_ticks: u32,
    /// Last teleport signal adopted from the record
    pub teleport_id: u64,
    pub time_ticks: u64,
}

impl SimState {
    pub fn new(world: u32, pos: Vec2, checkpoint: Vec2) -> Self {
        let mirror = Mirror::default();
        let health = mirror.multipliers.effective_max_health(mirror.max_health);
        Self {
            world,
            pos,
            vel: Vec2::ZERO,
            grounded: false,
            checkpoint,
            health,
            mirror,
            roster: Roster::for_world(world),
            invincibility_ticks: 0,
            damage_flash_ticks: 0,
            finish_cooldown_ticks: 0,
            teleport_id: 0,
            time_ticks: 0,
        }
    }

    pub fn effective_max_health(&self) -> f64 {
        self.mirror
            .multipliers
            .effective_max_health(self.mirror.max_health)
    }

    pub fn clamp_health(&mut self) {
        self.health = self.health.clamp(0.0, self.effective_max_health());
    }

    /// Player bounding box
    pub fn player_box(&self) -> Rect {
        Rect::square(self.pos, PLAYER_SIZE)
    }

    /// Death path: back to checkpoint at full health
    pub fn respawn(&mut self, events: &mut Vec<SimEvent>) {
        self.pos = self.checkpoint;
        self.vel = Vec2::ZERO;
        self.grounded = false;
        self.health = self.effective_max_health();
        events.push(SimEvent::Respawned { pos: self.pos });
    }

    /// World-transition contract applied to the mirror
    pub fn relocate(&mut self, world: u32, spawn: Vec2) {
        self.pos = spawn;
        self.checkpoint = spawn;
        self.vel = Vec2::ZERO;
        self.grounded = false;
        self.health = self.effective_max_health();
        self.invincibility_ticks = 0;
        if world != self.world || self.roster.world != world {
            self.roster = Roster::for_world(world);
        }
        self.world = world;
    }

    pub(super) fn tick_timers(&mut self) {
        self.invincibility_ticks = self.invincibility_ticks.saturating_sub(1);
        self.damage_flash_ticks = self.damage_flash_ticks.saturating_sub(1);
        self.finish_cooldown_ticks = self.finish_cooldown_ticks.saturating_sub(1);
        self.roster.tick_timers();
    }
}
