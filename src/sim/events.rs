//! Typed events emitted by one simulation tick
//!
//! The bridge consumes these once per tick and applies them to the player
//! record; the app also forwards them to the HUD.

use glam::Vec2;

use crate::progression::{Pet, StatKind};

#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// The mirror moved to another world; the record must follow
    WorldTransition { world: u32, spawn: Vec2 },
    /// New respawn point reached
    CheckpointReached { pos: Vec2 },
    CollectiblePicked { id: &'static str, value: f64 },
    /// Finish line touched (always followed by a transition to the hub)
    CourseComplete,
    EnemyKilled { enemy_id: &'static str, name: &'static str, boss: bool, level: u32 },
    /// Stat payout, already scaled by rebirths and resolved to a concrete stat
    Reward { stat: StatKind, amount: f64 },
    /// Zero-cost loot pet; the record assigns its instance id
    PetDrop(Pet),
    /// Contact damage taken by the player
    Damaged { amount: f64 },
    /// Damage dealt to an enemy, for floating numbers
    DamageNumber { pos: Vec2, amount: f64 },
    Respawned { pos: Vec2 },
}

impl SimEvent {
    /// Events the record must see before the next save
    pub fn is_persistent(&self) -> bool {
        !matches!(self, SimEvent::Damaged { .. } | SimEvent::DamageNumber { .. } | SimEvent::Respawned { .. })
    }
}
