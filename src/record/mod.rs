//! Authoritative player record
//!
//! The single source of truth for progression. UI actions and simulation
//! events change it only through the transitions in [`transitions`].

pub mod transitions;

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::hub_spawn;
use crate::progression::skins::{DEFAULT_SKIN, skin_or_default};
use crate::progression::{Multipliers, Pet, StatKind, quest_at};

pub use transitions::PurchaseOutcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub speed: f64,
    pub jump: f64,
    pub attack: f64,
    pub max_health: f64,
    pub health: f64,
    pub thorn: f64,
    pub rebirths: u32,
    pub pets: Vec<Pet>,
    pub unlocked_skins: BTreeSet<String>,
    pub equipped_skin: String,
    pub world: u32,
    pub position: Vec2,
    /// Transient: always zero after a load
    #[serde(skip)]
    pub velocity: Vec2,
    #[serde(skip)]
    pub is_grounded: bool,
    pub checkpoint: Vec2,
    pub collected_ids: BTreeSet<String>,
    /// Reconciliation signal; restarts at 0 every session
    #[serde(skip)]
    pub teleport_id: u64,
    pub quest_index: usize,
    pub quest_progress: u64,
    /// Source of unique pet instance ids
    pub pet_serial: u64,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        let spawn = hub_spawn();
        Self {
            speed: 0.0,
            jump: 0.0,
            attack: BASE_ATTACK,
            max_health: BASE_MAX_HEALTH,
            health: BASE_MAX_HEALTH,
            thorn: 0.0,
            rebirths: 0,
            pets: Vec::new(),
            unlocked_skins: BTreeSet::from([DEFAULT_SKIN.to_string()]),
            equipped_skin: DEFAULT_SKIN.to_string(),
            world: HUB_WORLD,
            position: spawn,
            velocity: Vec2::ZERO,
            is_grounded: false,
            checkpoint: spawn,
            collected_ids: BTreeSet::new(),
            teleport_id: 0,
            quest_index: 0,
            quest_progress: 0,
            pet_serial: 0,
        }
    }
}

impl PlayerRecord {
    /// Multipliers from the equipped skin and owned pets
    pub fn multipliers(&self) -> Multipliers {
        Multipliers::compose(skin_or_default(&self.equipped_skin), &self.pets)
    }

    pub fn effective_max_health(&self) -> f64 {
        self.multipliers().effective_max_health(self.max_health)
    }

    pub fn clamp_health(&mut self) {
        self.health = self.health.clamp(0.0, self.effective_max_health());
    }

    pub fn stat(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Speed => self.speed,
            StatKind::Jump => self.jump,
            StatKind::Attack => self.attack,
            StatKind::Health => self.max_health,
            StatKind::Thorn => self.thorn,
        }
    }

    pub(crate) fn stat_mut(&mut self, stat: StatKind) -> &mut f64 {
        match stat {
            StatKind::Speed => &mut self.speed,
            StatKind::Jump => &mut self.jump,
            StatKind::Attack => &mut self.attack,
            StatKind::Health => &mut self.max_health,
            StatKind::Thorn => &mut self.thorn,
        }
    }

    /// The campaign quest at the cursor
    pub fn current_quest(&self) -> Option<&'static crate::progression::Quest> {
        quest_at(self.quest_index)
    }

    /// Repair invariants after deserializing an older or edited save
    pub fn normalize(&mut self) {
        self.unlocked_skins.insert(DEFAULT_SKIN.to_string());
        if !self.unlocked_skins.contains(&self.equipped_skin) {
            log::warn!("Equipped skin {} not unlocked, reverting", self.equipped_skin);
            self.equipped_skin = DEFAULT_SKIN.to_string();
        }
        if crate::world::info(self.world).is_none() {
            log::warn!("Saved world {} unknown, returning to hub", self.world);
            self.world = HUB_WORLD;
            self.checkpoint = hub_spawn();
        }
        self.position = self.checkpoint;
        self.velocity = Vec2::ZERO;
        self.is_grounded = false;
        for stat in StatKind::ALL {
            let v = self.stat_mut(stat);
            if !v.is_finite() || *v < 0.0 {
                *v = 0.0;
            }
        }
        self.clamp_health();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let r = PlayerRecord::default();
        assert_eq!(r.world, HUB_WORLD);
        assert!(r.unlocked_skins.contains(DEFAULT_SKIN));
        assert_eq!(r.effective_max_health(), 100.0);
        assert!(r.current_quest().is_some());
    }

    #[test]
    fn test_normalize_repairs_invalid_fields() {
        let mut r = PlayerRecord {
            equipped_skin: "gold".into(),
            world: 77,
            health: 1e9,
            speed: f64::NAN,
            velocity: Vec2::new(4.0, 4.0),
            ..Default::default()
        };
        r.normalize();
        assert_eq!(r.equipped_skin, DEFAULT_SKIN);
        assert_eq!(r.world, HUB_WORLD);
        assert_eq!(r.position, hub_spawn());
        assert_eq!(r.velocity, Vec2::ZERO);
        assert_eq!(r.health, 100.0);
        assert_eq!(r.speed, 0.0);
    }
}
