//! Named transitions on the player record
//!
//! Every mutation of the record goes through one of these. Affordability
//! failures are not errors: the record is left untouched and the caller is
//! told so through the return value.

use glam::Vec2;
use rand::Rng;

use super::PlayerRecord;
use crate::consts::*;
use crate::hub_spawn;
use crate::progression::pets::{find_template, roll_mutation};
use crate::progression::skins::find_skin;
use crate::progression::{CostType, Pet, QuestKind, StatKind, rebirth_cost, rebirth_factor};
use crate::world::{self, Portal};

/// Result of a shop purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    Unaffordable,
    AlreadyOwned,
    UnknownItem,
}

impl PlayerRecord {
    /// One training click on `stat`
    pub fn train(&mut self, stat: StatKind) {
        let power = self.multipliers().click_power(stat, self.rebirths);
        self.grant(stat, power);
        self.advance_quest(QuestKind::Train(stat), 1);
    }

    /// Add a reward to a stat. Health rewards raise the cap and heal by the same amount.
    pub fn grant(&mut self, stat: StatKind, amount: f64) {
        *self.stat_mut(stat) += amount;
        if stat == StatKind::Health {
            self.health += amount;
            self.clamp_health();
        }
    }

    /// Prestige reset. No-op (false) while speed is below the cost.
    pub fn rebirth(&mut self) -> bool {
        let cost = rebirth_cost(self.rebirths);
        if self.speed < cost {
            return false;
        }

        self.speed = 0.0;
        self.jump = 0.0;
        self.thorn = 0.0;
        self.attack = BASE_ATTACK;
        self.max_health = BASE_MAX_HEALTH;
        self.health = BASE_MAX_HEALTH;
        self.rebirths += 1;
        self.collected_ids.clear();
        self.teleport(HUB_WORLD, hub_spawn());
        self.advance_quest(QuestKind::Rebirth, 1);
        log::info!("Rebirth {} (paid {})", self.rebirths, cost);
        true
    }

    /// World-transition contract: relocate, zero velocity, checkpoint at
    /// spawn, full health, bump the teleport signal. Unknown worlds no-op.
    pub fn teleport(&mut self, world_id: u32, spawn: Vec2) -> bool {
        if world::info(world_id).is_none() {
            log::warn!("Ignoring transition to unknown world {}", world_id);
            return false;
        }
        self.world = world_id;
        self.position = spawn;
        self.checkpoint = spawn;
        self.velocity = Vec2::ZERO;
        self.is_grounded = false;
        self.health = self.effective_max_health();
        self.teleport_id += 1;
        log::info!("Teleported to world {} at ({}, {})", world_id, spawn.x, spawn.y);
        true
    }

    /// Speed-gated portal traversal
    pub fn enter_portal(&mut self, portal: &Portal) -> bool {
        if self.speed < portal.requirement {
            return false;
        }
        self.teleport(portal.target_world, portal.target_pos())
    }

    /// Travel menu: gated by the world's speed requirement
    pub fn travel(&mut self, world_id: u32) -> bool {
        match world::info(world_id) {
            Some(info) if self.speed >= info.requirement => self.teleport(info.id, info.spawn_pos()),
            _ => false,
        }
    }

    /// Spawn button
    pub fn go_home(&mut self) {
        self.teleport(HUB_WORLD, hub_spawn());
    }

    pub fn reach_checkpoint(&mut self, pos: Vec2) {
        self.checkpoint = pos;
    }

    pub fn collect(&mut self, id: &str, value: f64) {
        if self.collected_ids.insert(id.to_string()) {
            self.speed += value;
        }
    }

    /// Course reward; the hub transition arrives as its own event
    pub fn complete_course(&mut self) {
        let reward = FINISH_REWARD * rebirth_factor(self.rebirths);
        self.speed += reward;
        self.advance_quest(QuestKind::FinishCourse, 1);
        log::info!("Course complete: +{} speed", reward);
    }

    pub fn record_kill(&mut self) {
        self.advance_quest(QuestKind::KillEnemy, 1);
    }

    /// Shop purchase: re-checks affordability, then rolls a mutation with skin luck
    pub fn purchase_pet(&mut self, template_id: &str, rng: &mut impl Rng) -> PurchaseOutcome {
        let Some(template) = find_template(template_id) else {
            return PurchaseOutcome::UnknownItem;
        };
        if self.speed < template.cost {
            return PurchaseOutcome::Unaffordable;
        }

        self.speed -= template.cost;
        let id = self.mint_pet_id();
        let luck = self.multipliers().luck;
        let pet = roll_mutation(template.instantiate(id), luck, rng);
        log::info!("Bought {} (x{})", pet.name, pet.multiplier);
        self.pets.push(pet);
        self.advance_quest(QuestKind::BuyPet, 1);
        PurchaseOutcome::Purchased
    }

    /// Loot pets arrive without an instance id
    pub fn grant_pet(&mut self, mut pet: Pet) {
        pet.id = self.mint_pet_id();
        self.pets.push(pet);
        self.clamp_health();
    }

    pub fn purchase_skin(&mut self, skin_id: &str) -> PurchaseOutcome {
        let Some(skin) = find_skin(skin_id) else {
            return PurchaseOutcome::UnknownItem;
        };
        if self.unlocked_skins.contains(skin.id) {
            return PurchaseOutcome::AlreadyOwned;
        }

        const SPENDABLE: [StatKind; 4] = [StatKind::Speed, StatKind::Jump, StatKind::Attack, StatKind::Thorn];
        let payers: Vec<StatKind> = match skin.cost_type {
            CostType::Stat(stat) => vec![stat],
            CostType::All => SPENDABLE.to_vec(),
        };
        if payers.iter().any(|&s| self.stat(s) < skin.cost) {
            return PurchaseOutcome::Unaffordable;
        }
        for &stat in &payers {
            *self.stat_mut(stat) -= skin.cost;
        }
        if payers.contains(&StatKind::Health) {
            self.clamp_health();
        }

        self.unlocked_skins.insert(skin.id.to_string());
        log::info!("Unlocked skin {}", skin.name);
        PurchaseOutcome::Purchased
    }

    /// Equip an unlocked skin; health is clamped to the new cap
    pub fn equip_skin(&mut self, skin_id: &str) -> bool {
        if !self.unlocked_skins.contains(skin_id) {
            return false;
        }
        self.equipped_skin = skin_id.to_string();
        self.clamp_health();
        true
    }

    /// Count progress toward the current quest if its kind matches
    pub fn advance_quest(&mut self, kind: QuestKind, amount: u64) {
        if let Some(quest) = self.current_quest() {
            if quest.kind == kind {
                self.quest_progress += amount;
            }
        }
    }

    /// Pay out a finished quest and move the cursor
    pub fn claim_quest(&mut self, rng: &mut impl Rng) -> bool {
        let Some(quest) = self.current_quest() else {
            return false;
        };
        if self.quest_progress < quest.target {
            return false;
        }

        let stat = quest.reward_type.resolve(rng);
        self.grant(stat, quest.reward_amount);
        self.quest_index += 1;
        self.quest_progress = 0;
        log::info!("Quest {} claimed: +{} {}", quest.name, quest.reward_amount, stat.as_str());
        true
    }

    fn mint_pet_id(&mut self) -> String {
        self.pet_serial += 1;
        format!("pet-{}", self.pet_serial)
    }
}
