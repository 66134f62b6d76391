//! Enemy roster and combat state machine
//!
//! Each enemy is either alive or counting down a respawn timer. Every kill
//! levels the slot up permanently, so it comes back stronger.

use glam::Vec2;
use rand::Rng;

use super::events::SimEvent;
use crate::consts::*;
use crate::progression::pets::loot_pet;
use crate::progression::rebirth_factor;
use crate::world::{self, EnemyDef, Rect};

/// One enemy slot in the active world
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEnemy {
    pub def: &'static EnemyDef,
    pub rect: Rect,
    pub max_hp: f64,
    pub hp: f64,
    pub damage: f64,
    pub reward: f64,
    pub level: u32,
    /// 0 = alive, otherwise ticks until respawn
    pub respawn_ticks: u32,
    pub flash_ticks: u32,
}

impl ActiveEnemy {
    pub fn new(def: &'static EnemyDef) -> Self {
        Self {
            def,
            rect: def.rect,
            max_hp: def.max_hp,
            hp: def.max_hp,
            damage: def.damage,
            reward: def.reward,
            level: 1,
            respawn_ticks: 0,
            flash_ticks: 0,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.respawn_ticks == 0
    }

    /// Apply damage; on a kill, emit rewards and level the slot up.
    ///
    /// Returns true if this hit killed the enemy.
    pub fn hit(
        &mut self,
        amount: f64,
        rebirths: u32,
        rng: &mut impl Rng,
        events: &mut Vec<SimEvent>,
    ) -> bool {
        if !self.is_alive() {
            return false;
        }

        self.hp -= amount;
        self.flash_ticks = ENEMY_FLASH_TICKS;
        events.push(SimEvent::DamageNumber {
            pos: self.rect.center(),
            amount,
        });

        if self.hp > 0.0 {
            return false;
        }

        self.hp = 0.0;
        self.respawn_ticks = ENEMY_RESPAWN_TICKS;

        let stat = self.def.reward_type.resolve(rng);
        let amount = (self.reward * rebirth_factor(rebirths)).floor();
        events.push(SimEvent::EnemyKilled {
            enemy_id: self.def.id,
            name: self.def.name,
            boss: self.def.is_boss,
            level: self.level,
        });
        events.push(SimEvent::Reward { stat, amount });

        if let Some(chance) = self.def.pet_drop_chance {
            if rng.random::<f64>() < chance {
                let pet = loot_pet(rng.random::<f64>(), String::new());
                log::info!("{} dropped {}", self.def.name, pet.name);
                events.push(SimEvent::PetDrop(pet));
            }
        }

        if self.def.is_boss {
            log::info!("{} defeated (level {})", self.def.name, self.level);
        }

        self.level_up();
        true
    }

    /// Permanent scaling applied once per kill; hp refills to the new max
    fn level_up(&mut self) {
        self.max_hp *= LEVEL_HP_FACTOR;
        self.damage *= LEVEL_DAMAGE_FACTOR;
        self.reward *= LEVEL_REWARD_FACTOR;
        self.level += 1;
        self.hp = self.max_hp;
        log::debug!("{} leveled to {}", self.def.id, self.level);
    }

    fn tick_timers(&mut self) {
        self.flash_ticks = self.flash_ticks.saturating_sub(1);
        self.respawn_ticks = self.respawn_ticks.saturating_sub(1);
    }
}

/// Enemy instances for the world the player currently occupies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub world: u32,
    pub enemies: Vec<ActiveEnemy>,
}

impl Roster {
    /// Fresh roster from the world's templates (empty for unknown worlds)
    pub fn for_world(world_id: u32) -> Self {
        let enemies = world::geometry(world_id)
            .map(|geo| geo.enemies.iter().map(ActiveEnemy::new).collect())
            .unwrap_or_default();
        Self { world: world_id, enemies }
    }

    pub fn tick_timers(&mut self) {
        for enemy in &mut self.enemies {
            enemy.tick_timers();
        }
    }

    /// First alive enemy under a world-space point
    pub fn enemy_at(&mut self, point: Vec2) -> Option<&mut ActiveEnemy> {
        self.enemies
            .iter_mut()
            .find(|e| e.is_alive() && e.rect.contains(point))
    }

    pub fn alive(&self) -> impl Iterator<Item = &ActiveEnemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }
}

/// Passive regen toward the cap; dead (0 hp) players do not regenerate
pub fn regen(health: f64, effective_max: f64) -> f64 {
    if health > 0.0 && health < effective_max {
        (health + effective_max * REGEN_FRACTION).min(effective_max)
    } else {
        health
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::StatKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn slime() -> ActiveEnemy {
        let def = world::geometry(1)
            .unwrap()
            .enemies
            .iter()
            .find(|e| e.id == "slime1")
            .unwrap();
        ActiveEnemy::new(def)
    }

    #[test]
    fn test_non_lethal_hit_flashes() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut e = slime();
        assert!(!e.hit(40.0, 0, &mut rng, &mut events));
        assert_eq!(e.hp, 60.0);
        assert_eq!(e.flash_ticks, ENEMY_FLASH_TICKS);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_kill_rewards_and_levels_up() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut e = slime();
        assert!(e.hit(150.0, 2, &mut rng, &mut events));

        assert!(!e.is_alive());
        assert_eq!(e.level, 2);
        assert!((e.max_hp - 120.0).abs() < 1e-9);
        assert_eq!(e.hp, e.max_hp);
        assert!((e.damage - 5.5).abs() < 1e-9);
        assert!(events.contains(&SimEvent::Reward { stat: StatKind::Speed, amount: 1500.0 }));

        // Dead enemies ignore further hits
        let before = events.len();
        assert!(!e.hit(1000.0, 0, &mut rng, &mut events));
        assert_eq!(events.len(), before);
    }

    #[test]
    fn test_respawn_after_timer() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut e = slime();
        e.hit(1000.0, 0, &mut rng, &mut Vec::new());
        for _ in 0..ENEMY_RESPAWN_TICKS {
            assert!(!e.is_alive());
            e.tick_timers();
        }
        assert!(e.is_alive());
        assert!((e.hp - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_reward_floors_scaled_amount() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut events = Vec::new();
        let mut e = slime();
        e.reward = 10.7;
        e.hit(1000.0, 0, &mut rng, &mut events);
        assert!(events.contains(&SimEvent::Reward { stat: StatKind::Speed, amount: 10.0 }));
    }

    #[test]
    fn test_roster_for_unknown_world_is_empty() {
        assert!(Roster::for_world(42).enemies.is_empty());
        assert_eq!(Roster::for_world(1).enemies.len(), 3);
    }

    #[test]
    fn test_enemy_at_skips_dead() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut roster = Roster::for_world(1);
        let point = roster.enemies[0].rect.center();
        roster.enemies[0].hit(1e9, 0, &mut rng, &mut Vec::new());
        assert!(roster.enemy_at(point).is_none());
    }

    #[test]
    fn test_regen() {
        assert!((regen(50.0, 100.0) - 50.1).abs() < 1e-9);
        assert_eq!(regen(99.99, 100.0), 100.0);
        assert_eq!(regen(0.0, 100.0), 0.0);
        assert_eq!(regen(100.0, 100.0), 100.0);
    }
}
