//! Reconciliation between the player record and the simulation mirror
//!
//! Ownership per field:
//! - Progression stats, pets, skin and collected ids belong to the record and
//!   are copied into the mirror on every pull.
//! - Position, velocity and grounding belong to the simulation. The record's
//!   copies are adopted only when its teleport signal has moved.
//! - Health is shared. Large local divergence is pushed up; a large change on
//!   the record side since the last pass wins instead. Heals granted by this
//!   tick's events are added onto the mirror's health.

use crate::consts::*;
use crate::progression::skins::skin_or_default;
use crate::record::PlayerRecord;
use crate::sim::{Roster, SimEvent, SimState};

/// Push health to the record at least this often, even without divergence
pub const HEALTH_PUSH_INTERVAL_TICKS: u32 = 30;

#[derive(Debug, Clone)]
pub struct Bridge {
    /// Record health as it stood after the previous pass
    last_record_health: f64,
    ticks_since_health_push: u32,
}

impl Bridge {
    pub fn new(record: &PlayerRecord) -> Self {
        Self {
            last_record_health: record.health,
            ticks_since_health_push: 0,
        }
    }

    /// Fresh mirror positioned from the record
    pub fn spawn_mirror(&mut self, record: &PlayerRecord) -> SimState {
        let mut sim = SimState::new(record.world, record.position, record.checkpoint);
        sim.teleport_id = record.teleport_id;
        self.copy_read_only(record, &mut sim);
        sim.health = record.health;
        sim.clamp_health();
        self.last_record_health = record.health;
        sim
    }

    /// Record -> mirror, run before every tick
    pub fn pull(&mut self, record: &PlayerRecord, sim: &mut SimState) {
        self.copy_read_only(record, sim);

        if record.teleport_id != sim.teleport_id {
            sim.world = record.world;
            sim.pos = record.position;
            sim.vel = record.velocity;
            sim.grounded = record.is_grounded;
            sim.checkpoint = record.checkpoint;
            sim.health = sim.effective_max_health();
            sim.invincibility_ticks = 0;
            sim.roster = Roster::for_world(record.world);
            sim.teleport_id = record.teleport_id;
            log::debug!("Adopted teleport {} into world {}", record.teleport_id, record.world);
        } else if (record.health - self.last_record_health).abs() > HEALTH_SYNC_THRESHOLD {
            // Changed externally (load, training): the record wins
            sim.health = record.health;
        }

        sim.clamp_health();
        self.last_record_health = record.health;
    }

    /// Mirror -> record: apply this tick's events, then sync health
    pub fn push(
        &mut self,
        events: &[SimEvent],
        sim: &mut SimState,
        record: &mut PlayerRecord,
    ) {
        let health_before = record.health;
        for event in events {
            apply_event(event, sim, record);
        }

        // Heals granted by events belong to the record; carry them down
        // on top of whatever the tick did locally
        let granted = record.health - health_before;
        if granted.abs() > HEALTH_SYNC_THRESHOLD {
            self.copy_read_only(record, sim);
            sim.health += granted;
            sim.clamp_health();
            record.health = sim.health;
            record.clamp_health();
            self.ticks_since_health_push = 0;
            self.last_record_health = record.health;
            return;
        }

        self.ticks_since_health_push += 1;
        let diverged = (sim.health - record.health).abs() > HEALTH_SYNC_THRESHOLD;
        if diverged || self.ticks_since_health_push >= HEALTH_PUSH_INTERVAL_TICKS {
            record.health = sim.health;
            record.clamp_health();
            self.ticks_since_health_push = 0;
        }
        self.last_record_health = record.health;
    }

    fn copy_read_only(&self, record: &PlayerRecord, sim: &mut SimState) {
        let mirror = &mut sim.mirror;
        mirror.speed = record.speed;
        mirror.jump = record.jump;
        mirror.attack = record.attack;
        mirror.thorn = record.thorn;
        mirror.max_health = record.max_health;
        mirror.rebirths = record.rebirths;
        mirror.multipliers = record.multipliers();
        mirror.skin_color = skin_or_default(&record.equipped_skin).color;
        if mirror.collected != record.collected_ids {
            mirror.collected.clone_from(&record.collected_ids);
        }
    }
}

/// Route one simulation event into its record transition
fn apply_event(event: &SimEvent, sim: &mut SimState, record: &mut PlayerRecord) {
    match event {
        SimEvent::WorldTransition { world, spawn } => {
            if record.teleport(*world, *spawn) {
                // Already applied locally; not an external jump
                sim.teleport_id = record.teleport_id;
            }
        }
        SimEvent::CheckpointReached { pos } => record.reach_checkpoint(*pos),
        SimEvent::CollectiblePicked { id, value } => record.collect(id, *value),
        SimEvent::CourseComplete => record.complete_course(),
        SimEvent::EnemyKilled { .. } => record.record_kill(),
        SimEvent::Reward { stat, amount } => record.grant(*stat, *amount),
        SimEvent::PetDrop(pet) => record.grant_pet(pet.clone()),
        SimEvent::Damaged { .. } | SimEvent::DamageNumber { .. } | SimEvent::Respawned { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::StatKind;
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Bridge, PlayerRecord, SimState) {
        let record = PlayerRecord::default();
        let mut bridge = Bridge::new(&record);
        let sim = bridge.spawn_mirror(&record);
        (bridge, record, sim)
    }

    #[test]
    fn test_stats_flow_down_without_moving_player() {
        let (mut bridge, mut record, mut sim) = setup();
        sim.pos = Vec2::new(123.0, 456.0);
        sim.vel = Vec2::new(5.0, 0.0);
        record.speed = 9000.0;
        record.position = Vec2::ZERO;

        bridge.pull(&record, &mut sim);
        assert_eq!(sim.mirror.speed, 9000.0);
        assert_eq!(sim.pos, Vec2::new(123.0, 456.0));
        assert_eq!(sim.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_teleport_signal_adopts_position() {
        let (mut bridge, mut record, mut sim) = setup();
        sim.pos = Vec2::new(123.0, 456.0);
        sim.health = 10.0;
        assert!(record.travel(3));

        bridge.pull(&record, &mut sim);
        assert_eq!(sim.world, 3);
        assert_eq!(sim.pos, Vec2::new(50.0, 500.0));
        assert_eq!(sim.roster.world, 3);
        assert_eq!(sim.health, sim.effective_max_health());
        assert_eq!(sim.teleport_id, record.teleport_id);
    }

    #[test]
    fn test_local_damage_pushes_up() {
        let (mut bridge, mut record, mut sim) = setup();
        sim.health = 60.0;
        bridge.push(&[], &mut sim, &mut record);
        assert_eq!(record.health, 60.0);

        // Next pull must not undo it
        bridge.pull(&record, &mut sim);
        assert_eq!(sim.health, 60.0);
    }

    #[test]
    fn test_external_health_change_wins() {
        let (mut bridge, mut record, mut sim) = setup();
        sim.health = 60.0;
        bridge.push(&[], &mut sim, &mut record);

        // UI trains health: record jumps well past the threshold
        record.train(StatKind::Health);
        assert_eq!(record.health, 70.0);
        bridge.pull(&record, &mut sim);
        assert_eq!(sim.health, 70.0);
    }

    #[test]
    fn test_small_regen_drift_waits_for_periodic_push() {
        let (mut bridge, mut record, mut sim) = setup();
        sim.health = 50.0;
        bridge.push(&[], &mut sim, &mut record);

        sim.health = 50.5;
        bridge.push(&[], &mut sim, &mut record);
        assert_eq!(record.health, 50.0);

        for _ in 0..HEALTH_PUSH_INTERVAL_TICKS {
            bridge.push(&[], &mut sim, &mut record);
        }
        assert_eq!(record.health, 50.5);
    }

    #[test]
    fn test_sim_transition_is_not_readopted() {
        let (mut bridge, mut record, mut sim) = setup();
        let mut rng = Pcg32::seed_from_u64(0);
        record.speed = 100_000.0;
        bridge.pull(&record, &mut sim);

        // Standing in the cyber portal
        sim.pos = Vec2::new(845.0, 450.0);
        let events = tick(&mut sim, &TickInput::default(), &Tuning::default(), &mut rng);
        bridge.push(&events, &mut sim, &mut record);

        assert_eq!(record.world, 2);
        assert_eq!(record.teleport_id, 1);
        assert_eq!(sim.teleport_id, 1);

        sim.roster.enemies[0].level = 5;
        bridge.pull(&record, &mut sim);
        assert_eq!(sim.roster.enemies[0].level, 5);
    }

    #[test]
    fn test_health_reward_heal_survives_push() {
        let (mut bridge, mut record, mut sim) = setup();
        let events = vec![SimEvent::Reward { stat: StatKind::Health, amount: 500.0 }];
        bridge.push(&events, &mut sim, &mut record);

        assert_eq!(record.max_health, 600.0);
        assert_eq!(record.health, 600.0);
        assert_eq!(sim.health, 600.0);

        bridge.pull(&record, &mut sim);
        assert_eq!(sim.health, 600.0);
    }

    #[test]
    fn test_health_reward_keeps_same_tick_damage() {
        let (mut bridge, mut record, mut sim) = setup();
        sim.health = 80.0;
        let events = vec![
            SimEvent::Damaged { amount: 20.0 },
            SimEvent::Reward { stat: StatKind::Health, amount: 50.0 },
        ];
        bridge.push(&events, &mut sim, &mut record);

        assert_eq!(record.max_health, 150.0);
        assert_eq!(sim.health, 130.0);
        assert_eq!(record.health, 130.0);
    }

    #[test]
    fn test_kill_rewards_reach_record() {
        let (mut bridge, mut record, mut sim) = setup();
        let events = vec![
            SimEvent::EnemyKilled { enemy_id: "slime1", name: "Slime", boss: false, level: 1 },
            SimEvent::Reward { stat: StatKind::Speed, amount: 500.0 },
            SimEvent::CollectiblePicked { id: "hub_1", value: 100.0 },
        ];
        bridge.push(&events, &mut sim, &mut record);
        assert_eq!(record.speed, 600.0);
        assert!(record.collected_ids.contains("hub_1"));

        bridge.pull(&record, &mut sim);
        assert!(sim.mirror.collected.contains("hub_1"));
    }
}
