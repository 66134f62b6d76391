//! Fixed timestep simulation tick
//!
//! One call advances the mirror by exactly one 60 Hz step. Collision
//! resolution (including an early return on a world transition) always
//! completes before anything reads the resulting position.

use glam::Vec2;
use rand::Rng;

use super::collision::{PlatformOutcome, fell_into_void, resolve_collectibles, resolve_platforms};
use super::combat::regen;
use super::events::SimEvent;
use super::physics::integrate;
use super::state::SimState;
use crate::consts::*;
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Attack click, already in world coordinates
    pub attack: Option<Vec2>,
}

impl TickInput {
    /// Horizontal direction; left wins when both are held
    pub fn direction(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }
}

/// Advance the simulation by one fixed timestep
pub fn tick(
    state: &mut SimState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Vec<SimEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;
    state.tick_timers();

    // Physics
    let prev_y = state.pos.y;
    integrate(
        &mut state.pos,
        &mut state.vel,
        state.grounded,
        input.direction(),
        input.jump,
        state.mirror.speed,
        state.mirror.jump,
        tuning,
    );

    // Collision
    if resolve_platforms(state, prev_y, tuning, &mut events) == PlatformOutcome::Transitioned {
        return events;
    }
    resolve_collectibles(state, &mut events);

    if fell_into_void(state.pos.y) {
        state.respawn(&mut events);
        return events;
    }

    // Combat
    let rebirths = state.mirror.rebirths;
    if let Some(point) = input.attack {
        let attack = state.mirror.attack;
        if let Some(enemy) = state.roster.enemy_at(point) {
            enemy.hit(attack, rebirths, rng, &mut events);
        }
    }
    contact_damage(state, rng, &mut events);

    state.health = regen(state.health, state.effective_max_health());

    if state.health <= 0.0 {
        state.respawn(&mut events);
    }
    state.clamp_health();

    events
}

/// Overlapping alive enemies hurt the player unless invincible; thorn reflects
fn contact_damage(state: &mut SimState, rng: &mut impl Rng, events: &mut Vec<SimEvent>) {
    let player = state.player_box();
    let thorn = state.mirror.thorn;
    let rebirths = state.mirror.rebirths;

    for enemy in state.roster.enemies.iter_mut() {
        if state.invincibility_ticks > 0 {
            break;
        }
        if !enemy.is_alive() || !enemy.rect.intersects(&player) {
            continue;
        }

        let amount = enemy.damage;
        state.health = (state.health - amount).max(0.0);
        state.invincibility_ticks = INVINCIBILITY_TICKS;
        state.damage_flash_ticks = DAMAGE_FLASH_TICKS;
        events.push(SimEvent::Damaged { amount });

        if thorn > 0.0 {
            enemy.hit(thorn, rebirths, rng, events);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub_spawn;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn settle(state: &mut SimState) {
        let tuning = Tuning::default();
        let mut rng = rng();
        for _ in 0..120 {
            tick(state, &TickInput::default(), &tuning, &mut rng);
        }
    }

    #[test]
    fn test_player_lands_on_hub_floor() {
        let mut s = SimState::new(HUB_WORLD, hub_spawn(), hub_spawn());
        settle(&mut s);
        assert!(s.grounded);
        assert!((s.pos.y - (600.0 - PLAYER_SIZE)).abs() < 1e-3);
        assert_eq!(s.vel.y, 0.0);
    }

    #[test]
    fn test_grounded_jump_launches() {
        let tuning = Tuning::default();
        let mut s = SimState::new(HUB_WORLD, hub_spawn(), hub_spawn());
        settle(&mut s);
        let input = TickInput { jump: true, ..Default::default() };
        tick(&mut s, &input, &tuning, &mut rng());
        assert!(s.vel.y < 0.0);
        assert!(!s.grounded);
    }

    #[test]
    fn test_void_fall_respawns_at_checkpoint() {
        let tuning = Tuning::default();
        let checkpoint = Vec2::new(50.0, 500.0);
        let mut s = SimState::new(3, Vec2::new(450.0, WORLD_HEIGHT + VOID_MARGIN), checkpoint);
        s.health = 10.0;
        let events = tick(&mut s, &TickInput::default(), &tuning, &mut rng());
        assert_eq!(s.pos, checkpoint);
        assert_eq!(s.vel, Vec2::ZERO);
        assert_eq!(s.health, s.effective_max_health());
        assert!(events.contains(&SimEvent::Respawned { pos: checkpoint }));
    }

    #[test]
    fn test_hazard_goes_through_death_path() {
        let tuning = Tuning::default();
        let checkpoint = Vec2::new(50.0, 570.0);
        let mut s = SimState::new(3, Vec2::new(700.0, 575.0), checkpoint);
        let events = tick(&mut s, &TickInput::default(), &tuning, &mut rng());
        assert_eq!(s.pos, checkpoint);
        assert_eq!(s.health, s.effective_max_health());
        assert!(events.contains(&SimEvent::Respawned { pos: checkpoint }));
    }

    #[test]
    fn test_contact_damage_and_invincibility() {
        let tuning = Tuning::default();
        // Stand inside slime1 (-300, 550, 40x30), on the floor
        let pos = Vec2::new(-300.0, 570.0);
        let mut s = SimState::new(HUB_WORLD, pos, pos);
        s.mirror.collected.insert("hub_1".into());
        let mut rng = rng();

        let events = tick(&mut s, &TickInput::default(), &tuning, &mut rng);
        assert!(events.contains(&SimEvent::Damaged { amount: 5.0 }));
        assert_eq!(s.invincibility_ticks, INVINCIBILITY_TICKS);
        let after_hit = s.health;
        assert!(after_hit < 100.0);

        // Invincible: no second hit, only regen
        let events = tick(&mut s, &TickInput::default(), &tuning, &mut rng);
        assert!(!events.iter().any(|e| matches!(e, SimEvent::Damaged { .. })));
        assert!(s.health >= after_hit);
    }

    #[test]
    fn test_thorn_reflects_damage() {
        let tuning = Tuning::default();
        let pos = Vec2::new(-300.0, 570.0);
        let mut s = SimState::new(HUB_WORLD, pos, pos);
        s.mirror.collected.insert("hub_1".into());
        s.mirror.thorn = 1000.0;

        let events = tick(&mut s, &TickInput::default(), &tuning, &mut rng());
        assert!(events.iter().any(|e| matches!(e, SimEvent::EnemyKilled { enemy_id: "slime1", .. })));
        assert!(!s.roster.enemies[0].is_alive());
    }

    #[test]
    fn test_click_attack_hits_first_enemy_under_point() {
        let tuning = Tuning::default();
        let mut s = SimState::new(HUB_WORLD, hub_spawn(), hub_spawn());
        s.mirror.attack = 30.0;
        let input = TickInput {
            attack: Some(Vec2::new(280.0 + 40.0, 560.0)),
            ..Default::default()
        };
        tick(&mut s, &input, &tuning, &mut rng());
        let slime2 = &s.roster.enemies[1];
        assert_eq!(slime2.hp, 70.0);
        assert_eq!(slime2.flash_ticks, ENEMY_FLASH_TICKS);
    }

    #[test]
    fn test_health_stays_clamped_under_heavy_damage() {
        let tuning = Tuning::default();
        // Void Crawler hits for 5000
        let pos = Vec2::new(610.0, 520.0);
        let mut s = SimState::new(4, pos, Vec2::new(0.0, 500.0));
        let events = tick(&mut s, &TickInput::default(), &tuning, &mut rng());
        assert!(events.iter().any(|e| matches!(e, SimEvent::Damaged { .. })));
        assert!(s.health >= 0.0 && s.health <= s.effective_max_health());
        // Lethal hit sends the player back to the checkpoint
        assert_eq!(s.pos, Vec2::new(0.0, 500.0));
    }
}
