//! Collision resolution against world geometry
//!
//! Platforms are one-sided: a landing only resolves when the player is
//! falling and was above the platform top on the previous tick. Everything
//! else about a platform depends on its kind.

use glam::Vec2;

use super::events::SimEvent;
use super::state::SimState;
use crate::consts::*;
use crate::hub_spawn;
use crate::tuning::Tuning;
use crate::world::{self, Collectible, PlatformKind, Rect};

/// How the platform pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformOutcome {
    /// Ordinary resolution; the tick continues
    Settled,
    /// The player left the world; nothing else may run this tick
    Transitioned,
}

/// Top-only landing test
#[inline]
pub fn lands_on(prev_bottom: f32, vy: f32, platform_top: f32, tolerance: f32) -> bool {
    vy >= 0.0 && prev_bottom <= platform_top + tolerance
}

/// Circle vs player box, using half the box width as the player radius
pub fn touches_collectible(player: &Rect, item: &Collectible) -> bool {
    player.center().distance(item.center()) < player.w / 2.0 + item.radius
}

/// Below the world by more than the void margin
#[inline]
pub fn fell_into_void(y: f32) -> bool {
    y > WORLD_HEIGHT + VOID_MARGIN
}

/// Respawn point standing on top of a checkpoint platform
pub fn checkpoint_spot(rect: &Rect) -> Vec2 {
    Vec2::new(rect.x + rect.w / 2.0 - PLAYER_SIZE / 2.0, rect.y - PLAYER_SIZE)
}

/// Resolve every platform the player box overlaps, in catalog order
pub fn resolve_platforms(
    state: &mut SimState,
    prev_y: f32,
    tuning: &Tuning,
    events: &mut Vec<SimEvent>,
) -> PlatformOutcome {
    let Some(geo) = world::geometry(state.world) else {
        state.grounded = false;
        return PlatformOutcome::Settled;
    };

    let mut grounded = false;
    for plat in geo.platforms {
        if !state.player_box().intersects(&plat.rect) {
            continue;
        }

        match plat.kind {
            PlatformKind::Hazard => {
                // Unified with the death path
                state.health = 0.0;
                continue;
            }
            PlatformKind::Portal(portal) => {
                if state.mirror.speed >= portal.requirement
                    && world::info(portal.target_world).is_some()
                {
                    let spawn = portal.target_pos();
                    log::info!("Entered portal to {}", portal.name);
                    state.relocate(portal.target_world, spawn);
                    events.push(SimEvent::WorldTransition {
                        world: portal.target_world,
                        spawn,
                    });
                    return PlatformOutcome::Transitioned;
                }
            }
            PlatformKind::Finish if state.finish_cooldown_ticks == 0 => {
                state.finish_cooldown_ticks = FINISH_COOLDOWN_TICKS;
                events.push(SimEvent::CourseComplete);
                let spawn = hub_spawn();
                state.relocate(HUB_WORLD, spawn);
                events.push(SimEvent::WorldTransition {
                    world: HUB_WORLD,
                    spawn,
                });
                return PlatformOutcome::Transitioned;
            }
            PlatformKind::Checkpoint => {
                let spot = checkpoint_spot(&plat.rect);
                if spot != state.checkpoint {
                    log::debug!("Checkpoint at ({}, {})", spot.x, spot.y);
                    state.checkpoint = spot;
                    events.push(SimEvent::CheckpointReached { pos: spot });
                }
            }
            _ => {}
        }

        if lands_on(
            prev_y + PLAYER_SIZE,
            state.vel.y,
            plat.rect.y,
            tuning.landing_tolerance,
        ) {
            state.pos.y = plat.rect.y - PLAYER_SIZE;
            state.vel.y = 0.0;
            grounded = true;
        }
    }

    state.grounded = grounded;
    PlatformOutcome::Settled
}

/// Consume at most one uncollected collectible this tick
pub fn resolve_collectibles(state: &mut SimState, events: &mut Vec<SimEvent>) {
    let Some(geo) = world::geometry(state.world) else {
        return;
    };

    let player = state.player_box();
    let picked = geo
        .collectibles
        .iter()
        .find(|c| !state.mirror.collected.contains(c.id) && touches_collectible(&player, c));

    if let Some(item) = picked {
        log::debug!("Collected {} (+{})", item.id, item.value);
        state.mirror.collected.insert(item.id.to_string());
        events.push(SimEvent::CollectiblePicked {
            id: item.id,
            value: item.value,
        });
    }
}
