//! Scene assembly: simulation state to screen-space triangles
//!
//! Runs only after a tick has fully completed, so a mid-transition frame is
//! never drawn.

use glam::Vec2;

use super::camera::Camera;
use super::shapes::{bar, circle, glow, rect, rect_frame};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::progression::skins::hex_to_rgba;
use crate::settings::Settings;
use crate::sim::SimState;
use crate::tuning::Tuning;
use crate::world::{self, PlatformKind, Rect};

/// Popup lifetime in ticks
pub const POPUP_TICKS: u32 = 45;

/// How far the eyes shift toward the direction of travel
const GLANCE: f32 = 3.0;

/// Rising marker over a damaged enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamagePopup {
    pub pos: Vec2,
    pub amount: f64,
    pub ttl: u32,
}

impl DamagePopup {
    pub fn new(pos: Vec2, amount: f64) -> Self {
        Self { pos, amount, ttl: POPUP_TICKS }
    }

    /// Age one tick; false once expired
    pub fn step(&mut self) -> bool {
        self.ttl = self.ttl.saturating_sub(1);
        self.pos.y -= 1.0;
        self.ttl > 0
    }
}

fn with_alpha(mut color: [f32; 4], alpha: f32) -> [f32; 4] {
    color[3] *= alpha;
    color
}

fn screen_rect(camera: &Camera, r: &Rect) -> (Vec2, Vec2) {
    (camera.world_to_screen(Vec2::new(r.x, r.y)), Vec2::new(r.w, r.h))
}

/// Build every triangle for one frame, in screen pixels
pub fn build_scene(
    sim: &SimState,
    camera: &Camera,
    popups: &[DamagePopup],
    settings: &Settings,
    tuning: &Tuning,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(4096);
    let blink = settings.effective_blink();

    if let Some(geo) = world::geometry(sim.world) {
        // Portals sit behind everything
        for plat in geo.platforms {
            if let PlatformKind::Portal(portal) = plat.kind {
                let (min, size) = screen_rect(camera, &plat.rect);
                vertices.extend(rect(min, size, with_alpha(hex_to_rgba(plat.color), 0.5)));
                vertices.extend(rect_frame(min, size, 4.0, colors::PORTAL_FRAME));
                let lamp = if sim.mirror.speed < portal.requirement {
                    colors::PORTAL_LOCKED
                } else {
                    colors::PORTAL_OPEN
                };
                vertices.extend(rect(min - Vec2::new(0.0, 16.0), Vec2::new(size.x, 8.0), lamp));
            }
        }

        for plat in geo.platforms {
            if matches!(plat.kind, PlatformKind::Portal(_)) {
                continue;
            }
            let (min, size) = screen_rect(camera, &plat.rect);
            let color = match plat.kind {
                PlatformKind::Hazard => colors::HAZARD,
                _ => hex_to_rgba(plat.color),
            };
            vertices.extend(rect(min + Vec2::new(0.0, 10.0), size, colors::PLATFORM_SHADOW));
            vertices.extend(rect(min, size, color));
        }

        for item in geo.collectibles {
            if sim.mirror.collected.contains(item.id) {
                continue;
            }
            let center = camera.world_to_screen(item.center());
            let color = hex_to_rgba(item.color);
            vertices.extend(glow(center, item.radius * 2.0, with_alpha(color, 0.6), 24));
            vertices.extend(circle(center, item.radius, color, 24));
        }
    }

    for enemy in sim.roster.alive() {
        let (min, size) = screen_rect(camera, &enemy.rect);
        let color = if enemy.flash_ticks > 0 && blink {
            colors::ENEMY_FLASH
        } else {
            hex_to_rgba(enemy.def.color)
        };
        vertices.extend(rect(min, size, color));
        let fraction = (enemy.hp / enemy.max_hp) as f32;
        vertices.extend(bar(
            min - Vec2::new(0.0, 10.0),
            Vec2::new(size.x, 5.0),
            fraction,
            colors::HP_BAR_BACK,
            colors::HP_BAR,
        ));
    }

    // Player blinks while invincible
    let hidden = blink && sim.invincibility_ticks > 0 && (sim.invincibility_ticks / 4) % 2 == 1;
    if !hidden {
        let min = camera.world_to_screen(sim.pos);
        let glance = if tuning.is_stopped(sim.vel.x) {
            0.0
        } else {
            sim.vel.x.signum() * GLANCE
        };
        vertices.extend(rect(min, Vec2::splat(PLAYER_SIZE), hex_to_rgba(sim.mirror.skin_color)));
        vertices.extend(rect(min + Vec2::new(5.0 + glance, 8.0), Vec2::splat(5.0), colors::FACE));
        vertices.extend(rect(min + Vec2::new(20.0 + glance, 8.0), Vec2::splat(5.0), colors::FACE));
    }

    if settings.show_damage_numbers {
        for popup in popups {
            let alpha = popup.ttl as f32 / POPUP_TICKS as f32;
            let center = camera.world_to_screen(popup.pos);
            // Marker grows with the order of magnitude of the hit
            let size = 4.0 + popup.amount.max(1.0).log10() as f32 * 2.0;
            vertices.extend(rect(
                center - Vec2::splat(size / 2.0),
                Vec2::splat(size),
                with_alpha(colors::DAMAGE_NUMBER, alpha),
            ));
        }
    }

    if settings.effective_screen_flash() && sim.damage_flash_ticks > 0 {
        let alpha = sim.damage_flash_ticks as f32 / DAMAGE_FLASH_TICKS as f32;
        vertices.extend(rect(Vec2::ZERO, camera.viewport, with_alpha(colors::DAMAGE_FLASH, alpha)));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hub_spawn;

    fn scene_for(sim: &SimState, settings: &Settings) -> Vec<Vertex> {
        let camera = Camera::follow(sim.pos, Vec2::new(1280.0, 720.0));
        build_scene(sim, &camera, &[], settings, &Tuning::default())
    }

    #[test]
    fn test_collected_items_not_drawn() {
        let mut sim = SimState::new(HUB_WORLD, hub_spawn(), hub_spawn());
        let before = scene_for(&sim, &Settings::default()).len();
        sim.mirror.collected.insert("hub_1".into());
        let after = scene_for(&sim, &Settings::default()).len();
        assert_eq!(before - after, 24 * 3 * 2);
    }

    #[test]
    fn test_damage_flash_respects_settings() {
        let mut sim = SimState::new(HUB_WORLD, hub_spawn(), hub_spawn());
        sim.damage_flash_ticks = 5;
        let calm = Settings {
            screen_flash: false,
            ..Default::default()
        };
        assert_eq!(
            scene_for(&sim, &Settings::default()).len(),
            scene_for(&sim, &calm).len() + 6
        );
    }

    #[test]
    fn test_eyes_recenter_once_friction_reads_stopped() {
        let mut sim = SimState::new(HUB_WORLD, hub_spawn(), hub_spawn());
        let settings = Settings::default();
        let centered = scene_for(&sim, &settings);

        // Friction residue below the stop threshold draws as standing still
        sim.vel.x = 0.005;
        assert_eq!(scene_for(&sim, &settings), centered);

        sim.vel.x = 0.5;
        assert_ne!(scene_for(&sim, &settings), centered);
        sim.vel.x = -0.5;
        let left = scene_for(&sim, &settings);
        assert_ne!(left, centered);
        sim.vel.x = 0.5;
        assert_ne!(scene_for(&sim, &settings), left);
    }

    #[test]
    fn test_popup_expires() {
        let mut popup = DamagePopup::new(Vec2::ZERO, 10.0);
        let mut steps = 0;
        while popup.step() {
            steps += 1;
        }
        assert_eq!(steps, POPUP_TICKS - 1);
        assert!(popup.pos.y < 0.0);
    }
}
