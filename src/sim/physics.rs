//! Per-tick integration of the player body

use glam::Vec2;

use crate::tuning::Tuning;

/// Horizontal speed while a direction key is held
pub fn move_speed(tuning: &Tuning, speed_stat: f64) -> f32 {
    tuning.move_speed_base * (1.0 + 0.5 * (speed_stat + 1.0).ln() as f32)
}

/// Jump launch velocity (negative is up)
pub fn jump_velocity(tuning: &Tuning, jump_stat: f64) -> f32 {
    tuning.jump_force * (1.0 + 0.15 * (jump_stat + 1.0).ln() as f32)
}

/// Whether a jump fires this tick.
///
/// Level-triggered: holding jump relaunches on every tick the player is
/// grounded again (bunny-hop).
#[inline]
pub fn jump_policy(jump_held: bool, grounded: bool) -> bool {
    jump_held && grounded
}

/// Advance velocity and position by one tick. Grounding is left for the
/// collision pass to re-establish.
#[allow(clippy::too_many_arguments)]
pub fn integrate(
    pos: &mut Vec2,
    vel: &mut Vec2,
    grounded: bool,
    dir: f32,
    jump_held: bool,
    speed_stat: f64,
    jump_stat: f64,
    tuning: &Tuning,
) {
    if dir != 0.0 {
        vel.x = dir.signum() * move_speed(tuning, speed_stat);
    } else {
        vel.x *= tuning.friction;
    }

    vel.y += tuning.gravity;

    if jump_policy(jump_held, grounded) {
        vel.y = jump_velocity(tuning, jump_stat);
    }

    *pos += *vel;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values_at_zero_stats() {
        let t = Tuning::default();
        assert!((move_speed(&t, 0.0) - 5.0).abs() < 1e-6);
        assert!((jump_velocity(&t, 0.0) + 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_speed_scales_logarithmically() {
        let t = Tuning::default();
        let e = std::f64::consts::E - 1.0;
        // ln(e) = 1 -> 5 * 1.5
        assert!((move_speed(&t, e) - 7.5).abs() < 1e-4);
        assert!((jump_velocity(&t, e) + 13.8).abs() < 1e-4);
    }

    #[test]
    fn test_friction_decays_without_input() {
        let t = Tuning::default();
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::new(10.0, 0.0);
        integrate(&mut pos, &mut vel, false, 0.0, false, 0.0, 0.0, &t);
        assert!((vel.x - 8.5).abs() < 1e-6);
        assert!((vel.y - 0.6).abs() < 1e-6);
        assert!((pos.x - 8.5).abs() < 1e-6);
    }

    #[test]
    fn test_held_direction_snaps_velocity() {
        let t = Tuning::default();
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::new(100.0, 0.0);
        integrate(&mut pos, &mut vel, true, -1.0, false, 0.0, 0.0, &t);
        assert!((vel.x + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_jump_requires_grounding() {
        let t = Tuning::default();
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::ZERO;
        integrate(&mut pos, &mut vel, false, 0.0, true, 0.0, 0.0, &t);
        assert!(vel.y > 0.0);

        let mut vel = Vec2::ZERO;
        integrate(&mut pos, &mut vel, true, 0.0, true, 0.0, 0.0, &t);
        assert!((vel.y + 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_jump_policy_is_level_triggered() {
        assert!(jump_policy(true, true));
        assert!(!jump_policy(true, false));
        assert!(!jump_policy(false, true));
    }
}
