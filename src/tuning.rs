//! Data-driven physics balance
//!
//! All values are per-tick quantities at the fixed 60 Hz simulation rate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vy every tick
    pub gravity: f32,
    /// Base jump velocity (negative is up)
    pub jump_force: f32,
    /// Base horizontal speed while a direction is held
    pub move_speed_base: f32,
    /// Horizontal decay factor when no direction is held
    pub friction: f32,
    /// How far below a platform's top the previous bottom edge may sit and still land
    pub landing_tolerance: f32,
    /// |vx| below this draws as standing still. Physics never snaps to zero.
    pub stopped_epsilon: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_force: -12.0,
            move_speed_base: 5.0,
            friction: 0.85,
            landing_tolerance: 10.0,
            stopped_epsilon: 0.01,
        }
    }
}

impl Tuning {
    /// Parse a tuning override, falling back to defaults for missing keys
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Display-side stop check; see [`Tuning::stopped_epsilon`]
    pub fn is_stopped(&self, vx: f32) -> bool {
        vx.abs() < self.stopped_epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t = Tuning::from_json(r#"{"gravity": 1.0}"#).unwrap();
        assert_eq!(t.gravity, 1.0);
        assert_eq!(t.jump_force, -12.0);
        assert_eq!(t.friction, 0.85);
    }

    #[test]
    fn test_stopped_is_display_only_threshold() {
        let t = Tuning::default();
        assert!(t.is_stopped(0.005));
        assert!(!t.is_stopped(0.5));
    }
}
