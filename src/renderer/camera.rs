//! Side-scrolling camera
//!
//! The camera is a pure translation: screen = world + offset. The vertical
//! offset is capped so the view never drifts far into the sky.

use glam::Vec2;

use crate::consts::PLAYER_SIZE;

/// Player sits this far down the screen
const VERTICAL_ANCHOR: f32 = 0.6;
/// Maximum downward camera shift
const MAX_OFFSET_Y: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    /// Center on the player horizontally, anchor vertically
    pub fn follow(player: Vec2, viewport: Vec2) -> Self {
        let x = -player.x + viewport.x / 2.0 - PLAYER_SIZE / 2.0;
        let y = (-player.y + viewport.y * VERTICAL_ANCHOR).min(MAX_OFFSET_Y);
        Self {
            offset: Vec2::new(x, y),
            viewport,
        }
    }

    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        p + self.offset
    }

    /// Inverse transform, used for click targeting
    #[inline]
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        p - self.offset
    }
}
