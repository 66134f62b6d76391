//! Keyboard mapping and held-key tracking
//!
//! Key codes are `KeyboardEvent.code` strings.

use crate::progression::StatKind;
use crate::sim::TickInput;

/// Discrete action a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
    Train(StatKind),
}

pub fn action_for(code: &str) -> Option<Action> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Action::Left),
        "ArrowRight" | "KeyD" => Some(Action::Right),
        "Space" | "ArrowUp" => Some(Action::Jump),
        "KeyE" => Some(Action::Train(StatKind::Speed)),
        "KeyR" => Some(Action::Train(StatKind::Jump)),
        "KeyF" => Some(Action::Train(StatKind::Attack)),
        "KeyH" => Some(Action::Train(StatKind::Health)),
        "KeyT" => Some(Action::Train(StatKind::Thorn)),
        _ => None,
    }
}

/// Movement keys currently held
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    left: bool,
    right: bool,
    jump: bool,
}

impl HeldKeys {
    /// Record a key transition. Returns a training action on press; key
    /// repeat re-fires it, which is harmless since training is per click.
    pub fn key_event(&mut self, code: &str, pressed: bool, modal_open: bool) -> Option<StatKind> {
        if modal_open && pressed {
            return None;
        }
        match action_for(code)? {
            Action::Left => self.left = pressed,
            Action::Right => self.right = pressed,
            Action::Jump => self.jump = pressed,
            Action::Train(stat) if pressed => return Some(stat),
            Action::Train(_) => {}
        }
        None
    }

    /// Drop everything (focus lost, modal opened)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Movement part of the next tick's input
    pub fn to_input(&self, modal_open: bool) -> TickInput {
        if modal_open {
            return TickInput::default();
        }
        TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
            attack: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for("KeyA"), Some(Action::Left));
        assert_eq!(action_for("ArrowUp"), Some(Action::Jump));
        assert_eq!(action_for("KeyE"), Some(Action::Train(StatKind::Speed)));
        assert_eq!(action_for("KeyQ"), None);
    }

    #[test]
    fn test_held_keys_drive_input() {
        let mut keys = HeldKeys::default();
        keys.key_event("KeyD", true, false);
        keys.key_event("Space", true, false);
        let input = keys.to_input(false);
        assert!(input.right && input.jump && !input.left);

        keys.key_event("KeyD", false, false);
        assert!(!keys.to_input(false).right);
    }

    #[test]
    fn test_modal_blocks_presses_but_not_releases() {
        let mut keys = HeldKeys::default();
        keys.key_event("KeyA", true, false);
        assert_eq!(keys.key_event("KeyE", true, true), None);
        assert!(!keys.to_input(true).left);

        keys.key_event("KeyA", false, true);
        assert!(!keys.to_input(false).left);
    }

    #[test]
    fn test_training_hotkey_fires_on_press_only() {
        let mut keys = HeldKeys::default();
        assert_eq!(keys.key_event("KeyH", true, false), Some(StatKind::Health));
        assert_eq!(keys.key_event("KeyH", false, false), None);
    }
}
