//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key codes to actions, held keys, modal gating)
//! - Storage (LocalStorage on web, in-memory elsewhere)

pub mod input;
pub mod storage;

pub use input::{Action, HeldKeys, action_for};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use storage::MemoryStore;
