//! Deterministic simulation module
//!
//! All per-tick gameplay lives here and runs on a local mirror of the
//! player record:
//! - Fixed timestep only
//! - Random draws only through the caller's seeded RNG
//! - Stable iteration order (catalog order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod events;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{PlatformOutcome, lands_on};
pub use combat::{ActiveEnemy, Roster};
pub use events::SimEvent;
pub use physics::jump_policy;
pub use state::{Mirror, SimState};
pub use tick::{TickInput, tick};
