//! Progression model
//!
//! Pure data and derived-stat formulas. No side effects:
//! - Stat identifiers and reward resolution
//! - Multiplier composition (rebirths, skin, pets)
//! - Pet catalog and mutation roll
//! - Skin catalog
//! - Campaign quest catalog

pub mod multipliers;
pub mod pets;
pub mod quests;
pub mod skins;
pub mod stats;

pub use multipliers::{Multipliers, rebirth_cost, rebirth_factor};
pub use pets::{Mutation, MutationTier, Pet, PetRarity, PetTemplate, StatBonuses, PET_CATALOG};
pub use quests::{Quest, QuestKind, QUEST_CATALOG, quest_at};
pub use skins::{CostType, DEFAULT_SKIN, SKIN_CATALOG, Skin, find_skin, skin_or_default};
pub use stats::{RewardType, StatKind};
