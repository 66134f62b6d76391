//! Pets and the mutation roll applied when one is acquired

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::stats::StatKind;

/// Pet rarity (ordered by ascending value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PetRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl PetRarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetRarity::Common => "Common",
            PetRarity::Rare => "Rare",
            PetRarity::Epic => "Epic",
            PetRarity::Legendary => "Legendary",
        }
    }
}

/// Mutation tag assigned at acquisition time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutation {
    Normal,
    Shiny,
    Gold,
    Rainbow,
    DarkMatter,
    Speedy,
    Jumpy,
    Deadly,
    Tanky,
}

impl Mutation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mutation::Normal => "Normal",
            Mutation::Shiny => "Shiny",
            Mutation::Gold => "Gold",
            Mutation::Rainbow => "Rainbow",
            Mutation::DarkMatter => "Dark Matter",
            Mutation::Speedy => "Speedy",
            Mutation::Jumpy => "Jumpy",
            Mutation::Deadly => "Deadly",
            Mutation::Tanky => "Tanky",
        }
    }
}

/// Per-stat bonus multipliers carried by a pet (0 = none)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBonuses {
    pub speed: f64,
    pub jump: f64,
    pub attack: f64,
    pub health: f64,
    pub thorn: f64,
}

impl StatBonuses {
    pub fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Speed => self.speed,
            StatKind::Jump => self.jump,
            StatKind::Attack => self.attack,
            StatKind::Health => self.health,
            StatKind::Thorn => self.thorn,
        }
    }

    pub fn set(&mut self, stat: StatKind, value: f64) {
        match stat {
            StatKind::Speed => self.speed = value,
            StatKind::Jump => self.jump = value,
            StatKind::Attack => self.attack = value,
            StatKind::Health => self.health = value,
            StatKind::Thorn => self.thorn = value,
        }
    }
}

/// An owned pet instance. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique instance id
    pub id: String,
    pub name: String,
    /// Generic multiplier added to every stat's composition
    pub multiplier: f64,
    pub rarity: PetRarity,
    pub cost: f64,
    #[serde(default)]
    pub mutation: Option<Mutation>,
    #[serde(default)]
    pub bonuses: StatBonuses,
}

/// A shop catalog entry
#[derive(Debug, Clone, Copy)]
pub struct PetTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
    pub rarity: PetRarity,
    pub cost: f64,
    pub description: &'static str,
}

impl PetTemplate {
    /// Fresh instance with the given instance id and no mutation
    pub fn instantiate(&self, instance_id: String) -> Pet {
        Pet {
            id: instance_id,
            name: self.name.to_string(),
            multiplier: self.multiplier,
            rarity: self.rarity,
            cost: self.cost,
            mutation: None,
            bonuses: StatBonuses::default(),
        }
    }
}

pub const PET_CATALOG: &[PetTemplate] = &[
    PetTemplate { id: "dog", name: "Basic Doggy", multiplier: 2.0, rarity: PetRarity::Common, cost: 500.0, description: "A loyal friend." },
    PetTemplate { id: "cat", name: "Speedy Cat", multiplier: 5.0, rarity: PetRarity::Rare, cost: 2500.0, description: "Zooms around at 3am." },
    PetTemplate { id: "bunny", name: "Hyper Bunny", multiplier: 10.0, rarity: PetRarity::Epic, cost: 8000.0, description: "Never stops hopping." },
    PetTemplate { id: "dragon", name: "Inferno Dragon", multiplier: 25.0, rarity: PetRarity::Epic, cost: 25000.0, description: "Breathes fire and speed." },
    PetTemplate { id: "void", name: "Void Walker", multiplier: 100.0, rarity: PetRarity::Legendary, cost: 150000.0, description: "Existence is merely a suggestion." },
    PetTemplate { id: "god", name: "Galaxy God", multiplier: 500.0, rarity: PetRarity::Legendary, cost: 5000000.0, description: "Creates universes." },
];

pub fn find_template(id: &str) -> Option<&'static PetTemplate> {
    PET_CATALOG.iter().find(|t| t.id == id)
}

/// Base chances per tier at luck 1
pub const DARK_MATTER_CHANCE: f64 = 0.001;
pub const RAINBOW_CHANCE: f64 = 0.005;
pub const GOLD_CHANCE: f64 = 0.02;
pub const SHINY_CHANCE: f64 = 0.10;
/// Not stacked on the ladder above: compared against the raw draw directly
pub const SPECIALIST_CHANCE: f64 = 0.15;

pub const DARK_MATTER_MULT: f64 = 50.0;
pub const RAINBOW_MULT: f64 = 10.0;
pub const GOLD_MULT: f64 = 3.0;
pub const SHINY_MULT: f64 = 1.5;
pub const SPECIALIST_MULT: f64 = 2.5;

/// Outcome tier of a mutation roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTier {
    Normal,
    Shiny,
    Gold,
    Rainbow,
    DarkMatter,
    Specialist,
}

/// Sorted (threshold, tier) ladder for the given luck multiplier.
///
/// Dark Matter, Rainbow, Gold and Shiny thresholds are cumulative. The
/// Specialist threshold is the bare specialist chance scaled by luck, so it
/// only catches draws between the Shiny threshold and itself.
pub fn mutation_ladder(luck: f64) -> [(f64, MutationTier); 5] {
    let dark = DARK_MATTER_CHANCE * luck;
    let rainbow = dark + RAINBOW_CHANCE * luck;
    let gold = rainbow + GOLD_CHANCE * luck;
    let shiny = gold + SHINY_CHANCE * luck;
    let specialist = SPECIALIST_CHANCE * luck;
    [
        (dark, MutationTier::DarkMatter),
        (rainbow, MutationTier::Rainbow),
        (gold, MutationTier::Gold),
        (shiny, MutationTier::Shiny),
        (specialist, MutationTier::Specialist),
    ]
}

/// Evaluate one uniform draw against the ladder
pub fn roll_tier(draw: f64, luck: f64) -> MutationTier {
    mutation_ladder(luck)
        .iter()
        .find(|(threshold, _)| draw < *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(MutationTier::Normal)
}

/// Stats a specialist mutation can land in, with their tags
const SPECIALIST_STATS: [(StatKind, Mutation); 4] = [
    (StatKind::Speed, Mutation::Speedy),
    (StatKind::Jump, Mutation::Jumpy),
    (StatKind::Attack, Mutation::Deadly),
    (StatKind::Health, Mutation::Tanky),
];

/// Apply a rolled tier to a fresh pet. `stat_draw` picks the specialist stat.
pub fn apply_tier(mut pet: Pet, tier: MutationTier, stat_draw: f64) -> Pet {
    let (mutation, factor) = match tier {
        MutationTier::Normal => (Mutation::Normal, 1.0),
        MutationTier::Shiny => (Mutation::Shiny, SHINY_MULT),
        MutationTier::Gold => (Mutation::Gold, GOLD_MULT),
        MutationTier::Rainbow => (Mutation::Rainbow, RAINBOW_MULT),
        MutationTier::DarkMatter => (Mutation::DarkMatter, DARK_MATTER_MULT),
        MutationTier::Specialist => {
            let idx = ((stat_draw * SPECIALIST_STATS.len() as f64) as usize)
                .min(SPECIALIST_STATS.len() - 1);
            let (stat, tag) = SPECIALIST_STATS[idx];
            pet.bonuses.set(stat, pet.multiplier * SPECIALIST_MULT);
            pet.mutation = Some(tag);
            return pet;
        }
    };
    pet.multiplier *= factor;
    pet.mutation = Some(mutation);
    pet
}

/// Full acquisition roll: one draw for the tier, one for the specialist stat
pub fn roll_mutation(pet: Pet, luck: f64, rng: &mut impl Rng) -> Pet {
    let draw = rng.random::<f64>();
    let stat_draw = rng.random::<f64>();
    let tier = roll_tier(draw, luck);
    let pet = apply_tier(pet, tier, stat_draw);
    if tier != MutationTier::Normal {
        log::debug!(
            "Mutation roll {:.4} (luck {}) -> {}",
            draw,
            luck,
            pet.mutation.map(|m| m.as_str()).unwrap_or("Normal")
        );
    }
    pet
}

/// A zero-cost loot copy of a uniformly chosen catalog pet
pub fn loot_pet(draw: f64, instance_id: String) -> Pet {
    let idx = ((draw * PET_CATALOG.len() as f64) as usize).min(PET_CATALOG.len() - 1);
    let template = &PET_CATALOG[idx];
    let mut pet = template.instantiate(instance_id);
    pet.name = format!("Looted {}", template.name);
    pet.cost = 0.0;
    pet
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog() -> Pet {
        find_template("dog").unwrap().instantiate("dog-1".into())
    }

    #[test]
    fn test_rarity_order() {
        assert!(PetRarity::Common < PetRarity::Rare);
        assert!(PetRarity::Epic < PetRarity::Legendary);
    }

    #[test]
    fn test_dark_matter_draw() {
        assert_eq!(roll_tier(0.0005, 1.0), MutationTier::DarkMatter);
        let pet = apply_tier(dog(), MutationTier::DarkMatter, 0.0);
        assert!((pet.multiplier - 100.0).abs() < 1e-9);
        assert_eq!(pet.mutation, Some(Mutation::DarkMatter));
    }

    #[test]
    fn test_normal_draw_keeps_multiplier() {
        assert_eq!(roll_tier(0.5, 1.0), MutationTier::Normal);
        let pet = apply_tier(dog(), MutationTier::Normal, 0.0);
        assert!((pet.multiplier - 2.0).abs() < 1e-9);
        assert_eq!(pet.mutation, Some(Mutation::Normal));
    }

    #[test]
    fn test_ladder_tiers_at_luck_one() {
        assert_eq!(roll_tier(0.003, 1.0), MutationTier::Rainbow);
        assert_eq!(roll_tier(0.02, 1.0), MutationTier::Gold);
        assert_eq!(roll_tier(0.1, 1.0), MutationTier::Shiny);
        // Specialist band only spans shiny threshold (0.126) .. 0.15
        assert_eq!(roll_tier(0.13, 1.0), MutationTier::Specialist);
        assert_eq!(roll_tier(0.16, 1.0), MutationTier::Normal);
    }

    #[test]
    fn test_luck_scales_thresholds() {
        // 0.0015 misses dark matter at luck 1 but hits it at luck 2
        assert_eq!(roll_tier(0.0015, 1.0), MutationTier::Rainbow);
        assert_eq!(roll_tier(0.0015, 2.0), MutationTier::DarkMatter);
    }

    #[test]
    fn test_specialist_redirects_into_one_stat() {
        let pet = apply_tier(dog(), MutationTier::Specialist, 0.3);
        assert_eq!(pet.mutation, Some(Mutation::Jumpy));
        assert!((pet.multiplier - 2.0).abs() < 1e-9);
        assert!((pet.bonuses.jump - 5.0).abs() < 1e-9);
        assert_eq!(pet.bonuses.speed, 0.0);
    }

    #[test]
    fn test_loot_pet_is_free_and_renamed() {
        let pet = loot_pet(0.99, "loot-1".into());
        assert_eq!(pet.name, "Looted Galaxy God");
        assert_eq!(pet.cost, 0.0);
        assert_eq!(pet.id, "loot-1");
    }
}
