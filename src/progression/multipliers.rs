//! Derived multipliers and costs
//!
//! Three sources compose per stat: rebirth count, equipped skin and the
//! owned pets. Nothing here is stored; everything is re-derived on demand.

use super::pets::Pet;
use super::skins::Skin;
use super::stats::StatKind;
use crate::consts::REBIRTH_COST_BASE;

/// Health training is scaled by this flat factor
pub const HEALTH_TRAINING_FACTOR: f64 = 10.0;

/// Per-stat multipliers derived from skin + pets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub speed: f64,
    pub jump: f64,
    pub attack: f64,
    pub health: f64,
    pub thorn: f64,
    pub luck: f64,
}

impl Multipliers {
    /// Compose multipliers for the equipped skin and owned pets
    pub fn compose(skin: &Skin, pets: &[Pet]) -> Self {
        let generic: f64 = pets.iter().map(|p| p.multiplier).sum();
        let bonus = |stat: StatKind| -> f64 { pets.iter().map(|p| p.bonuses.get(stat)).sum() };

        // Speed/jump/attack: multiplicative with the skin
        let multiplicative = |stat: StatKind| (1.0 + generic + bonus(stat)) * skin.stat_mult(stat);
        // Health/thorn: skin multiplier plus pet bonus as a percentage
        let additive = |stat: StatKind| skin.stat_mult(stat) + bonus(stat) / 100.0;

        Self {
            speed: multiplicative(StatKind::Speed),
            jump: multiplicative(StatKind::Jump),
            attack: multiplicative(StatKind::Attack),
            health: additive(StatKind::Health),
            thorn: additive(StatKind::Thorn),
            luck: skin.luck(),
        }
    }

    pub fn get(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Speed => self.speed,
            StatKind::Jump => self.jump,
            StatKind::Attack => self.attack,
            StatKind::Health => self.health,
            StatKind::Thorn => self.thorn,
        }
    }

    /// Amount one training click adds to `stat`
    pub fn click_power(&self, stat: StatKind, rebirths: u32) -> f64 {
        let power = (1.0 + rebirths as f64) * self.get(stat);
        if stat == StatKind::Health {
            power * HEALTH_TRAINING_FACTOR
        } else {
            power
        }
    }

    /// Stored max health scaled by the health multiplier
    pub fn effective_max_health(&self, max_health: f64) -> f64 {
        max_health * self.health
    }
}

/// Speed required for the next rebirth
pub fn rebirth_cost(rebirths: u32) -> f64 {
    REBIRTH_COST_BASE * 2f64.powi(rebirths as i32)
}

/// Rebirth multiplier applied to enemy rewards and course rewards
#[inline]
pub fn rebirth_factor(rebirths: u32) -> f64 {
    1.0 + rebirths as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::pets::{Mutation, StatBonuses, find_template};
    use crate::progression::skins::{DEFAULT_SKIN, find_skin, skin_or_default};

    fn pet(multiplier: f64, bonuses: StatBonuses) -> Pet {
        let mut p = find_template("dog").unwrap().instantiate("p".into());
        p.multiplier = multiplier;
        p.bonuses = bonuses;
        p.mutation = Some(Mutation::Normal);
        p
    }

    #[test]
    fn test_no_pets_default_skin() {
        let m = Multipliers::compose(skin_or_default(DEFAULT_SKIN), &[]);
        assert_eq!(m.speed, 1.0);
        assert_eq!(m.health, 1.0);
        assert_eq!(m.click_power(StatKind::Speed, 0), 1.0);
        assert_eq!(m.click_power(StatKind::Health, 0), 10.0);
    }

    #[test]
    fn test_generic_and_specific_pets_compose() {
        let pets = vec![
            pet(2.0, StatBonuses::default()),
            pet(5.0, StatBonuses { speed: 3.0, health: 50.0, ..Default::default() }),
        ];
        let skin = find_skin("blue").unwrap(); // speed x1.5
        let m = Multipliers::compose(skin, &pets);
        assert!((m.speed - (1.0 + 7.0 + 3.0) * 1.5).abs() < 1e-9);
        assert!((m.jump - 8.0).abs() < 1e-9);
        // Health is additive-percentage: 1 + 50/100
        assert!((m.health - 1.5).abs() < 1e-9);
        assert!((m.effective_max_health(100.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_power_scales_with_rebirths() {
        let m = Multipliers::compose(skin_or_default(DEFAULT_SKIN), &[pet(2.0, StatBonuses::default())]);
        assert!((m.click_power(StatKind::Jump, 2) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_rebirth_cost_ladder() {
        assert_eq!(rebirth_cost(0), 1000.0);
        assert_eq!(rebirth_cost(3), 8000.0);
    }
}
