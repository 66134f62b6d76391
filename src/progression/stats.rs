//! Progression stat identifiers

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The five trainable progression stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Speed,
    Jump,
    Attack,
    Health,
    Thorn,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Speed,
        StatKind::Jump,
        StatKind::Attack,
        StatKind::Health,
        StatKind::Thorn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Speed => "Speed",
            StatKind::Jump => "Jump",
            StatKind::Attack => "Attack",
            StatKind::Health => "Health",
            StatKind::Thorn => "Thorn",
        }
    }

    /// Pick a stat from a uniform draw in [0, 1)
    pub fn from_draw(draw: f64) -> Self {
        let idx = ((draw * Self::ALL.len() as f64) as usize).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// Uniform choice among all five stats
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_draw(rng.random::<f64>())
    }
}

/// Which stat a reward is paid into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    Speed,
    Jump,
    Attack,
    Health,
    Thorn,
    /// Resolved to a concrete stat at payout time
    Random,
}

impl RewardType {
    /// Resolve to a concrete stat, drawing from `rng` only for `Random`
    pub fn resolve(self, rng: &mut impl Rng) -> StatKind {
        match self {
            RewardType::Speed => StatKind::Speed,
            RewardType::Jump => StatKind::Jump,
            RewardType::Attack => StatKind::Attack,
            RewardType::Health => StatKind::Health,
            RewardType::Thorn => StatKind::Thorn,
            RewardType::Random => StatKind::random(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_from_draw_covers_all_stats() {
        assert_eq!(StatKind::from_draw(0.0), StatKind::Speed);
        assert_eq!(StatKind::from_draw(0.25), StatKind::Jump);
        assert_eq!(StatKind::from_draw(0.45), StatKind::Attack);
        assert_eq!(StatKind::from_draw(0.65), StatKind::Health);
        assert_eq!(StatKind::from_draw(0.999), StatKind::Thorn);
        // Out-of-range draws clamp instead of panicking
        assert_eq!(StatKind::from_draw(1.0), StatKind::Thorn);
    }

    #[test]
    fn test_fixed_reward_ignores_rng() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(RewardType::Jump.resolve(&mut rng), StatKind::Jump);
        assert_eq!(RewardType::Thorn.resolve(&mut rng), StatKind::Thorn);
    }
}
