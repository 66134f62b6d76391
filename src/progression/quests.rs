//! Campaign quest catalog
//!
//! The player only ever holds a cursor into this list plus a progress count.

use serde::{Deserialize, Serialize};

use super::stats::{RewardType, StatKind};

/// Action a quest counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestKind {
    Train(StatKind),
    KillEnemy,
    BuyPet,
    Rebirth,
    FinishCourse,
}

#[derive(Debug, Clone, Copy)]
pub struct Quest {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: QuestKind,
    pub target: u64,
    pub reward_amount: f64,
    pub reward_type: RewardType,
}

const fn q(
    id: u32,
    name: &'static str,
    description: &'static str,
    kind: QuestKind,
    target: u64,
    reward_amount: f64,
    reward_type: RewardType,
) -> Quest {
    Quest { id, name, description, kind, target, reward_amount, reward_type }
}

use self::QuestKind::{BuyPet, FinishCourse, KillEnemy, Rebirth, Train};
use super::stats::RewardType as R;
use super::stats::StatKind as S;

pub const QUEST_CATALOG: &[Quest] = &[
    q(1, "Warm Up", "Click the Speed button 50 times.", Train(S::Speed), 50, 500.0, R::Speed),
    q(2, "Leg Day", "Train your Jump stat 30 times.", Train(S::Jump), 30, 500.0, R::Jump),
    q(3, "First Blood", "Defeat 3 Enemies.", KillEnemy, 3, 1000.0, R::Attack),
    q(4, "Pet Lover", "Buy 1 Pet from the shop.", BuyPet, 1, 2000.0, R::Speed),
    q(5, "Fighter", "Train Attack 50 times.", Train(S::Attack), 50, 1000.0, R::Health),
    q(6, "Parkour Pro", "Finish any Obby 1 time.", FinishCourse, 1, 5000.0, R::Speed),
    q(7, "Monster Hunter", "Defeat 10 Enemies.", KillEnemy, 10, 5000.0, R::Attack),
    q(8, "A New Beginning", "Rebirth 1 time.", Rebirth, 1, 10000.0, R::Speed),
    q(9, "Speed Demon", "Train Speed 200 times.", Train(S::Speed), 200, 25000.0, R::Jump),
    q(10, "Collector", "Buy 3 Pets.", BuyPet, 3, 50000.0, R::Speed),
    q(11, "Boss Slayer", "Defeat 5 Enemies (Bosses count too!).", KillEnemy, 5, 50000.0, R::Thorn),
    q(12, "Void Ready", "Train Health 100 times.", Train(S::Health), 100, 100000.0, R::Health),
    q(13, "Godly Power", "Rebirth 5 times.", Rebirth, 5, 1000000.0, R::Random),
    q(14, "Iron Skin", "Train Health 500 times.", Train(S::Health), 500, 200000.0, R::Health),
    q(15, "Spiky", "Train Thorn 500 times.", Train(S::Thorn), 500, 200000.0, R::Thorn),
    q(16, "Hunter", "Kill 20 Enemies.", KillEnemy, 20, 500000.0, R::Attack),
    q(17, "Super Sonic", "Train Speed 2,000 times.", Train(S::Speed), 2000, 1000000.0, R::Jump),
    q(18, "Sky High", "Train Jump 2,000 times.", Train(S::Jump), 2000, 1000000.0, R::Speed),
    q(19, "Pet Collector", "Buy 10 Pets.", BuyPet, 10, 5000000.0, R::Random),
    q(20, "Rebirth Specialist", "Rebirth 10 times.", Rebirth, 10, 10000000.0, R::Random),
    q(21, "Void Hunter", "Kill 50 Enemies.", KillEnemy, 50, 50000000.0, R::Attack),
    q(22, "Marathon", "Finish Obby 5 times.", FinishCourse, 5, 100000000.0, R::Speed),
    q(23, "Immortal", "Train Health 5,000 times.", Train(S::Health), 5000, 500000000.0, R::Health),
    q(24, "Cactus God", "Train Thorn 5,000 times.", Train(S::Thorn), 5000, 500000000.0, R::Thorn),
    q(25, "Ascension", "Rebirth 25 times.", Rebirth, 25, 1e9, R::Random),
    q(26, "The One", "Buy 20 Pets.", BuyPet, 20, 5e9, R::Speed),
    q(27, "Genocide", "Kill 200 Enemies.", KillEnemy, 200, 1e10, R::Attack),
    q(28, "Time Lord", "Rebirth 50 times.", Rebirth, 50, 1e11, R::Random),
    q(29, "Infinity", "Train Speed 50,000 times.", Train(S::Speed), 50000, 1e12, R::Speed),
    q(30, "Beyond God", "Rebirth 100 times.", Rebirth, 100, 1e12, R::Random),
];

/// Quest at the cursor, `None` once the campaign is exhausted
pub fn quest_at(index: usize) -> Option<&'static Quest> {
    QUEST_CATALOG.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_sequential() {
        for (i, quest) in QUEST_CATALOG.iter().enumerate() {
            assert_eq!(quest.id as usize, i + 1);
            assert!(quest.target > 0);
        }
    }

    #[test]
    fn test_past_the_end_is_none() {
        assert!(quest_at(0).is_some());
        assert!(quest_at(QUEST_CATALOG.len()).is_none());
    }
}
