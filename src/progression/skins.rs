//! Static skin catalog

use super::stats::StatKind;

/// Which stat currency pays for a skin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostType {
    Stat(StatKind),
    /// Requires and deducts the cost from every spendable stat
    All,
}

/// A skin and its stat multipliers
#[derive(Debug, Clone, Copy)]
pub struct Skin {
    pub id: &'static str,
    pub name: &'static str,
    /// Display color (sRGB hex)
    pub color: u32,
    pub cost_type: CostType,
    pub cost: f64,
    pub speed_mult: f64,
    pub jump_mult: f64,
    pub attack_mult: f64,
    pub health_mult: Option<f64>,
    pub thorn_mult: Option<f64>,
    pub luck_mult: Option<f64>,
}

impl Skin {
    const fn base(id: &'static str, name: &'static str, color: u32, cost_type: CostType, cost: f64) -> Self {
        Self {
            id,
            name,
            color,
            cost_type,
            cost,
            speed_mult: 1.0,
            jump_mult: 1.0,
            attack_mult: 1.0,
            health_mult: None,
            thorn_mult: None,
            luck_mult: None,
        }
    }

    const fn mults(mut self, speed: f64, jump: f64, attack: f64) -> Self {
        self.speed_mult = speed;
        self.jump_mult = jump;
        self.attack_mult = attack;
        self
    }

    const fn with_health(mut self, m: f64) -> Self {
        self.health_mult = Some(m);
        self
    }

    const fn with_thorn(mut self, m: f64) -> Self {
        self.thorn_mult = Some(m);
        self
    }

    const fn with_luck(mut self, m: f64) -> Self {
        self.luck_mult = Some(m);
        self
    }

    /// Multiplier this skin applies to a stat (1 when unspecified)
    pub fn stat_mult(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Speed => self.speed_mult,
            StatKind::Jump => self.jump_mult,
            StatKind::Attack => self.attack_mult,
            StatKind::Health => self.health_mult.unwrap_or(1.0),
            StatKind::Thorn => self.thorn_mult.unwrap_or(1.0),
        }
    }

    pub fn luck(&self) -> f64 {
        self.luck_mult.unwrap_or(1.0)
    }

    /// Color as linear-ish RGBA floats for the renderer
    pub fn rgba(&self) -> [f32; 4] {
        hex_to_rgba(self.color)
    }
}

pub fn hex_to_rgba(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

pub const DEFAULT_SKIN: &str = "default";

use self::CostType::{All, Stat};
use super::stats::StatKind::{Attack, Health, Jump, Speed, Thorn};

pub const SKIN_CATALOG: &[Skin] = &[
    Skin::base("default", "Red Runner", 0xef4444, Stat(Speed), 0.0),
    Skin::base("blue", "Blue Bolt", 0x3b82f6, Stat(Speed), 5000.0).mults(1.5, 1.0, 1.0),
    Skin::base("green", "Jumper Green", 0x22c55e, Stat(Jump), 5000.0).mults(1.0, 1.5, 1.0),
    Skin::base("paladin", "Paladin", 0xe5e7eb, Stat(Health), 10000.0).mults(0.8, 0.8, 1.0).with_health(2.0),
    Skin::base("spike", "Spike", 0x10b981, Stat(Thorn), 10000.0).with_thorn(2.0),
    Skin::base("clover", "Lucky Clover", 0x4ade80, Stat(Speed), 15000.0).with_luck(1.5),
    Skin::base("gladiator", "Gladiator", 0x9ca3af, Stat(Attack), 10000.0).mults(1.0, 1.0, 2.0),
    Skin::base("cactus", "Cactus King", 0x166534, Stat(Thorn), 50000.0).mults(0.9, 0.9, 1.0).with_thorn(5.0),
    Skin::base("tank", "Iron Tank", 0x475569, Stat(Health), 50000.0).mults(0.7, 0.7, 2.0).with_health(5.0),
    Skin::base("dice", "High Roller", 0xfcd34d, Stat(Jump), 25000.0).with_luck(2.0),
    Skin::base("cyborg", "Cyborg", 0x0ea5e9, Stat(Attack), 50000.0).mults(2.0, 2.0, 3.0),
    Skin::base("gold", "Golden God", 0xeab308, Stat(Speed), 1000000.0).mults(3.0, 3.0, 3.0),
    Skin::base("titan", "Titan", 0x374151, Stat(Health), 1000000.0).mults(1.0, 1.0, 5.0).with_health(10.0),
    Skin::base("fortune", "Fortune Teller", 0xa855f7, Stat(Attack), 250000.0).mults(1.5, 1.5, 1.5).with_luck(3.0),
    Skin::base("ninja", "Shadow Ninja", 0x171717, Stat(Jump), 500000.0).mults(2.0, 5.0, 4.0),
    Skin::base("demon", "Demon King", 0x7f1d1d, Stat(Attack), 1000000.0).mults(3.0, 3.0, 10.0),
    Skin::base("neon", "Neon Overload", 0xd946ef, Stat(Speed), 250000.0).mults(5.0, 1.0, 1.0),
    Skin::base("omnipotent", "The Omnipotent", 0xffffff, All, 10000000.0)
        .mults(1e7, 1e7, 1e7)
        .with_health(1e7)
        .with_luck(1e7),
    Skin::base("eternal", "The Eternal", 0x00ffff, All, 10000000.0)
        .mults(2.3475764723673743e19, 2.3475764723673743e19, 2.3475764723673743e19)
        .with_health(2.3475764723673743e19)
        .with_thorn(2.3475764723673743e19)
        .with_luck(2.3475764723673743e19),
];

pub fn find_skin(id: &str) -> Option<&'static Skin> {
    SKIN_CATALOG.iter().find(|s| s.id == id)
}

/// The equipped skin, falling back to the default for unknown ids
pub fn skin_or_default(id: &str) -> &'static Skin {
    find_skin(id).unwrap_or(&SKIN_CATALOG[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skin_is_neutral() {
        let skin = skin_or_default(DEFAULT_SKIN);
        for stat in StatKind::ALL {
            assert_eq!(skin.stat_mult(stat), 1.0);
        }
        assert_eq!(skin.luck(), 1.0);
        assert_eq!(skin.cost, 0.0);
    }

    #[test]
    fn test_unknown_skin_falls_back() {
        assert_eq!(skin_or_default("nope").id, DEFAULT_SKIN);
    }

    #[test]
    fn test_optional_mults() {
        let tank = find_skin("tank").unwrap();
        assert_eq!(tank.stat_mult(StatKind::Health), 5.0);
        assert_eq!(tank.stat_mult(StatKind::Thorn), 1.0);
        assert_eq!(find_skin("clover").unwrap().luck(), 1.5);
    }

    #[test]
    fn test_hex_to_rgba() {
        let c = hex_to_rgba(0xff0000);
        assert_eq!(c, [1.0, 0.0, 0.0, 1.0]);
    }
}
