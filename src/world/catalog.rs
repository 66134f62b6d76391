//! Static world layouts

use super::{Collectible, EnemyDef, Platform, PlatformKind, Portal, Rect, WorldGeometry, WorldInfo};
use crate::progression::RewardType;

pub const WORLDS: &[WorldInfo] = &[
    WorldInfo { id: 1, name: "The Hub", requirement: 0.0, spawn: (-50.0, 500.0) },
    WorldInfo { id: 3, name: "Magma Obby", requirement: 0.0, spawn: (50.0, 500.0) },
    WorldInfo { id: 2, name: "Cyber World", requirement: 100_000.0, spawn: (50.0, 500.0) },
    WorldInfo { id: 4, name: "The Void", requirement: 5_000_000.0, spawn: (0.0, 500.0) },
];

const fn plat(x: f32, y: f32, w: f32, h: f32, color: u32, kind: PlatformKind) -> Platform {
    Platform { rect: Rect::new(x, y, w, h), color, kind }
}

const fn ground(x: f32, y: f32, w: f32, h: f32, color: u32) -> Platform {
    plat(x, y, w, h, color, PlatformKind::Ground)
}

const fn portal(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    color: u32,
    name: &'static str,
    requirement: f64,
    target_world: u32,
    target: (f32, f32),
) -> Platform {
    plat(x, y, w, h, color, PlatformKind::Portal(Portal { name, target_world, target, requirement }))
}

const CHECKPOINT_COLOR: u32 = 0xfacc15;
const FINISH_COLOR: u32 = 0xef4444;
const LAVA: u32 = 0xdc2626;

const HUB_PLATFORMS: &[Platform] = &[
    // Main floor
    ground(-1000.0, 600.0, 2000.0, 100.0, 0x4ade80),
    // Magma portal area
    ground(-900.0, 500.0, 200.0, 20.0, 0x7f1d1d),
    portal(-950.0, 400.0, 20.0, 100.0, 0xef4444, "Magma Obby", 0.0, 3, (50.0, 500.0)),
    // Cyber portal area
    ground(700.0, 500.0, 200.0, 20.0, 0x1e3a8a),
    portal(850.0, 400.0, 20.0, 100.0, 0x3b82f6, "Cyber World", 100_000.0, 2, (50.0, 500.0)),
    // Center parkour
    ground(-100.0, 450.0, 200.0, 20.0, 0xfbbf24),
    ground(-50.0, 350.0, 100.0, 20.0, 0xfbbf24),
    ground(-25.0, 250.0, 50.0, 20.0, 0xfbbf24),
    // Void portal in the sky
    ground(-250.0, 100.0, 500.0, 20.0, 0x581c87),
    portal(-50.0, 0.0, 100.0, 100.0, 0x3b0764, "THE VOID", 5_000_000.0, 4, (0.0, 500.0)),
];

const CYBER_PLATFORMS: &[Platform] = &[
    ground(0.0, 600.0, 400.0, 50.0, 0x1e1b4b),
    ground(500.0, 550.0, 100.0, 20.0, 0x06b6d4),
    ground(700.0, 450.0, 80.0, 20.0, 0x06b6d4),
    ground(900.0, 350.0, 80.0, 20.0, 0x06b6d4),
    plat(1100.0, 350.0, 100.0, 20.0, CHECKPOINT_COLOR, PlatformKind::Checkpoint),
    ground(1300.0, 250.0, 60.0, 20.0, 0x06b6d4),
    ground(1500.0, 400.0, 60.0, 20.0, 0x06b6d4),
    ground(1700.0, 300.0, 60.0, 20.0, 0x06b6d4),
    plat(1900.0, 300.0, 100.0, 20.0, CHECKPOINT_COLOR, PlatformKind::Checkpoint),
    ground(2100.0, 200.0, 100.0, 20.0, 0x06b6d4),
    ground(2100.0, 100.0, 100.0, 20.0, 0x06b6d4),
    ground(2300.0, 0.0, 100.0, 20.0, 0x06b6d4),
    plat(2600.0, 0.0, 150.0, 20.0, FINISH_COLOR, PlatformKind::Finish),
];

const MAGMA_PLATFORMS: &[Platform] = &[
    ground(0.0, 600.0, 400.0, 50.0, 0x27272a),
    // Lava pit
    ground(500.0, 550.0, 100.0, 20.0, 0x27272a),
    plat(600.0, 600.0, 300.0, 20.0, LAVA, PlatformKind::Hazard),
    ground(700.0, 500.0, 50.0, 20.0, 0x27272a),
    ground(900.0, 500.0, 100.0, 20.0, 0x27272a),
    plat(1100.0, 500.0, 100.0, 20.0, CHECKPOINT_COLOR, PlatformKind::Checkpoint),
    // Lava ocean with narrow islands
    plat(1300.0, 600.0, 1000.0, 20.0, LAVA, PlatformKind::Hazard),
    ground(1350.0, 450.0, 50.0, 20.0, 0x27272a),
    ground(1550.0, 400.0, 50.0, 20.0, 0x27272a),
    ground(1750.0, 350.0, 50.0, 20.0, 0x27272a),
    plat(1950.0, 350.0, 100.0, 20.0, CHECKPOINT_COLOR, PlatformKind::Checkpoint),
    // The blind jump
    ground(2200.0, 250.0, 100.0, 20.0, 0x27272a),
    ground(2500.0, 250.0, 100.0, 20.0, 0x27272a),
    plat(2800.0, 200.0, 150.0, 20.0, FINISH_COLOR, PlatformKind::Finish),
];

const VOID_PLATFORMS: &[Platform] = &[
    ground(-500.0, 600.0, 1000.0, 50.0, 0x581c87),
    ground(600.0, 500.0, 200.0, 20.0, 0x581c87),
    ground(1000.0, 400.0, 200.0, 20.0, 0x581c87),
    ground(1400.0, 300.0, 200.0, 20.0, 0x581c87),
    // Boss arena
    ground(2000.0, 500.0, 1000.0, 50.0, 0x000000),
];

const fn gem(id: &'static str, x: f32, y: f32, radius: f32, value: f64, color: u32) -> Collectible {
    Collectible { id, pos: (x, y), radius, value, color }
}

const HUB_COLLECTIBLES: &[Collectible] = &[
    gem("hub_1", -300.0, 550.0, 15.0, 100.0, 0xfde047),
    gem("hub_2", 300.0, 550.0, 15.0, 100.0, 0xfde047),
    gem("hub_top", -25.0, 200.0, 20.0, 1000.0, 0x8b5cf6),
];

const MAGMA_COLLECTIBLES: &[Collectible] = &[
    gem("magma_1", 725.0, 450.0, 15.0, 500.0, 0xf87171),
    gem("magma_2", 1575.0, 350.0, 15.0, 2000.0, 0xf87171),
];

const CYBER_COLLECTIBLES: &[Collectible] = &[
    gem("cyber_1", 940.0, 300.0, 15.0, 2500.0, 0x67e8f9),
    gem("cyber_2", 2350.0, -50.0, 20.0, 10000.0, 0x8b5cf6),
];

const VOID_COLLECTIBLES: &[Collectible] = &[gem("void_1", 800.0, 350.0, 25.0, 100000.0, 0xe879f9)];

#[allow(clippy::too_many_arguments)]
const fn enemy(
    id: &'static str,
    name: &'static str,
    rect: Rect,
    max_hp: f64,
    damage: f64,
    reward: f64,
    reward_type: RewardType,
    pet_drop_chance: Option<f64>,
    color: u32,
) -> EnemyDef {
    EnemyDef {
        id,
        name,
        rect,
        max_hp,
        damage,
        reward,
        reward_type,
        pet_drop_chance,
        color,
        is_boss: pet_drop_chance.is_some(),
    }
}

const HUB_ENEMIES: &[EnemyDef] = &[
    enemy("slime1", "Slime", Rect::new(-300.0, 550.0, 40.0, 30.0), 100.0, 5.0, 500.0, RewardType::Speed, None, 0x84cc16),
    enemy("slime2", "Slime", Rect::new(300.0, 550.0, 40.0, 30.0), 100.0, 5.0, 500.0, RewardType::Speed, None, 0x84cc16),
    enemy("boss1", "KING SLIME", Rect::new(-600.0, 500.0, 120.0, 100.0), 5000.0, 20.0, 25000.0, RewardType::Random, Some(0.2), 0x3f6212),
];

const MAGMA_ENEMIES: &[EnemyDef] = &[
    enemy("golem1", "Magma Cube", Rect::new(920.0, 450.0, 50.0, 50.0), 2000.0, 25.0, 500.0, RewardType::Health, None, 0xea580c),
    enemy("golem2", "Magma Cube", Rect::new(1600.0, 350.0, 50.0, 50.0), 2000.0, 25.0, 500.0, RewardType::Attack, None, 0xea580c),
    enemy("boss3", "FIRE LORD", Rect::new(2300.0, 150.0, 100.0, 120.0), 50000.0, 50.0, 10000.0, RewardType::Thorn, Some(0.3), 0x7f1d1d),
];

const CYBER_ENEMIES: &[EnemyDef] = &[
    enemy("drone1", "Security Bot", Rect::new(510.0, 500.0, 40.0, 40.0), 5000.0, 40.0, 1000.0, RewardType::Jump, None, 0x0ea5e9),
    enemy("drone2", "Security Bot", Rect::new(1310.0, 200.0, 40.0, 40.0), 5000.0, 40.0, 1000.0, RewardType::Jump, None, 0x0ea5e9),
    enemy("boss2", "MECH TANK", Rect::new(2100.0, 50.0, 150.0, 80.0), 200000.0, 80.0, 50000.0, RewardType::Jump, Some(0.3), 0x1e1b4b),
];

const VOID_ENEMIES: &[EnemyDef] = &[
    enemy("void1", "Void Crawler", Rect::new(600.0, 500.0, 60.0, 60.0), 1e10, 5000.0, 100000.0, RewardType::Random, None, 0x6b21a8),
    enemy("void2", "Void Walker", Rect::new(1500.0, 500.0, 60.0, 100.0), 1e12, 50000.0, 100000.0, RewardType::Thorn, None, 0x6b21a8),
    enemy("boss4", "THE DESTROYER", Rect::new(2500.0, 300.0, 200.0, 200.0), 1e14, 1e6, 1e7, RewardType::Random, Some(0.5), 0x000000),
];

pub(super) fn geometry(id: u32) -> Option<WorldGeometry> {
    let (platforms, collectibles, enemies) = match id {
        1 => (HUB_PLATFORMS, HUB_COLLECTIBLES, HUB_ENEMIES),
        2 => (CYBER_PLATFORMS, CYBER_COLLECTIBLES, CYBER_ENEMIES),
        3 => (MAGMA_PLATFORMS, MAGMA_COLLECTIBLES, MAGMA_ENEMIES),
        4 => (VOID_PLATFORMS, VOID_COLLECTIBLES, VOID_ENEMIES),
        _ => return None,
    };
    Some(WorldGeometry { id, platforms, collectibles, enemies })
}
