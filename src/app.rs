//! Frame driver
//!
//! Owns the player record, its simulation mirror and the bridge between
//! them. Each fixed step runs pull, tick, push in that order; UI actions
//! mutate the record between frames and are picked up by the next pull.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::advice::{AdviceDesk, AdviceError, AdviceQuery, AdviceSource};
use crate::bridge::Bridge;
use crate::consts::*;
use crate::persistence::{self, PersistenceError, SaveStore};
use crate::platform::HeldKeys;
use crate::progression::StatKind;
use crate::record::{PlayerRecord, PurchaseOutcome};
use crate::renderer::{Camera, DamagePopup, Vertex, build_scene};
use crate::settings::Settings;
use crate::sim::{SimEvent, SimState, tick};
use crate::tuning::Tuning;

/// Longest frame the accumulator will accept (tab switches, breakpoints)
const MAX_FRAME_DT: f32 = 0.1;

pub struct Game {
    record: PlayerRecord,
    sim: SimState,
    bridge: Bridge,
    pub tuning: Tuning,
    pub settings: Settings,
    pub advice: AdviceDesk,
    held: HeldKeys,
    modal_open: bool,
    /// Attack click waiting for the next tick, in world coordinates
    pending_click: Option<Vec2>,
    accumulator: f32,
    rng: Pcg32,
    camera: Camera,
    popups: Vec<DamagePopup>,
    /// Record changed in a way worth saving
    dirty: bool,
}

impl Game {
    pub fn new(record: PlayerRecord, settings: Settings, seed: u64) -> Self {
        let mut bridge = Bridge::new(&record);
        let sim = bridge.spawn_mirror(&record);
        let viewport = Vec2::new(1280.0, 720.0);
        Self {
            camera: Camera::follow(sim.pos, viewport),
            record,
            sim,
            bridge,
            tuning: Tuning::default(),
            settings,
            advice: AdviceDesk::default(),
            held: HeldKeys::default(),
            modal_open: false,
            pending_click: None,
            accumulator: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            popups: Vec::new(),
            dirty: false,
        }
    }

    pub fn record(&self) -> &PlayerRecord {
        &self.record
    }

    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera = Camera::follow(self.sim.pos, Vec2::new(width, height));
    }

    /// Advance by a frame's wall time; returns every event the ticks emitted
    pub fn update(&mut self, dt: f32) -> Vec<SimEvent> {
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        self.camera = Camera::follow(self.sim.pos, self.camera.viewport);
        self.advice.tick(dt);
        events
    }

    /// One fixed step: pull, tick, push
    fn step(&mut self) -> Vec<SimEvent> {
        let mut input = self.held.to_input(self.modal_open);
        input.attack = self.pending_click.take();

        self.bridge.pull(&self.record, &mut self.sim);
        let events = tick(&mut self.sim, &input, &self.tuning, &mut self.rng);
        self.bridge.push(&events, &mut self.sim, &mut self.record);

        self.popups.retain_mut(DamagePopup::step);
        for event in &events {
            match event {
                SimEvent::DamageNumber { pos, amount } => {
                    self.popups.push(DamagePopup::new(*pos, *amount));
                }
                SimEvent::WorldTransition { world, .. } => {
                    self.popups.clear();
                    log::info!("Entered world {}", world);
                }
                SimEvent::CourseComplete => log::info!("Course complete"),
                SimEvent::EnemyKilled { name, boss: true, level, .. } => {
                    log::info!("Boss {} defeated (now level {})", name, level);
                }
                _ => {}
            }
        }
        if events.iter().any(SimEvent::is_persistent) {
            self.dirty = true;
        }
        events
    }

    // === Input ===

    pub fn key_down(&mut self, code: &str) {
        if let Some(stat) = self.held.key_event(code, true, self.modal_open) {
            self.train(stat);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.held.key_event(code, false, self.modal_open);
    }

    /// Window lost focus: nothing stays held
    pub fn blur(&mut self) {
        self.held.release_all();
    }

    /// Pointer click on the render surface, in CSS pixels
    pub fn click(&mut self, screen: Vec2) {
        if self.modal_open {
            return;
        }
        self.pending_click = Some(self.camera.screen_to_world(screen));
    }

    pub fn set_modal_open(&mut self, open: bool) {
        if open {
            self.held.release_all();
            self.pending_click = None;
        }
        self.modal_open = open;
    }

    // === UI actions ===

    pub fn train(&mut self, stat: StatKind) {
        self.record.train(stat);
        self.dirty = true;
    }

    pub fn rebirth(&mut self) -> bool {
        let done = self.record.rebirth();
        if done {
            log::info!("Rebirth {} complete", self.record.rebirths);
            self.dirty = true;
        }
        done
    }

    pub fn buy_pet(&mut self, template_id: &str) -> PurchaseOutcome {
        let outcome = self.record.purchase_pet(template_id, &mut self.rng);
        self.mark_if_purchased(outcome)
    }

    pub fn buy_skin(&mut self, skin_id: &str) -> PurchaseOutcome {
        let outcome = self.record.purchase_skin(skin_id);
        self.mark_if_purchased(outcome)
    }

    pub fn equip_skin(&mut self, skin_id: &str) -> bool {
        let done = self.record.equip_skin(skin_id);
        self.dirty |= done;
        done
    }

    pub fn travel(&mut self, world_id: u32) -> bool {
        let done = self.record.travel(world_id);
        self.dirty |= done;
        done
    }

    pub fn go_home(&mut self) {
        self.record.go_home();
        self.dirty = true;
    }

    pub fn claim_quest(&mut self) -> bool {
        let done = self.record.claim_quest(&mut self.rng);
        self.dirty |= done;
        done
    }

    fn mark_if_purchased(&mut self, outcome: PurchaseOutcome) -> PurchaseOutcome {
        if outcome == PurchaseOutcome::Purchased {
            self.dirty = true;
        }
        outcome
    }

    // === Advice ===

    /// Start an advice request; `None` while one is already pending
    pub fn begin_advice(&mut self) -> Option<AdviceQuery> {
        self.advice.begin(AdviceQuery {
            speed: self.record.speed,
            rebirths: self.record.rebirths,
            world: self.record.world,
        })
    }

    pub fn finish_advice(&mut self, result: Result<String, AdviceError>) {
        self.advice.finish(result);
    }

    /// Begin and answer from a synchronous source in one go
    pub fn request_advice(&mut self, source: &impl AdviceSource) {
        if let Some(query) = self.begin_advice() {
            let result = source.advise(&query);
            self.finish_advice(result);
        }
    }

    // === Persistence ===

    /// True once since the last call if anything worth saving changed
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn save_to(&mut self, store: &mut impl SaveStore) -> Result<(), PersistenceError> {
        self.record.position = self.sim.pos;
        persistence::save(store, &self.record)?;
        log::debug!("Saved record");
        Ok(())
    }

    // === Rendering ===

    pub fn scene(&self) -> Vec<Vertex> {
        build_scene(
            &self.sim,
            &self.camera,
            &self.popups,
            &self.settings,
            &self.tuning,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::GuideTips;
    use crate::platform::MemoryStore;
    use crate::world;

    fn game() -> Game {
        Game::new(PlayerRecord::default(), Settings::default(), 7)
    }

    fn run_ticks(game: &mut Game, n: u32) -> Vec<SimEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(game.update(SIM_DT + 1e-5));
        }
        events
    }

    #[test]
    fn test_update_runs_fixed_substeps() {
        let mut g = game();
        let before = g.sim().time_ticks;
        g.update(SIM_DT * 2.5);
        assert_eq!(g.sim().time_ticks - before, 2);
        g.update(10.0);
        assert_eq!(g.sim().time_ticks - before, 2 + MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_training_hotkey() {
        let mut g = game();
        g.key_down("KeyE");
        assert_eq!(g.record().speed, 1.0);
        assert!(g.take_dirty());
        assert!(!g.take_dirty());
    }

    #[test]
    fn test_modal_blocks_hotkeys_and_clicks() {
        let mut g = game();
        g.set_modal_open(true);
        g.key_down("KeyE");
        g.click(Vec2::new(100.0, 100.0));
        assert_eq!(g.record().speed, 0.0);
        assert!(g.pending_click.is_none());
    }

    #[test]
    fn test_travel_is_adopted_by_next_tick() {
        let mut g = game();
        assert!(g.travel(3));
        run_ticks(&mut g, 1);
        assert_eq!(g.sim().world, 3);
        let spawn = world::info(3).map(|w| w.spawn_pos()).unwrap();
        assert!((g.sim().pos.x - spawn.x).abs() < 10.0);
    }

    #[test]
    fn test_locked_travel_is_rejected() {
        let mut g = game();
        assert!(!g.travel(2));
        run_ticks(&mut g, 1);
        assert_eq!(g.sim().world, HUB_WORLD);
    }

    #[test]
    fn test_click_kills_enemy_under_cursor() {
        let mut g = game();
        for _ in 0..200 {
            g.train(StatKind::Attack);
        }
        let slime = world::geometry(HUB_WORLD)
            .and_then(|geo| geo.enemies.iter().find(|e| e.id == "slime1"))
            .map(|e| e.rect.center())
            .unwrap();
        let screen = g.camera().world_to_screen(slime);
        g.click(screen);
        let events = run_ticks(&mut g, 1);
        assert!(events.iter().any(|e| matches!(e, SimEvent::EnemyKilled { .. })));
        assert!(g.record().speed >= 500.0);
    }

    #[test]
    fn test_save_round_trip() {
        let mut g = game();
        g.train(StatKind::Jump);
        let mut store = MemoryStore::default();
        g.save_to(&mut store).unwrap();
        let loaded = persistence::load(&store);
        assert_eq!(loaded.jump, g.record().jump);
    }

    #[test]
    fn test_advice_from_local_source() {
        let mut g = game();
        g.request_advice(&GuideTips);
        assert!(!g.advice.is_loading());
        assert!(g.advice.message().is_some());
    }

    #[test]
    fn test_scene_is_drawable() {
        let g = game();
        let scene = g.scene();
        assert!(!scene.is_empty());
        assert_eq!(scene.len() % 3, 0);
    }
}
