//! Speed Obby entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use speed_obby::advice::GuideTips;
    use speed_obby::consts::*;
    use speed_obby::persistence;
    use speed_obby::platform::LocalStore;
    use speed_obby::progression::{PET_CATALOG, SKIN_CATALOG, StatKind, rebirth_cost};
    use speed_obby::renderer::RenderState;
    use speed_obby::world::{self, WORLDS};
    use speed_obby::{Game, Settings};

    /// Save at most this often while the record keeps changing (ms)
    const SAVE_INTERVAL_MS: f64 = 2000.0;

    /// Browser-side wrapper around the game
    struct Shell {
        game: Game,
        render_state: Option<RenderState>,
        store: Option<LocalStore>,
        last_time: f64,
        last_save: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Shell {
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            self.last_time = time;

            self.game.update(dt);

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 && time > oldest_time {
                self.fps = (60000.0 / (time - oldest_time)).round() as u32;
            }

            if time - self.last_save >= SAVE_INTERVAL_MS {
                self.save_if_dirty(time);
            }

            self.render();
            self.update_hud();
        }

        fn save_if_dirty(&mut self, time: f64) {
            if !self.game.take_dirty() {
                return;
            }
            if let Some(store) = self.store.as_mut() {
                if let Err(e) = self.game.save_to(store) {
                    log::warn!("Save failed: {}", e);
                }
            }
            self.last_save = time;
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = self.game.scene();
            let viewport = self.game.camera().viewport;
            match render_state.render(&vertices, viewport, self.game.sim().world) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let record = self.game.record();
            let sim = self.game.sim();

            let set = |id: &str, text: &str| {
                if let Some(el) = document.get_element_by_id(id) {
                    if el.text_content().as_deref() != Some(text) {
                        el.set_text_content(Some(text));
                    }
                }
            };

            for stat in StatKind::ALL {
                if stat != StatKind::Health {
                    set(&dom_id("hud", stat), &format!("{:.0}", record.stat(stat)));
                }
            }
            set(
                "hud-health",
                &format!("{:.0} / {:.0}", sim.health, sim.effective_max_health()),
            );
            set("hud-rebirths", &record.rebirths.to_string());
            set("hud-rebirth-cost", &format!("{:.0}", rebirth_cost(record.rebirths)));
            if let Some(info) = world::info(sim.world) {
                set("hud-world", info.name);
            }
            match record.current_quest() {
                Some(quest) => set(
                    "hud-quest",
                    &format!("{} ({}/{})", quest.description, record.quest_progress, quest.target),
                ),
                None => set("hud-quest", "All quests complete!"),
            }
            set("hud-advice", self.game.advice.message().unwrap_or(""));
            set("hud-fps", &self.fps.to_string());

            if let Some(el) = document.get_element_by_id("hud-fps") {
                let class = if self.game.settings.show_fps { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            if let Some(el) = document.get_element_by_id("advice-btn") {
                if self.game.advice.is_loading() {
                    let _ = el.set_attribute("disabled", "");
                } else {
                    let _ = el.remove_attribute("disabled");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Speed Obby starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Surface in device pixels, scene in CSS pixels
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let store = match LocalStore::open() {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!("Saving disabled: {}", e);
                None
            }
        };
        let record = match store.as_ref() {
            Some(store) => persistence::load(store),
            None => Default::default(),
        };

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(record, Settings::load(), seed);
        game.set_viewport(client_w as f32, client_h as f32);
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let render_state = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                match instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::HighPerformance,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await
                {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        RenderState::new(surface, &adapter, width, height)
                            .await
                            .map_err(|e| log::error!("Renderer unavailable: {}", e))
                            .ok()
                    }
                    Err(e) => {
                        log::error!("No GPU adapter: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                None
            }
        };

        let shell = Rc::new(RefCell::new(Shell {
            game,
            render_state,
            store,
            last_time: 0.0,
            last_save: 0.0,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        setup_input_handlers(&canvas, shell.clone());
        setup_buttons(&document, shell.clone());
        setup_auto_save(shell.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(shell);

        log::info!("Speed Obby running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if matches!(code.as_str(), "Space" | "ArrowUp" | "ArrowLeft" | "ArrowRight") {
                    event.prevent_default();
                }
                shell.borrow_mut().game.key_down(&code);
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                shell.borrow_mut().game.key_up(&event.code());
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur drops held keys
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                shell.borrow_mut().game.blur();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click attacks whatever is under the cursor
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                shell.borrow_mut().game.click(Vec2::new(x, y));
            });
            let _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// `hud-speed`, `train-thorn`, ...
    fn dom_id(prefix: &str, stat: StatKind) -> String {
        format!("{}-{}", prefix, stat.as_str().to_lowercase())
    }

    /// Wire a DOM button to a game action, if the button exists
    fn on_click(
        document: &Document,
        id: &str,
        shell: &Rc<RefCell<Shell>>,
        action: impl Fn(&mut Shell) + 'static,
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            return;
        };
        let shell = shell.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            action(&mut shell.borrow_mut());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_modal(document: &Document, id: &str, shell: &mut Shell, open: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if open { "modal" } else { "modal hidden" });
        }
        shell.game.set_modal_open(open);
    }

    fn setup_buttons(document: &Document, shell: Rc<RefCell<Shell>>) {
        for stat in StatKind::ALL {
            on_click(document, &dom_id("train", stat), &shell, move |s| {
                s.game.train(stat)
            });
        }

        on_click(document, "rebirth-btn", &shell, |s| {
            s.game.rebirth();
        });
        on_click(document, "home-btn", &shell, |s| s.game.go_home());
        on_click(document, "quest-claim-btn", &shell, |s| {
            s.game.claim_quest();
        });
        on_click(document, "advice-btn", &shell, |s| {
            if s.game.settings.advice_enabled {
                s.game.request_advice(&GuideTips);
            }
        });

        for info in WORLDS {
            let id = info.id;
            on_click(document, &format!("travel-{}", id), &shell, move |s| {
                s.game.travel(id);
            });
        }

        for template in PET_CATALOG {
            let id = template.id;
            on_click(document, &format!("buy-pet-{}", id), &shell, move |s| {
                let outcome = s.game.buy_pet(id);
                log::info!("Pet purchase {}: {:?}", id, outcome);
            });
        }

        for skin in SKIN_CATALOG {
            let id = skin.id;
            on_click(document, &format!("buy-skin-{}", id), &shell, move |s| {
                let outcome = s.game.buy_skin(id);
                log::info!("Skin purchase {}: {:?}", id, outcome);
            });
            on_click(document, &format!("equip-skin-{}", id), &shell, move |s| {
                s.game.equip_skin(id);
            });
        }

        // Shop and travel modals gate keyboard input while open
        for modal in ["shop", "travel"] {
            let doc = document.clone();
            on_click(document, &format!("open-{}", modal), &shell, move |s| {
                set_modal(&doc, &format!("{}-modal", modal), s, true)
            });
            let doc = document.clone();
            on_click(document, &format!("close-{}", modal), &shell, move |s| {
                set_modal(&doc, &format!("{}-modal", modal), s, false)
            });
        }
    }

    fn setup_auto_save(shell: Rc<RefCell<Shell>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut s = shell.borrow_mut();
                s.game.blur();
                s.save_if_dirty(js_sys::Date::now());
                log::info!("Saved on tab hide");
            }
        });
        let _ = document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(shell, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(shell: Rc<RefCell<Shell>>, time: f64) {
        shell.borrow_mut().frame(time);
        request_animation_frame(shell);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use speed_obby::advice::GuideTips;
    use speed_obby::consts::*;
    use speed_obby::persistence;
    use speed_obby::platform::MemoryStore;
    use speed_obby::progression::StatKind;
    use speed_obby::{Game, Settings};

    env_logger::init();
    log::info!("Speed Obby (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let mut store = MemoryStore::default();
    let record = persistence::load(&store);
    let mut game = Game::new(record, Settings::load(), 42);

    // A few seconds of training and running right across the hub
    for _ in 0..50 {
        game.train(StatKind::Speed);
        game.train(StatKind::Jump);
    }
    game.key_down("ArrowRight");
    for _ in 0..TICKS_PER_SECOND * 3 {
        game.update(SIM_DT);
    }
    game.key_up("ArrowRight");

    game.request_advice(&GuideTips);
    if let Some(tip) = game.advice.message() {
        log::info!("Game Master: {}", tip);
    }

    if game.take_dirty() {
        if let Err(e) = game.save_to(&mut store) {
            log::warn!("Save failed: {}", e);
        }
    }

    let record = game.record();
    println!(
        "world {} at ({:.0}, {:.0}) speed {:.0} jump {:.0} health {:.0}",
        game.sim().world,
        game.sim().pos.x,
        game.sim().pos.y,
        record.speed,
        record.jump,
        game.sim().health
    );
}
