//! Blink Dread entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

    use blink_dread::consts::MAX_FRAME_DT;
    use blink_dread::renderer::{RenderState, build_frame};
    use blink_dread::sim::{Config, Phase, SimState, tick};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Game instance holding all state
    struct Game {
        state: SimState,
        render_state: Option<RenderState>,
        /// Jitter RNG; seeded once per page load
        rng: Pcg32,
        last_time: f64,
        /// Phase as of the previous frame, for overlay transitions
        last_phase: Phase,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: SimState::new(Config::default()),
                render_state: None,
                rng: Pcg32::seed_from_u64(seed),
                last_time: 0.0,
                last_phase: Phase::Title,
            }
        }

        /// Advance the sim by one frame's clamped delta
        fn update(&mut self, dt: f32) {
            // Negative deltas (clock anomalies) clamp to zero
            let dt = dt.clamp(0.0, MAX_FRAME_DT);
            tick(&mut self.state, dt);
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(ref mut render_state) = self.render_state else {
                return;
            };
            let (w, h) = render_state.size;
            let frame = build_frame(&self.state, Vec2::new(w as f32, h as f32), &mut self.rng);
            match render_state.render(&frame) {
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

        /// Update HUD readouts and overlays in the DOM
        fn update_hud(&mut self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Readouts (same derivation the frame uses, without jitter)
            let stamina_pct = self.state.stamina.round() as u32;
            let distance = self.state.distance.round() as u32;
            let status = if self.state.blinking {
                "BLINKING"
            } else {
                "EYES OPEN"
            };

            if let Some(bar) = document.get_element_by_id("staminaBar") {
                if let Ok(bar) = bar.dyn_into::<HtmlElement>() {
                    let _ = bar
                        .style()
                        .set_property("width", &format!("{stamina_pct}%"));
                }
            }
            if let Some(el) = document.get_element_by_id("distanceValue") {
                el.set_text_content(Some(&distance.to_string()));
            }
            if let Some(el) = document.get_element_by_id("statusValue") {
                el.set_text_content(Some(status));
            }

            // Overlays follow phase transitions
            let phase = self.state.phase;
            if phase != self.last_phase {
                set_overlay(&document, "startScreen", phase == Phase::Title);
                set_overlay(&document, "gameOver", phase == Phase::Caught);
                if phase == Phase::Caught {
                    log::info!(
                        "Caught: stamina {:.1}, distance {:.1}",
                        self.state.stamina,
                        self.state.distance
                    );
                }
                self.last_phase = phase;
            }
        }
    }

    fn set_overlay(document: &web_sys::Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            if visible {
                let _ = el.remove_attribute("hidden");
            } else {
                let _ = el.set_attribute("hidden", "");
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Blink Dread starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());

        // Show the start overlay for the initial Title phase
        set_overlay(&document, "startScreen", true);
        set_overlay(&document, "gameOver", false);

        request_animation_frame(game);

        log::info!("Blink Dread running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Primary button down = eyes closed
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    game.borrow_mut().state.set_blinking(true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release = eyes open
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() == 0 {
                    game.borrow_mut().state.set_blinking(false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Cursor leaving the page also opens the eyes
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().state.set_blinking(false);
            });
            let _ = window
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        for id in ["start", "restart"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut g = game.borrow_mut();
                    g.state.start();

                    let document = web_sys::window().unwrap().document().unwrap();
                    set_overlay(&document, "startScreen", false);
                    set_overlay(&document, "gameOver", false);
                    g.last_phase = Phase::Running;
                    log::info!("Run started");
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use blink_dread::consts::MAX_FRAME_DT;
    use blink_dread::renderer::build_frame;
    use blink_dread::sim::{Config, SimState, tick};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Blink Dread (native) starting...");
    log::info!("Run with `trunk serve` for the web version; native mode runs a headless demo.");

    let mut state = SimState::new(Config::default());
    let mut rng = Pcg32::seed_from_u64(0xB11);
    state.start();

    // Scripted run: 2 s staring, 1 s blinking, repeated
    let dt = MAX_FRAME_DT;
    for step in 0..600 {
        let t = step as f32 * dt;
        state.set_blinking(t % 3.0 >= 2.0);
        tick(&mut state, dt);

        if step % 10 == 9 {
            let frame = build_frame(&state, Vec2::new(800.0, 600.0), &mut rng);
            log::info!(
                "t={:4.1}s  stamina {:3}%  distance {:3}  {}",
                t + dt,
                frame.hud.stamina_pct,
                frame.hud.distance,
                frame.hud.status
            );
        }

        if !state.running() {
            log::info!("Caught at t={:.1}s", t + dt);
            break;
        }
    }
}
