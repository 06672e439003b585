//! Cube Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use cube_rush::Settings;
    use cube_rush::consts::*;
    use cube_rush::renderer;
    use cube_rush::sim::{GameState, Level, Phase, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        viewport: (f64, f64),
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Phase the DOM currently reflects, to avoid churning it every frame
        shown_phase: Option<Phase>,
    }

    impl Game {
        fn new(viewport: (f64, f64)) -> Self {
            let ground_y = viewport.1 as f32 - GROUND_BAND;
            Self {
                state: GameState::new(Level::classic(), ground_y),
                settings: Settings::load(),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                viewport,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                shown_phase: None,
            }
        }

        fn set_viewport(&mut self, w: f64, h: f64) {
            self.viewport = (w, h);
            self.state.set_viewport_height(h as f32);
        }

        /// Run simulation ticks from the frame-time accumulator
        ///
        /// The jump latch is level-sensitive, so it is deliberately not
        /// cleared between ticks; release events clear it.
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&self, ctx: &CanvasRenderingContext2d, time: f64) {
            renderer::draw(
                ctx,
                &self.state,
                &self.settings,
                self.viewport.0,
                self.viewport.1,
                time,
            );
        }

        /// Track frame times for the FPS counter
        fn record_frame(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Sync the DOM message/restart affordance with the phase
        fn update_hud(&mut self) {
            let phase = self.state.phase;
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("hud-fps") {
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                }
            }
            if self.settings.show_attempts {
                if let Some(el) = document.get_element_by_id("hud-attempts") {
                    el.set_text_content(Some(&format!("attempt {}", self.state.attempts)));
                }
            }

            // Message and restart button only change on phase transitions
            if self.shown_phase == Some(phase) {
                return;
            }
            self.shown_phase = Some(phase);

            let message = document.get_element_by_id("message");
            let restart = document.get_element_by_id("restart-btn");
            match phase {
                Phase::GameOver | Phase::LevelComplete => {
                    let text = if phase == Phase::GameOver {
                        "Game Over!"
                    } else {
                        "Level Complete!"
                    };
                    if let Some(el) = message {
                        el.set_text_content(Some(text));
                        let _ = el.set_attribute("class", "");
                    }
                    if let Some(el) = restart {
                        let _ = el.set_attribute("class", "");
                    }
                    log::info!(
                        "{} (tick {}, {:.0}% of the level)",
                        text,
                        self.state.time_ticks,
                        self.state.progress() * 100.0
                    );
                }
                Phase::Running => {
                    if let Some(el) = message {
                        let _ = el.set_attribute("class", "hidden");
                    }
                    if let Some(el) = restart {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }

        /// Reset back to launch state (restart button)
        fn restart(&mut self) {
            if self.state.phase.is_terminal() {
                self.state.restart();
                self.input = TickInput::default();
                self.accumulator = 0.0;
                log::info!("Restarted (attempt {})", self.state.attempts);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cube Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let game = Rc::new(RefCell::new(Game::new((width, height))));

        setup_input_handlers(game.clone());
        setup_resize_handler(canvas.clone(), game.clone());
        setup_restart_button(game.clone());

        request_animation_frame(game, Rc::new(ctx));

        log::info!("Cube Rush running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Space engages the jump latch; release clears it
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    game.borrow_mut().input.jump = true;
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" {
                    game.borrow_mut().input.jump = false;
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer press/release mirrors the keyboard latch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.jump = true;
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.jump = false;
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.jump = true;
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::TouchEvent| {
                game.borrow_mut().input.jump = false;
            });
            let _ = window
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            game.borrow_mut().set_viewport(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, ctx: Rc<CanvasRenderingContext2d>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, ctx, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, ctx: Rc<CanvasRenderingContext2d>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(&ctx, time);
            g.record_frame(time);
            g.update_hud();
        }

        // Keep scheduling even while terminal: ticks are no-ops and the
        // restart affordance stays live.
        request_animation_frame(game, ctx);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cube_rush::consts::DEFAULT_GROUND_Y;
    use cube_rush::sim::{GameState, Level, TickInput, tick};

    env_logger::init();
    log::info!("Cube Rush (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless demo: run the sim with no input until it ends
    let mut state = GameState::new(Level::classic(), DEFAULT_GROUND_Y);
    let input = TickInput::default();
    let mut safety = 10_000u32;
    while !state.phase.is_terminal() && safety > 0 {
        tick(&mut state, &input);
        safety -= 1;
    }
    log::info!(
        "Demo run ended: {:?} after {} ticks ({:.0}% of the level)",
        state.phase,
        state.time_ticks,
        state.progress() * 100.0
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
