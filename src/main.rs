//! Flappy Funster entry point
//!
//! In the browser this wires the frame driver, input and canvas painting
//! around a `Game`. Natively it runs headless demo rounds with the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use flappy_funster::consts::*;
    use flappy_funster::platform::LocalStorage;
    use flappy_funster::renderer::{CanvasPainter, build_scene};
    use flappy_funster::{Game, HighScoreStore, Settings};

    /// Browser session: the game plus everything the page needs around it
    struct App {
        game: Game<HighScoreStore<LocalStorage>>,
        painter: CanvasPainter,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl App {
        /// Called once per animation frame
        fn frame(&mut self, time: f64) {
            // Only advances while playing; idle and game over just repaint
            self.game.tick();
            self.track_fps(time);

            let scene = build_scene(self.game.state(), &self.settings);
            let fps = self.settings.show_fps.then_some(self.fps);
            self.painter.paint(&scene, fps);
        }

        fn track_fps(&mut self, time: f64) {
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

        /// Apply a settings key and persist the result
        fn toggle_setting(&mut self, code: &str) -> bool {
            if !self.settings.toggle_for_key(code) {
                return false;
            }
            if let Err(e) = self.settings.save(&mut LocalStorage) {
                log::warn!("Failed to save settings: {}", e);
            }
            true
        }
    }

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Flappy Funster starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(GAME_WIDTH as u32);
        canvas.set_height(GAME_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load(&LocalStorage);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(HighScoreStore::new(LocalStorage), seed),
            painter: CanvasPainter::new(ctx),
            settings,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        setup_input(&window, &canvas, app.clone())?;

        // Frame driver: re-arms itself every display refresh
        let driver: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let driver_handle = driver.clone();
        *driver_handle.borrow_mut() = Some(Closure::new(move |time: f64| {
            app.borrow_mut().frame(time);
            if let Some(callback) = driver.borrow().as_ref() {
                request_animation_frame(callback);
            }
        }));
        if let Some(callback) = driver_handle.borrow().as_ref() {
            request_animation_frame(callback);
        }

        Ok(())
    }

    /// Pointer press on the canvas or Space anywhere is the one game action.
    /// M, C and F toggle reduced motion, high contrast and the FPS counter.
    fn setup_input(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                app.borrow_mut().game.handle_action();
            });
            canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if code == "Space" {
                    event.prevent_default();
                    app.borrow_mut().game.handle_action();
                } else if app.borrow_mut().toggle_setting(&code) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use flappy_funster::platform::{FileStorage, KeyValueStorage, MemoryStorage};
    use flappy_funster::sim::{GameEvent, autopilot};
    use flappy_funster::{Game, HighScoreStore};

    #[derive(Parser, Debug)]
    #[command(
        author,
        version,
        about = "Run headless Flappy Funster rounds with the autopilot",
        long_about = None
    )]
    struct Args {
        /// RNG seed for pipe gaps (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of rounds to play
        #[arg(long, default_value_t = 3)]
        runs: u32,
        /// Frame limit per round
        #[arg(long, default_value_t = 10_000)]
        max_ticks: u64,
        /// Where the best score is kept
        #[arg(long, default_value = ".flappy-funster")]
        data_dir: PathBuf,
        /// Keep the best score in memory only
        #[arg(long)]
        no_persist: bool,
    }

    pub fn main() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let seed = match args.seed {
            Some(seed) => seed,
            None => std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .context("system clock before Unix epoch")?
                .as_millis() as u64,
        };
        log::info!("Flappy Funster (native) starting with seed {}", seed);

        if args.no_persist {
            play(Game::new(HighScoreStore::new(MemoryStorage::new()), seed), &args);
        } else {
            let storage = FileStorage::open(&args.data_dir)
                .with_context(|| format!("open data dir {:?}", args.data_dir))?;
            play(Game::new(HighScoreStore::new(storage), seed), &args);
        }
        Ok(())
    }

    fn play<K: KeyValueStorage>(mut game: Game<HighScoreStore<K>>, args: &Args) {
        for run in 1..=args.runs {
            game.reset();
            let mut new_best = false;

            while game.state().is_playing() && game.state().frame_count < args.max_ticks {
                if autopilot::should_flap(game.state()) {
                    game.flap();
                }
                let events = game.tick();
                new_best |= events
                    .iter()
                    .any(|e| matches!(e, GameEvent::NewHighScore { .. }));
            }

            let state = game.state();
            let outcome = if state.is_playing() { "survived" } else { "crashed" };
            println!(
                "run {}: {} after {} frames, score {}, best {}{}",
                run,
                outcome,
                state.frame_count,
                state.score,
                state.high_score,
                if new_best { " (new best)" } else { "" }
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}
