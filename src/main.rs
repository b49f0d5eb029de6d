//! Lane Runner entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent, TouchEvent};

    use lane_runner::platform::TouchButton;
    use lane_runner::present::{Hud, Presenter};
    use lane_runner::sim::{GameEvent, Snapshot};
    use lane_runner::{Runner, Settings};

    type Game = Rc<RefCell<Runner<DomPresenter>>>;

    /// Writes HUD text into the page
    struct DomPresenter {
        score: Option<Element>,
        speed: Option<Element>,
        final_score: Option<Element>,
        game_over: Option<HtmlElement>,
        /// Last HUD written, to skip redundant DOM updates
        shown: Option<Hud>,
    }

    impl DomPresenter {
        fn new(document: &Document) -> Self {
            Self {
                score: document.get_element_by_id("score"),
                speed: document.get_element_by_id("speed"),
                final_score: document.get_element_by_id("finalScore"),
                game_over: document
                    .get_element_by_id("gameOver")
                    .and_then(|el| el.dyn_into().ok()),
                shown: None,
            }
        }
    }

    impl Presenter for DomPresenter {
        fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]) {
            for event in events {
                if let GameEvent::SpeedUp { speed } = event {
                    log::debug!("Speed up: {:.1}", speed);
                }
            }

            let hud = Hud::from_snapshot(snapshot);
            if self.shown.as_ref() == Some(&hud) {
                return;
            }

            if let Some(el) = &self.score {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = &self.speed {
                el.set_text_content(Some(&hud.speed));
            }
            if let Some(el) = &self.game_over {
                let display = match &hud.game_over {
                    Some(final_score) => {
                        if let Some(score_el) = &self.final_score {
                            score_el.set_text_content(Some(final_score));
                        }
                        "block"
                    }
                    None => "none",
                };
                let _ = el.style().set_property("display", display);
            }
            self.shown = Some(hud);
        }

        fn resize(&mut self, width: u32, height: u32) {
            log::debug!("Viewport resized to {}x{}", width, height);
        }
    }

    /// Inline settings block, or defaults when absent/invalid
    fn load_settings(document: &Document) -> Settings {
        let Some(json) = document
            .get_element_by_id(Settings::ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            log::info!("Using default settings");
            return Settings::default();
        };

        match Settings::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Settings::ELEMENT_ID);
                settings
            }
            Err(err) => {
                log::error!("Ignoring settings: {}", err);
                Settings::default()
            }
        }
    }

    fn viewport(window: &web_sys::Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {err}").into());
        }

        log::info!("Lane Runner starting...");

        let Some(window) = web_sys::window() else {
            log::error!("no window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("no document");
            return;
        };

        let settings = load_settings(&document);
        let seed = settings.seed_or(js_sys::Date::now() as u64);

        let runner = Runner::from_settings(&settings, seed, DomPresenter::new(&document));
        let game: Game = Rc::new(RefCell::new(runner));

        // Touch controls
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        if settings.show_touch_controls(&user_agent) {
            if let Some(el) = document
                .get_element_by_id("mobileControls")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property("display", "flex");
            }
        }

        let (width, height) = viewport(&window);
        game.borrow_mut().resize(width, height);

        setup_keyboard(&document, game.clone());
        setup_touch(&document, game.clone());
        setup_window_events(&window, game.clone());

        request_animation_frame(game);

        log::info!("Lane Runner running!");
    }

    fn setup_keyboard(document: &Document, game: Game) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let code = event.code();
                if code == "KeyI" && !event.repeat() {
                    g.toggle_idle_mode();
                    return;
                }
                if g.input_mut().key_down(&code) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input_mut().key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch(document: &Document, game: Game) {
        for button in TouchButton::ALL {
            let Some(btn) = document.get_element_by_id(button.element_id()) else {
                continue;
            };
            for (kind, pressed) in [("touchstart", true), ("touchend", false)] {
                // Jump is a tap; only its press matters
                if button == TouchButton::Jump && !pressed {
                    continue;
                }
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    // Must not reach the play-field restart tap below
                    event.stop_propagation();
                    game.borrow_mut().input_mut().touch(button, pressed);
                });
                let _ = btn.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Tap on the play field (not a control) restarts after a crash
        if let Some(container) = document.get_element_by_id("gameContainer") {
            let selector = TouchButton::selector();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let on_button = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(&selector).ok().flatten())
                    .is_some();
                if !on_button {
                    game.borrow_mut().input_mut().canvas_tap();
                }
            });
            let _ = container
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_window_events(window: &web_sys::Window, game: Game) {
        // Resize (projection only)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (width, height) = viewport(&window);
                game.borrow_mut().resize(width, height);
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyups will never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().suspend();
                log::debug!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Game) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Game, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Simulated display frames for the headless demo (two minutes at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u32 = 120 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_runner::present::{LogPresenter, score_text};
    use lane_runner::{Runner, Settings};

    env_logger::init();
    log::info!("Lane Runner (native) starting...");
    log::info!("Native mode is a headless autopilot demo - run the wasm build to play");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(err) => {
                log::error!("Ignoring settings from {}: {}", path, err);
                Settings::default()
            }
        },
        None => Settings::default(),
    };

    let clock_seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let seed = settings.seed_or(clock_seed);

    let mut runner = Runner::from_settings(&settings, seed, LogPresenter::default());
    runner.set_idle_mode(true);

    let frame_ms = 1000.0 / 60.0;
    let ticks: u64 = (0..HEADLESS_FRAMES)
        .map(|frame| u64::from(runner.frame(f64::from(frame) * frame_ms)))
        .sum();

    let runs = &runner.presenter().finished_runs;
    let best = runs.iter().copied().fold(0.0_f32, f32::max);
    log::info!(
        "Simulated {} ticks: {} finished runs, best {}, current {}",
        ticks,
        runs.len(),
        score_text(best),
        score_text(runner.session().state().score),
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
