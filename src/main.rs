//! Bangalore Flap entry point
//!
//! On the web: wires the page (difficulty buttons, HUD, input) to a
//! `Session` and drives it from `requestAnimationFrame`. Natively: runs a
//! headless game and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

    use bangalore_flap::renderer::canvas::draw_frame;
    use bangalore_flap::sim::GameEvent;
    use bangalore_flap::{Field, LoopControl, Session, TuningTable};

    /// Delay between picking a difficulty and the run starting
    const START_DELAY_MS: i32 = 300;

    /// Game instance holding the session and the canvas it draws to
    struct Game {
        session: Session,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        document: Document,
    }

    impl Game {
        fn element(&self, id: &str) -> Option<Element> {
            self.document.get_element_by_id(id)
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.element(id) {
                let classes = el.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.element(id) {
                el.set_text_content(Some(text));
            }
        }

        /// Keep the canvas at 4:3 inside its container
        fn resize_canvas(&mut self) {
            let Some(container) = self.element("game-container") else {
                return;
            };
            let field = Field::fit_to(
                container.client_width() as f32,
                container.client_height() as f32,
            );
            self.canvas.set_width(field.width as u32);
            self.canvas.set_height(field.height as u32);
            self.session.resize(field);
        }

        fn update_hud(&self) {
            self.set_text("score", &format!("Score: {}", self.session.score()));
            let mode = if self.session.autoplay() {
                " (Autoplay 🤖)"
            } else {
                ""
            };
            self.set_text(
                "current-obstacle",
                &format!("Obstacle: {}{}", self.session.current_obstacle_type().name, mode),
            );
        }

        fn show_game_over(&self) {
            self.set_hidden("hud", true);
            if let Some(summary) = self.session.summary() {
                self.set_text("final-score", &format!("Score: {}", summary.score));
                self.set_text(
                    "obstacle-name",
                    &format!("Crashed into: {}", summary.obstacle_type.name),
                );
            }
            self.set_hidden("game-over-screen", false);
        }

        fn start(&mut self) -> u64 {
            let seed = js_sys::Date::now() as u64;
            let generation = self.session.start(seed);
            self.set_hidden("start-screen", true);
            self.set_hidden("hud", false);
            self.update_hud();
            generation
        }

        fn restart(&mut self) {
            self.session.restart();
            self.set_hidden("game-over-screen", true);
            self.set_hidden("start-screen", false);
        }

        fn jump(&mut self) -> bool {
            self.session.request_jump()
        }
    }

    /// Optional `<script id="tuning" type="application/json">` override
    fn load_tuning(document: &Document) -> TuningTable {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return TuningTable::default();
        };
        match TuningTable::from_json(&json) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("Ignoring tuning override: {}", e);
                TuningTable::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bangalore Flap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let tuning = load_tuning(&document);
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(tuning, Field::default()),
            canvas,
            ctx,
            document,
        }));
        game.borrow_mut().resize_canvas();

        setup_resize(game.clone());
        setup_difficulty_buttons(game.clone());
        setup_restart_button(game.clone());
        setup_controls(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, generation: u64) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game, generation);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, generation: u64) {
        let control = {
            let mut g = game.borrow_mut();
            if g.session.generation() != generation {
                return;
            }

            let control = g.session.tick(generation);
            if let Err(e) = draw_frame(&g.ctx, &g.session) {
                log::warn!("Render error: {:?}", e);
            }

            let mut hud_dirty = false;
            for event in g.session.drain_events() {
                match event {
                    GameEvent::ObstaclePassed { .. } | GameEvent::ObstacleTypeChanged { .. } => {
                        hud_dirty = true;
                    }
                    GameEvent::GameOver { .. } => g.show_game_over(),
                }
            }
            if hud_dirty {
                g.update_hud();
            }
            control
        };

        if control == LoopControl::Continue {
            request_animation_frame(game, generation);
        }
    }

    fn start_game(game: Rc<RefCell<Game>>) {
        let generation = game.borrow_mut().start();
        request_animation_frame(game, generation);
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize_canvas();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_difficulty_buttons(game: Rc<RefCell<Game>>) {
        let document = game.borrow().document.clone();
        let Ok(buttons) = document.query_selector_all(".difficulty-btn") else {
            return;
        };

        let all: Vec<Element> = (0..buttons.length())
            .filter_map(|i| buttons.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        for btn in &all {
            let game = game.clone();
            let others = all.clone();
            let this = btn.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                for other in &others {
                    let _ = other.class_list().remove_1("selected");
                }
                let _ = this.class_list().add_1("selected");

                let name = this.get_attribute("data-difficulty").unwrap_or_default();
                if game.borrow_mut().session.select_difficulty(&name).is_err() {
                    return;
                }

                let game = game.clone();
                let start = Closure::once(move || start_game(game));
                if let Some(window) = web_sys::window() {
                    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        start.as_ref().unchecked_ref(),
                        START_DELAY_MS,
                    );
                }
                start.forget();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = game.borrow().document.clone();
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_controls(game: Rc<RefCell<Game>>) {
        let (document, canvas) = {
            let g = game.borrow();
            (g.document.clone(), g.canvas.clone())
        };

        // Space to jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.code() == "Space" && game.borrow_mut().jump() {
                    event.prevent_default();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click / tap on the canvas
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
                if game.borrow_mut().jump() {
                    event.prevent_default();
                }
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                if game.borrow_mut().jump() {
                    event.prevent_default();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keep the page from scrolling under a finger
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bangalore_flap::{LoopControl, Session};

    /// Headless runs stop here even if autoplay keeps going
    const MAX_TICKS: u32 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Bangalore Flap (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the playable version");

    let mut args = std::env::args().skip(1);
    let difficulty = args.next().unwrap_or_else(|| "autoplay".to_string());
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut session = Session::default();
    if let Err(e) = session.select_difficulty(&difficulty) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    let generation = session.start(seed);
    let mut ticks = 0;
    while ticks < MAX_TICKS && session.tick(generation) == LoopControl::Continue {
        ticks += 1;
    }

    match session.summary() {
        Some(summary) => println!(
            "Score: {} | Crashed into: {} ({:?}) after {} ticks",
            summary.score, summary.obstacle_type.name, summary.cause, ticks
        ),
        None => println!(
            "Score: {} | Still flying after {} ticks ({})",
            session.score(),
            ticks,
            session.current_obstacle_type().name
        ),
    }
}
