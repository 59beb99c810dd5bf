//! Fruit Catch entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use fruit_catch::platform::{Controls, Key, SystemClock};
    use fruit_catch::renderer::{CanvasRenderer, DomRenderer, Renderer};
    use fruit_catch::sim::{GameSession, Viewport};
    use fruit_catch::{FrameLoop, FrameStatus, GameError, RendererKind, Settings};

    /// Game instance shared between the frame callback and event handlers
    struct Game {
        frames: FrameLoop<Box<dyn Renderer>, SystemClock>,
        controls: Controls,
    }

    impl Game {
        fn viewport(&self) -> Viewport {
            self.frames.session().viewport
        }

        fn is_over(&self) -> bool {
            self.frames.session().phase.is_over()
        }
    }

    /// Restart is a full page reload
    fn reload() {
        if let Some(window) = web_sys::window() {
            log::info!("Restarting");
            if let Err(e) = window.location().reload() {
                log::error!("Reload failed: {:?}", e);
            }
        }
    }

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }

        log::info!("Fruit Catch starting...");

        let window = web_sys::window().ok_or(GameError::MissingElement("window"))?;
        let document = window.document().ok_or(GameError::MissingElement("document"))?;

        let settings = Settings::load();
        let width = window.inner_width()?.as_f64().unwrap_or_default() as f32;
        let height = window.inner_height()?.as_f64().unwrap_or_default() as f32;
        let viewport = Viewport::new(width, height);

        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(viewport, settings.clone(), seed)?;
        log::info!(
            "Game initialized with seed {} ({}x{}, {} renderer)",
            seed,
            width,
            height,
            settings.renderer.as_str()
        );

        let (renderer, surface) = create_renderer(&document, &session, settings.renderer)?;
        let game = Rc::new(RefCell::new(Game {
            frames: FrameLoop::new(session, renderer, SystemClock),
            controls: Controls::new(),
        }));

        setup_input_handlers(&document, &surface, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Fruit Catch running!");
        Ok(())
    }

    fn create_renderer(
        document: &Document,
        session: &GameSession,
        kind: RendererKind,
    ) -> Result<(Box<dyn Renderer>, HtmlElement), GameError> {
        let canvas = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

        match kind {
            RendererKind::Canvas => {
                let canvas = canvas.ok_or(GameError::MissingElement("#gameCanvas"))?;
                canvas.set_width(session.viewport.width as u32);
                canvas.set_height(session.viewport.height as u32);
                let renderer = CanvasRenderer::new(&canvas, session.viewport)?;
                Ok((Box::new(renderer), canvas.into()))
            }
            RendererKind::Dom => {
                // The DOM strategy has no use for the canvas
                if let Some(canvas) = canvas {
                    canvas.remove();
                }
                let root = match document.get_element_by_id("game") {
                    Some(el) => el
                        .dyn_into::<HtmlElement>()
                        .map_err(|_| GameError::Dom("#game is not an HtmlElement".to_string()))?,
                    None => {
                        let body = document.body().ok_or(GameError::MissingElement("body"))?;
                        let root = document
                            .create_element("div")?
                            .dyn_into::<HtmlElement>()
                            .map_err(|_| {
                                GameError::Dom("created element is not an HtmlElement".to_string())
                            })?;
                        root.set_id("game");
                        body.append_child(&root)?;
                        root
                    }
                };
                let renderer = DomRenderer::new(document, root.clone(), session)?;
                Ok((Box::new(renderer), root))
            }
        }
    }

    fn setup_input_handlers(
        document: &Document,
        surface: &HtmlElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), GameError> {
        // Key down: movement, scroll suppression, restart after game over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom_key(&event.key()) else {
                    return;
                };
                let response = {
                    let mut g = game.borrow_mut();
                    let over = g.is_over();
                    g.controls.key_down(key, over)
                };
                if response.prevent_default {
                    event.prevent_default();
                }
                if response.restart {
                    reload();
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().controls.key_up(key);
                }
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click on the restart button (canvas-drawn or DOM)
        {
            let surface_clone = surface.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = surface_clone.get_bounding_client_rect();
                let x = event.client_x() as f32 - rect.left() as f32;
                let y = event.client_y() as f32 - rect.top() as f32;
                let restart = {
                    let g = game.borrow();
                    g.controls.click(g.viewport(), x, y, g.is_over())
                };
                if restart {
                    reload();
                }
            });
            surface.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop cannot continue");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let status = {
            let mut g = game.borrow_mut();
            let input = g.controls.intent();
            g.frames.frame(&input)
        };

        // Game over: the terminal screen is up, stop scheduling
        if status == FrameStatus::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use fruit_catch::platform::{Clock, ManualClock, SystemClock};
    use fruit_catch::renderer::HeadlessRenderer;
    use fruit_catch::sim::{GameSession, TickInput, Viewport};
    use fruit_catch::{FrameLoop, FrameStatus, GameError, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Ten minutes of play
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    /// Chase the fruit with the platform centre, with a small dead zone
    fn autopilot(session: &GameSession) -> TickInput {
        let target = session.fruit.bounds().center().x;
        let center = session.platform.x + session.platform.width / 2.0;
        let dead_zone = session.settings.platform_speed;
        TickInput {
            move_left: target < center - dead_zone,
            move_right: target > center + dead_zone,
        }
    }

    pub fn run() -> Result<(), GameError> {
        let settings = Settings::load();
        let seed = SystemClock.now_ms() as u64;
        let session = GameSession::new(Viewport::new(800.0, 600.0), settings, seed)?;
        log::info!("Headless game with seed {}", seed);

        let clock = ManualClock::new(0.0);
        let mut frames = FrameLoop::new(session, HeadlessRenderer::new(), &clock);

        let mut count = 0u64;
        loop {
            let input = autopilot(frames.session());
            if frames.frame(&input) == FrameStatus::Stopped {
                break;
            }
            clock.advance(FRAME_MS);
            count += 1;
            if count >= MAX_FRAMES {
                log::info!("Frame limit reached");
                break;
            }
        }

        println!(
            "Final score: {} after {} frames ({:?})",
            frames.session().score,
            count,
            frames.session().phase
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fruit Catch (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - build for wasm32 to play");

    if let Err(e) = headless::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
