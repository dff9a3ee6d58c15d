//! Browser host for the paddle simulation
//!
//! Binds a `pong_core` simulation to a canvas element: 2D canvas drawing,
//! page-wide mouse and touch input, `requestAnimationFrame` pacing. A page
//! can start several independent games, e.g. a decorative background and
//! the interactive one.

/// Log to the browser console
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

/// Log an error to the browser console
#[macro_export]
macro_rules! console_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

mod canvas;
mod input;
mod scheduler;
mod scoreboard;
mod stats;

use canvas::Canvas2d;
use pong_core::{run, Config, FrameDriver, Params, ScoringMode, Simulation};
use scheduler::AnimationFrameScheduler;
use scoreboard::ScoreBoard;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

const PLAYER_SCORE_ID: &str = "player-score";
const AI_SCORE_ID: &str = "ai-score";

/// How a game instance behaves on the page
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Fills the viewport and keeps score
    Interactive,
    /// Fixed 800x400 backdrop, never scores
    Background,
}

/// Simulation settings for a mode; `viewport` is only used when interactive
fn config_for(mode: GameMode, viewport: (f32, f32)) -> Config {
    match mode {
        GameMode::Interactive => Config::with_playfield(viewport.0, viewport.1),
        GameMode::Background => Config::new().with_scoring(ScoringMode::ResetOnly),
    }
}

fn seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (js_sys::Date::now() as u64) ^ (noise << 16)
}

/// A running game; the loop stops once the handle is freed
#[wasm_bindgen]
pub struct GameHandle {
    driver: Rc<RefCell<FrameDriver<Canvas2d>>>,
    _scheduler: Rc<AnimationFrameScheduler>,
}

#[wasm_bindgen]
impl GameHandle {
    #[wasm_bindgen(getter)]
    pub fn player_score(&self) -> u32 {
        self.driver.borrow().simulation().score().player
    }

    #[wasm_bindgen(getter)]
    pub fn ai_score(&self) -> u32 {
        self.driver.borrow().simulation().score().ai
    }

    /// Frames run so far
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.driver.borrow().stats().frames as f64
    }
}

/// Start a game on the canvas with id `canvas_id`
#[wasm_bindgen]
pub fn start_game(canvas_id: &str, mode: GameMode) -> Result<GameHandle, JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))?;

    // Logical size is fixed here; later viewport changes only rescale the element
    match mode {
        GameMode::Interactive => {
            let width = window.inner_width()?.as_f64().unwrap_or(Params::PLAYFIELD_WIDTH as f64);
            let height = window
                .inner_height()?
                .as_f64()
                .unwrap_or(Params::PLAYFIELD_HEIGHT as f64);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
        }
        GameMode::Background => {
            canvas.set_width(Params::PLAYFIELD_WIDTH as u32);
            canvas.set_height(Params::PLAYFIELD_HEIGHT as u32);
        }
    }

    let config = config_for(mode, (canvas.width() as f32, canvas.height() as f32));
    let playfield_height = config.playfield_height;
    let simulation = Simulation::with_seed(config, seed());

    input::attach(&document, &canvas, simulation.pointer(), playfield_height)?;

    let mut board = match mode {
        GameMode::Interactive => Some(ScoreBoard::find(&document, PLAYER_SCORE_ID, AI_SCORE_ID)),
        GameMode::Background => None,
    };
    let mut failing = false;

    let driver = FrameDriver::new(simulation, Canvas2d::from_canvas(&canvas)?).on_frame(
        move |sim, stats| {
            if let Some(board) = board.as_mut() {
                board.update(sim.score());
            }
            // Report a broken surface once, not every frame
            match (&stats.last_error, failing) {
                (Some(err), false) => {
                    console_error!("Frame not rendered: {}", err);
                    failing = true;
                }
                (None, true) => failing = false,
                _ => {}
            }
        },
    );

    let driver = Rc::new(RefCell::new(driver));
    let scheduler = Rc::new(AnimationFrameScheduler::new(window));
    run(driver.clone(), scheduler.clone());

    console_log!("Started {:?} game on #{}", mode, canvas_id);
    Ok(GameHandle {
        driver,
        _scheduler: scheduler,
    })
}

/// Record a play-intent click with the counter service, then refresh the counters
#[wasm_bindgen]
pub fn record_play_intent() {
    wasm_bindgen_futures::spawn_local(stats::record_and_refresh());
}

/// Refresh the page's click counters
#[wasm_bindgen]
pub fn refresh_stats() {
    wasm_bindgen_futures::spawn_local(stats::refresh_stats());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pong_core::Score;

    #[test]
    fn test_interactive_config_uses_viewport() {
        let config = config_for(GameMode::Interactive, (1440.0, 900.0));
        assert_eq!(config.playfield_width, 1440.0);
        assert_eq!(config.playfield_height, 900.0);
        assert_eq!(config.scoring, ScoringMode::Tally);
    }

    #[test]
    fn test_background_config_is_fixed_and_reset_only() {
        let config = config_for(GameMode::Background, (1440.0, 900.0));
        assert_eq!(config.playfield_width, 800.0);
        assert_eq!(config.playfield_height, 400.0);
        assert_eq!(config.scoring, ScoringMode::ResetOnly);
    }

    #[test]
    fn test_background_game_never_scores() {
        let mut sim = Simulation::with_seed(config_for(GameMode::Background, (0.0, 0.0)), 3);
        for _ in 0..5000 {
            sim.step();
        }
        assert_eq!(sim.score(), Score::new());
    }
}
