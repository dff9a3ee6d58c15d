use pong_core::Scheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Runs frames on the browser's display refresh
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || callback());
        if let Err(err) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            crate::console_error!("requestAnimationFrame failed, loop stopped: {:?}", err);
        }
    }
}
