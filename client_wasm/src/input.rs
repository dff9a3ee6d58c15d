//! Pointer and touch input
//!
//! Listeners only write into the simulation's [`Pointer`]; the next frame
//! picks the value up.

use pong_core::{Pointer, SurfaceBounds};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, HtmlCanvasElement, MouseEvent, TouchEvent};

fn sample(canvas: &HtmlCanvasElement, pointer: &Pointer, playfield_height: f32, client_y: i32) {
    let rect = canvas.get_bounding_client_rect();
    let bounds = SurfaceBounds::new(rect.top() as f32, rect.height() as f32);
    pointer.sample(client_y as f32, bounds, playfield_height);
}

fn first_touch_y(event: &TouchEvent) -> Option<i32> {
    event.touches().get(0).map(|touch| touch.client_y())
}

/// Track mouse and touch movement anywhere on the page
pub fn attach(
    document: &Document,
    canvas: &HtmlCanvasElement,
    pointer: Pointer,
    playfield_height: f32,
) -> Result<(), JsValue> {
    {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            sample(&canvas, &pointer, playfield_height, event.client_y());
        });
        document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        let on_touch_move = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            // Dragging the paddle must not scroll the page
            event.prevent_default();
            if let Some(client_y) = first_touch_y(&event) {
                sample(&canvas, &pointer, playfield_height, client_y);
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        document.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            on_touch_move.as_ref().unchecked_ref(),
            &options,
        )?;
        on_touch_move.forget();
    }

    {
        let canvas = canvas.clone();
        let on_touch_start = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(client_y) = first_touch_y(&event) {
                sample(&canvas, &pointer, playfield_height, client_y);
            }
        });
        document
            .add_event_listener_with_callback("touchstart", on_touch_start.as_ref().unchecked_ref())?;
        on_touch_start.forget();
    }

    Ok(())
}
