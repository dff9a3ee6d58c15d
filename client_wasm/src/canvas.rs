//! Canvas 2D backend for the frame renderer

use glam::Vec2;
use js_sys::Array;
use pong_core::{Canvas, Rect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("context is not a CanvasRenderingContext2d"))?;
        Ok(Self { ctx })
    }
}

fn js_err(err: JsValue) -> String {
    format!("{:?}", err)
}

impl Canvas for Canvas2d {
    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
        Ok(())
    }

    fn dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: [f32; 2],
        width: f32,
        color: &str,
    ) -> Result<(), String> {
        let pattern = Array::of2(&JsValue::from(dash[0]), &JsValue::from(dash[1]));
        self.ctx.set_line_dash(&pattern).map_err(js_err)?;
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        // Solid lines for everything drawn after
        self.ctx.set_line_dash(&Array::new()).map_err(js_err)
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), String> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(js_err)?;
        self.ctx.fill();
        Ok(())
    }
}
