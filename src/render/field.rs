use crate::constants::*;
use crate::core::field::{ParticleField, ParticleHue, CONNECT_MAX_DISTANCE};
use crate::dom;
use crate::frame::{self, RafLoop};
use crate::render::helpers;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Ambient full-screen particle background. Owns its canvas and redraw loop
/// for the mounted lifetime.
pub struct FieldRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
}

impl FieldRenderer {
    fn frame(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        self.field.advance();

        for p in &self.field.particles {
            let (x, y) = (p.pos.x as f64, p.pos.y as f64);
            let hex = match p.hue {
                ParticleHue::Cyan => CYAN_HEX,
                ParticleHue::Violet => VIOLET_HEX,
            };
            // Soft halo around a solid core
            helpers::fill_glow(
                &self.ctx,
                x,
                y,
                p.radius as f64 * PARTICLE_GLOW_SCALE,
                &[(0.0, hex), (1.0, "transparent")],
            );
            self.ctx.set_fill_style_str(hex);
            helpers::fill_circle(&self.ctx, x, y, p.radius as f64);
        }

        self.ctx.set_line_width(CONNECT_LINE_WIDTH);
        for edge in self.field.connections(CONNECT_MAX_DISTANCE) {
            let a = self.field.particles[edge.a].pos;
            let b = self.field.particles[edge.b].pos;
            self.ctx
                .set_stroke_style_str(&helpers::rgba(CYAN, edge.opacity));
            self.ctx.begin_path();
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
            self.ctx.stroke();
        }
    }
}

/// Mount the particle background onto `canvas` and start its redraw loop.
pub fn mount(canvas: web::HtmlCanvasElement, count: usize, seed: u64) -> anyhow::Result<RafLoop> {
    let ctx = dom::context_2d(&canvas).ok_or_else(|| anyhow::anyhow!("no 2d context"))?;
    dom::sync_canvas_backing_size(&canvas);

    let field = ParticleField::new(count, canvas.width() as f32, canvas.height() as f32, seed);
    let renderer = Rc::new(RefCell::new(FieldRenderer { canvas, ctx, field }));

    // Track window resizes so recycled particles respawn inside the new bounds
    {
        let renderer = renderer.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            let mut r = renderer.borrow_mut();
            dom::sync_canvas_backing_size(&r.canvas);
            let (w, h) = (r.canvas.width() as f32, r.canvas.height() as f32);
            r.field.set_viewport(w, h);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window.add_event_listener_with_callback(
                "resize",
                resize_closure.as_ref().unchecked_ref(),
            );
        }
        resize_closure.forget();
    }

    Ok(frame::start_loop(move || {
        renderer.borrow_mut().frame();
        true
    }))
}
