use crate::constants::*;
use crate::core::clock::SimClock;
use crate::core::orb::{self, OrbFlags};
use crate::dom;
use crate::frame::{self, RafLoop};
use crate::render::helpers;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Pulsating "AI orb". The caller owns the flags cell and may flip
/// `active`/`thinking` at any time; the next frame picks them up.
pub struct OrbRenderer {
    ctx: web::CanvasRenderingContext2d,
    clock: SimClock,
    flags: Rc<Cell<OrbFlags>>,
}

impl OrbRenderer {
    fn frame(&mut self) {
        let time = self.clock.tick();
        let OrbFlags { active, thinking } = self.flags.get();
        let center = ORB_SIZE / 2.0;
        self.ctx.clear_rect(0.0, 0.0, ORB_SIZE, ORB_SIZE);

        // Breathing halo, outermost layer first
        for layer in orb::glow_layers(time, active) {
            helpers::fill_glow(
                &self.ctx,
                center,
                center,
                layer.radius as f64,
                &[
                    (0.0, &helpers::rgba(CYAN, layer.alpha)),
                    (0.5, &helpers::rgba(VIOLET, layer.alpha * 0.5)),
                    (1.0, "transparent"),
                ],
            );
        }

        // Waveform ring, closed back to the first sample
        let ring = orb::waveform_ring(time, thinking);
        self.ctx.begin_path();
        for (i, p) in ring.iter().enumerate() {
            let (x, y) = (center + p.x as f64, center + p.y as f64);
            if i == 0 {
                self.ctx.move_to(x, y);
            } else {
                self.ctx.line_to(x, y);
            }
        }
        self.ctx.close_path();
        let stroke = helpers::linear_gradient(
            &self.ctx,
            0.0,
            0.0,
            ORB_SIZE,
            ORB_SIZE,
            &[(0.0, CYAN_HEX), (0.5, VIOLET_HEX), (1.0, CYAN_HEX)],
        );
        self.ctx.set_stroke_style_canvas_gradient(&stroke);
        self.ctx.set_line_width(ORB_WAVE_LINE_WIDTH);
        self.ctx.stroke();

        // Inner core and central hotspot, static radius
        helpers::fill_glow(
            &self.ctx,
            center,
            center,
            ORB_CORE_RADIUS,
            &[
                (0.0, &helpers::rgba(CYAN, 0.8)),
                (0.5, &helpers::rgba(VIOLET, 0.4)),
                (1.0, &helpers::rgba(CYAN, 0.1)),
            ],
        );
        helpers::fill_glow(
            &self.ctx,
            center,
            center,
            ORB_HOTSPOT_RADIUS,
            &[
                (0.0, "rgba(255, 255, 255, 0.9)"),
                (0.5, &helpers::rgba(CYAN, 0.5)),
                (1.0, "transparent"),
            ],
        );

        // Orbiting accent particles while thinking
        for p in orb::orbiters(time, thinking) {
            helpers::fill_glow(
                &self.ctx,
                center + p.x as f64,
                center + p.y as f64,
                ORBITER_DRAW_RADIUS,
                &[(0.0, CYAN_HEX), (1.0, "transparent")],
            );
        }
    }
}

/// Mount the orb onto `canvas` and start its redraw loop.
pub fn mount(canvas: web::HtmlCanvasElement, flags: Rc<Cell<OrbFlags>>) -> anyhow::Result<RafLoop> {
    let ctx = dom::context_2d(&canvas).ok_or_else(|| anyhow::anyhow!("no 2d context"))?;
    canvas.set_width(ORB_SIZE as u32);
    canvas.set_height(ORB_SIZE as u32);

    let renderer = Rc::new(RefCell::new(OrbRenderer {
        ctx,
        clock: SimClock::default(),
        flags,
    }));
    Ok(frame::start_loop(move || {
        renderer.borrow_mut().frame();
        true
    }))
}
