use crate::constants::*;
use crate::core::ease::ScoreAnimator;
use crate::core::radar::{self, LABEL_OFFSET, RADIUS_FRACTION, RING_COUNT};
use crate::core::skills::Skill;
use crate::dom;
use crate::frame::{self, RafLoop};
use crate::render::helpers;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Animated radar chart over an ordered, non-empty skill list. The list is
/// an immutable snapshot taken at mount; axis order follows list order.
pub struct RadarRenderer {
    ctx: web::CanvasRenderingContext2d,
    skills: Vec<Skill>,
    size: f64,
    progress: ScoreAnimator,
}

impl RadarRenderer {
    fn frame(&mut self) -> bool {
        let progress = self.progress.value();
        let center = self.size / 2.0;
        let max_radius = self.size * RADIUS_FRACTION as f64;
        self.ctx.clear_rect(0.0, 0.0, self.size, self.size);

        // Reference rings at 20% increments, faintest innermost
        self.ctx.set_line_width(1.0);
        for i in (1..=RING_COUNT).rev() {
            let ring_radius = max_radius / RING_COUNT as f64 * i as f64;
            self.ctx
                .set_stroke_style_str(&helpers::rgba(CYAN, 0.1 + i as f32 * 0.02));
            helpers::stroke_circle(&self.ctx, center, center, ring_radius);
            if i == RING_COUNT {
                self.ctx.set_font("10px JetBrains Mono");
                self.ctx.set_fill_style_str(&helpers::rgba(CYAN, 0.4));
                _ = self
                    .ctx
                    .fill_text("100%", center + 4.0, center - ring_radius + 12.0);
            }
        }

        // One spoke per axis
        self.ctx.set_stroke_style_str(&helpers::rgba(VIOLET, 0.2));
        for i in 0..self.skills.len() {
            let tip = radar::axis_direction(i, self.skills.len()) * max_radius as f32;
            self.ctx.begin_path();
            self.ctx.move_to(center, center);
            self.ctx
                .line_to(center + tip.x as f64, center + tip.y as f64);
            self.ctx.stroke();
        }

        // Animated score polygon
        let vertices = radar::vertices(&self.skills, max_radius as f32, progress);
        self.ctx.begin_path();
        for (i, v) in vertices.iter().enumerate() {
            let (x, y) = (center + v.x as f64, center + v.y as f64);
            if i == 0 {
                self.ctx.move_to(x, y);
            } else {
                self.ctx.line_to(x, y);
            }
        }
        self.ctx.close_path();
        if let Some(fill) = helpers::radial_gradient(
            &self.ctx,
            center,
            center,
            max_radius,
            &[
                (0.0, &helpers::rgba(CYAN, 0.4)),
                (0.5, &helpers::rgba(VIOLET, 0.3)),
                (1.0, &helpers::rgba(CYAN, 0.1)),
            ],
        ) {
            self.ctx.set_fill_style_canvas_gradient(&fill);
            self.ctx.fill();
        }
        let stroke = helpers::linear_gradient(
            &self.ctx,
            0.0,
            0.0,
            self.size,
            self.size,
            &[(0.0, CYAN_HEX), (0.5, VIOLET_HEX), (1.0, CYAN_HEX)],
        );
        self.ctx.set_stroke_style_canvas_gradient(&stroke);
        self.ctx.set_line_width(RADAR_STROKE_WIDTH);
        self.ctx.stroke();

        // Vertex glow points, then labels past the axis tips
        for (i, (skill, v)) in self.skills.iter().zip(vertices.iter()).enumerate() {
            let (x, y) = (center + v.x as f64, center + v.y as f64);
            helpers::fill_glow(
                &self.ctx,
                x,
                y,
                RADAR_POINT_GLOW_RADIUS,
                &[
                    (0.0, CYAN_HEX),
                    (0.5, &helpers::rgba(CYAN, 0.3)),
                    (1.0, "transparent"),
                ],
            );
            self.ctx.set_fill_style_str(CYAN_HEX);
            helpers::fill_circle(&self.ctx, x, y, RADAR_POINT_CORE_RADIUS);

            let label = radar::axis_direction(i, self.skills.len())
                * (max_radius as f32 + LABEL_OFFSET);
            let (lx, ly) = (center + label.x as f64, center + label.y as f64);
            self.ctx.set_text_align("center");
            self.ctx.set_text_baseline("middle");
            self.ctx.set_font("12px Inter");
            self.ctx.set_fill_style_str("#ffffff");
            _ = self.ctx.fill_text(skill.name, lx, ly);
            self.ctx.set_font("11px JetBrains Mono");
            self.ctx.set_fill_style_str(CYAN_HEX);
            let pct = format!("{}%", radar::displayed_score(skill.score, progress));
            _ = self.ctx.fill_text(&pct, lx, ly + 16.0);
        }

        // Center decoration
        helpers::fill_glow(
            &self.ctx,
            center,
            center,
            RADAR_CENTER_DECOR_RADIUS,
            &[(0.0, &helpers::rgba(VIOLET, 0.6)), (1.0, "transparent")],
        );

        // Keep redrawing until the ease-in lands on its terminal frame
        !self.progress.done()
    }
}

/// Mount the radar chart onto `canvas` over a snapshot of `skills`.
///
/// Precondition: `skills` is non-empty (the axis layout is undefined for an
/// empty list).
pub fn mount(
    canvas: web::HtmlCanvasElement,
    skills: Vec<Skill>,
    size: f64,
) -> anyhow::Result<RafLoop> {
    let ctx = dom::context_2d(&canvas).ok_or_else(|| anyhow::anyhow!("no 2d context"))?;
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    canvas.set_width((size * dpr) as u32);
    canvas.set_height((size * dpr) as u32);
    _ = ctx.scale(dpr, dpr);

    let renderer = Rc::new(RefCell::new(RadarRenderer {
        ctx,
        skills,
        size,
        progress: ScoreAnimator::new(1.0),
    }));
    Ok(frame::start_loop(move || renderer.borrow_mut().frame()))
}
