use std::f64::consts::TAU;
use web_sys as web;

/// CSS rgba() string for an accent color at a given alpha.
pub fn rgba(rgb: (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb.0, rgb.1, rgb.2, alpha)
}

/// Radial gradient centered at (x, y) with the given stops.
/// Canvas gradients can fail for non-finite radii; callers skip the shape.
pub fn radial_gradient(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    stops: &[(f32, &str)],
) -> Option<web::CanvasGradient> {
    let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, radius).ok()?;
    for (offset, color) in stops {
        _ = gradient.add_color_stop(*offset, color);
    }
    Some(gradient)
}

/// Linear gradient from (x0, y0) to (x1, y1) with the given stops.
pub fn linear_gradient(
    ctx: &web::CanvasRenderingContext2d,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    stops: &[(f32, &str)],
) -> web::CanvasGradient {
    let gradient = ctx.create_linear_gradient(x0, y0, x1, y1);
    for (offset, color) in stops {
        _ = gradient.add_color_stop(*offset, color);
    }
    gradient
}

/// Fill a full circle with the current fill style.
pub fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    _ = ctx.arc(x, y, radius, 0.0, TAU);
    ctx.fill();
}

/// Fill a circle with a radial gradient; no-op if the gradient fails.
pub fn fill_glow(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    stops: &[(f32, &str)],
) {
    if let Some(gradient) = radial_gradient(ctx, x, y, radius, stops) {
        ctx.set_fill_style_canvas_gradient(&gradient);
        fill_circle(ctx, x, y, radius);
    }
}

/// Stroke a full circle with the current stroke style.
pub fn stroke_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    _ = ctx.arc(x, y, radius, 0.0, TAU);
    ctx.stroke();
}
