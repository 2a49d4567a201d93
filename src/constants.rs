// Render-side tuning constants shared by the canvas renderers.

// Accent palette
pub const CYAN: (u8, u8, u8) = (0, 240, 255);
pub const VIOLET: (u8, u8, u8) = (138, 43, 226);
pub const CYAN_HEX: &str = "#00F0FF";
pub const VIOLET_HEX: &str = "#8A2BE2";
pub const ACCENT_HEX: &str = "#39FF14";
pub const ALERT_HEX: &str = "#FF4D4D";

// Particle field
pub const PARTICLE_GLOW_SCALE: f64 = 3.0; // glow radius as a multiple of core radius
pub const CONNECT_LINE_WIDTH: f64 = 0.5;

// Orb canvas
pub const ORB_SIZE: f64 = 200.0;
pub const ORB_CORE_RADIUS: f64 = 35.0;
pub const ORB_HOTSPOT_RADIUS: f64 = 15.0;
pub const ORB_WAVE_LINE_WIDTH: f64 = 2.0;
pub const ORBITER_DRAW_RADIUS: f64 = 6.0;

// Radar chart
pub const RADAR_SIZE: f64 = 400.0;
pub const RADAR_POINT_GLOW_RADIUS: f64 = 12.0;
pub const RADAR_POINT_CORE_RADIUS: f64 = 4.0;
pub const RADAR_CENTER_DECOR_RADIUS: f64 = 20.0;
pub const RADAR_STROKE_WIDTH: f64 = 2.0;

// Readiness gauge (SVG arc)
pub const GAUGE_ARC_RADIUS: f64 = 80.0;
