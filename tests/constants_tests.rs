// Host-side tests for render constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod orb {
    include!("../src/core/orb.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn accent_hexes_are_css_colors() {
    for hex in [CYAN_HEX, VIOLET_HEX, ACCENT_HEX, ALERT_HEX] {
        assert!(hex.starts_with('#'));
        assert_eq!(hex.len(), 7);
        assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rgb_tuples_match_their_hex_strings() {
    assert_eq!(format!("#{:02X}{:02X}{:02X}", CYAN.0, CYAN.1, CYAN.2), CYAN_HEX);
    assert_eq!(
        format!("#{:02X}{:02X}{:02X}", VIOLET.0, VIOLET.1, VIOLET.2),
        VIOLET_HEX
    );
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn draw_sizes_are_positive() {
    assert!(PARTICLE_GLOW_SCALE > 1.0);
    assert!(CONNECT_LINE_WIDTH > 0.0);
    assert!(ORB_WAVE_LINE_WIDTH > 0.0);
    assert!(ORBITER_DRAW_RADIUS > 0.0);
    assert!(RADAR_POINT_CORE_RADIUS > 0.0);
    assert!(RADAR_POINT_GLOW_RADIUS > RADAR_POINT_CORE_RADIUS);
    assert!(GAUGE_ARC_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orb_geometry_fits_its_canvas() {
    // Widest possible ring stays inside the 200px canvas
    let max_ring = orb::WAVE_BASE_RADIUS + orb::WAVE_AMPLITUDE_THINKING;
    assert!((max_ring as f64) < ORB_SIZE / 2.0);
    assert!((orb::ORBITER_RADIUS as f64) < ORB_SIZE / 2.0);
    assert!(ORB_CORE_RADIUS < ORB_SIZE / 2.0);
    assert!(ORB_HOTSPOT_RADIUS < ORB_CORE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn radar_canvas_leaves_room_for_labels() {
    let max_radius = RADAR_SIZE * 0.38;
    assert!(max_radius + 30.0 < RADAR_SIZE / 2.0 + 40.0);
    assert!(RADAR_CENTER_DECOR_RADIUS < max_radius);
}
