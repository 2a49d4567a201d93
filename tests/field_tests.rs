// Host-side tests for the particle field simulator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod field {
    include!("../src/core/field.rs");
}

use field::*;
use glam::Vec2;

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn make_field() -> ParticleField {
    ParticleField::new(FIELD_PARTICLE_COUNT, WIDTH, HEIGHT, 42)
}

#[test]
fn particle_count_is_constant() {
    let mut field = make_field();
    assert_eq!(field.len(), FIELD_PARTICLE_COUNT);
    for _ in 0..10_000 {
        field.advance();
        assert_eq!(field.len(), FIELD_PARTICLE_COUNT);
    }
}

#[test]
fn initial_attributes_are_in_range() {
    let field = make_field();
    for p in &field.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x < WIDTH);
        assert!(p.pos.y >= 0.0 && p.pos.y < HEIGHT);
        assert!(p.radius >= 0.5 && p.radius <= 2.5);
        assert!(p.speed >= 0.1 && p.speed <= 0.6);
        assert!(p.amplitude >= 20.0 && p.amplitude <= 70.0);
        assert!(p.frequency >= 0.01 && p.frequency <= 0.03);
    }
}

#[test]
fn both_hues_are_represented() {
    let field = make_field();
    let cyan = field
        .particles
        .iter()
        .filter(|p| p.hue == ParticleHue::Cyan)
        .count();
    assert!(cyan > 0 && cyan < field.len());
}

#[test]
fn particles_drift_upward() {
    let mut field = make_field();
    let before: Vec<f32> = field.particles.iter().map(|p| p.pos.y).collect();
    field.advance();
    for (p, y_before) in field.particles.iter().zip(&before) {
        // Either moved up by its speed or recycled below the viewport
        assert!(p.pos.y < *y_before || p.pos.y == HEIGHT + RECYCLE_MARGIN);
    }
}

#[test]
fn recycle_resets_below_viewport_with_fresh_x() {
    let mut field = make_field();
    let mut recycles = 0;
    // Enough ticks for the slowest particle (0.1/frame) to cross the viewport
    for _ in 0..20_000 {
        let before: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();
        field.advance();
        for (p, prev) in field.particles.iter().zip(&before) {
            assert!(p.pos.y >= -RECYCLE_MARGIN, "particle escaped the margin");
            if p.pos.y > prev.y {
                // y only ever increases on a recycle
                assert_eq!(p.pos.y, HEIGHT + RECYCLE_MARGIN);
                assert!(p.pos.x >= 0.0 && p.pos.x < WIDTH);
                recycles += 1;
            }
        }
    }
    assert!(recycles > 0, "expected at least one recycle");
}

#[test]
fn recycle_uses_current_viewport() {
    let mut field = make_field();
    field.set_viewport(400.0, 300.0);
    let mut recycled = false;
    for _ in 0..20_000 {
        let before: Vec<f32> = field.particles.iter().map(|p| p.pos.y).collect();
        field.advance();
        for (p, prev) in field.particles.iter().zip(&before) {
            if p.pos.y > *prev {
                assert_eq!(p.pos.y, 300.0 + RECYCLE_MARGIN);
                assert!(p.pos.x >= 0.0 && p.pos.x < 400.0);
                recycled = true;
            }
        }
        if recycled {
            break;
        }
    }
    assert!(recycled);
}

#[test]
fn same_seed_is_deterministic() {
    let mut a = ParticleField::new(50, WIDTH, HEIGHT, 7);
    let mut b = ParticleField::new(50, WIDTH, HEIGHT, 7);
    for _ in 0..5_000 {
        a.advance();
        b.advance();
    }
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.pos, pb.pos);
    }
}

#[test]
fn connections_respect_the_distance_cutoff() {
    let mut field = ParticleField::new(3, WIDTH, HEIGHT, 1);
    field.particles[0].pos = Vec2::new(0.0, 0.0);
    field.particles[1].pos = Vec2::new(CONNECT_MAX_DISTANCE, 0.0);
    field.particles[2].pos = Vec2::new(50.0, 0.0);

    let edges = field.connections(CONNECT_MAX_DISTANCE);
    // 0-1 sits exactly on the cutoff: opacity would be 0, so no edge
    assert!(!edges.iter().any(|e| e.a == 0 && e.b == 1));
    // 0-2 (d=50) and 1-2 (d=100) both connect
    assert_eq!(edges.len(), 2);
    for e in &edges {
        assert!(e.opacity > 0.0 && e.opacity <= CONNECT_OPACITY_CEILING);
    }
}

#[test]
fn connection_opacity_falls_off_linearly() {
    let mut field = ParticleField::new(2, WIDTH, HEIGHT, 1);
    field.particles[0].pos = Vec2::new(0.0, 0.0);
    field.particles[1].pos = Vec2::new(75.0, 0.0);
    let edges = field.connections(CONNECT_MAX_DISTANCE);
    assert_eq!(edges.len(), 1);
    // Halfway to the cutoff: half the ceiling
    assert!((edges[0].opacity - CONNECT_OPACITY_CEILING / 2.0).abs() < 1e-5);
}

#[test]
fn near_zero_distance_approaches_the_ceiling() {
    let mut field = ParticleField::new(2, WIDTH, HEIGHT, 1);
    field.particles[0].pos = Vec2::new(100.0, 100.0);
    field.particles[1].pos = Vec2::new(100.0, 100.1);
    let edges = field.connections(CONNECT_MAX_DISTANCE);
    assert_eq!(edges.len(), 1);
    assert!(edges[0].opacity > CONNECT_OPACITY_CEILING * 0.99);
    assert!(edges[0].opacity <= CONNECT_OPACITY_CEILING);
}

#[test]
fn distant_particles_yield_no_edges() {
    let mut field = ParticleField::new(2, WIDTH, HEIGHT, 1);
    field.particles[0].pos = Vec2::new(0.0, 0.0);
    field.particles[1].pos = Vec2::new(500.0, 0.0);
    assert!(field.connections(CONNECT_MAX_DISTANCE).is_empty());
}

#[test]
fn edges_cover_unordered_pairs_once() {
    let mut field = ParticleField::new(4, WIDTH, HEIGHT, 1);
    for (i, p) in field.particles.iter_mut().enumerate() {
        p.pos = Vec2::new(i as f32 * 10.0, 0.0);
    }
    let edges = field.connections(CONNECT_MAX_DISTANCE);
    // 4 clustered particles: all 6 unordered pairs, each once
    assert_eq!(edges.len(), 6);
    for e in &edges {
        assert!(e.a < e.b);
    }
}
