// Host-side tests for the radar chart geometry and the mock data set.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod radar {
        include!("../src/core/radar.rs");
    }
    pub mod skills {
        include!("../src/core/skills.rs");
    }
}

use core::radar::*;
use core::skills::*;
use std::f32::consts::{FRAC_PI_2, PI};

const MAX_RADIUS: f32 = 152.0; // 400px canvas * 0.38

fn skill(score: u8) -> Skill {
    Skill {
        name: "Testing",
        score,
        category: SkillCategory::Technical,
    }
}

#[test]
fn first_axis_points_straight_up() {
    assert!((axis_angle(0, 8) - (-FRAC_PI_2)).abs() < 1e-6);
    let dir = axis_direction(0, 8);
    assert!(dir.x.abs() < 1e-6);
    assert!((dir.y - (-1.0)).abs() < 1e-6);
}

#[test]
fn axes_advance_clockwise_in_equal_sectors() {
    let n = 6;
    for i in 1..n {
        let delta = axis_angle(i, n) - axis_angle(i - 1, n);
        assert!((delta - PI * 2.0 / n as f32).abs() < 1e-5);
    }
}

#[test]
fn zero_score_vertex_coincides_with_center() {
    let v = vertices(&[skill(0)], MAX_RADIUS, 1.0);
    assert_eq!(v.len(), 1);
    assert!(v[0].length() < 1e-6);
}

#[test]
fn full_score_vertex_reaches_max_radius() {
    let v = vertices(&[skill(100)], MAX_RADIUS, 1.0);
    assert!((v[0].length() - MAX_RADIUS).abs() < 1e-3);
}

#[test]
fn eight_equal_scores_form_a_regular_octagon() {
    let skills: Vec<Skill> = (0..8).map(|_| skill(50)).collect();
    let v = vertices(&skills, MAX_RADIUS, 1.0);
    assert_eq!(v.len(), 8);
    for (i, vertex) in v.iter().enumerate() {
        assert!(
            (vertex.length() - 0.5 * MAX_RADIUS).abs() < 1e-3,
            "vertex {i} off the half-radius circle"
        );
    }
    // Equal edge lengths all the way around
    let edge = (v[1] - v[0]).length();
    for i in 1..8 {
        let next = (v[(i + 1) % 8] - v[i]).length();
        assert!((next - edge).abs() < 1e-3);
    }
}

#[test]
fn animation_progress_scales_vertices_toward_center() {
    let skills = vec![skill(80), skill(40)];
    let full = vertices(&skills, MAX_RADIUS, 1.0);
    let half = vertices(&skills, MAX_RADIUS, 0.5);
    let start = vertices(&skills, MAX_RADIUS, 0.0);
    for i in 0..skills.len() {
        assert!((half[i].length() - full[i].length() * 0.5).abs() < 1e-3);
        assert!(start[i].length() < 1e-6);
    }
}

#[test]
fn vertex_order_follows_skill_order() {
    let skills = vec![skill(100), skill(50)];
    let v = vertices(&skills, MAX_RADIUS, 1.0);
    // First vertex on the first (upward) axis, second on the opposite one
    assert!(v[0].y < 0.0);
    assert!(v[1].y > 0.0);
}

#[test]
fn displayed_score_tracks_progress() {
    assert_eq!(displayed_score(80, 0.0), 0);
    assert_eq!(displayed_score(80, 1.0), 80);
    let mut prev = 0;
    for step in 0..=100 {
        let s = displayed_score(80, step as f32 / 100.0);
        assert!(s >= prev);
        assert!(s <= 80);
        prev = s;
    }
}

#[test]
fn demo_skills_are_valid_radar_input() {
    let skills = demo_skills();
    assert_eq!(skills.len(), 8);
    assert!(skills.iter().all(|s| s.score <= 100));
    assert!(skills.iter().all(|s| !s.name.is_empty()));
    // Order is the axis order; the first axis is JavaScript
    assert_eq!(skills[0].name, "JavaScript");
}

#[test]
fn demo_readiness_and_insights_are_well_formed() {
    let readiness = demo_readiness();
    assert!(readiness.percentage <= 100);
    assert!(!readiness.level.is_empty());

    let insights = demo_insights();
    assert!(!insights.is_empty());
    for insight in &insights {
        assert!(!insight.title.is_empty());
        assert!(!insight.description.is_empty());
    }
    assert!(insights.iter().any(|i| i.kind == InsightKind::Strength));
    assert!(insights
        .iter()
        .any(|i| i.kind == InsightKind::Recommendation));
}

#[test]
fn insight_kind_labels_are_distinct() {
    let labels = [
        InsightKind::Gap.label(),
        InsightKind::Strength.label(),
        InsightKind::Growth.label(),
        InsightKind::Recommendation.label(),
    ];
    for i in 0..labels.len() {
        for j in (i + 1)..labels.len() {
            assert_ne!(labels[i], labels[j]);
        }
    }
}
