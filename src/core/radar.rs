use super::skills::Skill;
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, TAU};

// Geometry for the radar (spider) chart. Positions are center-relative; the
// renderer adds the canvas center and draws rings, spokes, and labels.

/// Number of concentric reference rings.
pub const RING_COUNT: usize = 5;

/// Max polygon radius as a fraction of the canvas size.
pub const RADIUS_FRACTION: f32 = 0.38;

/// Distance past the max radius where axis labels sit.
pub const LABEL_OFFSET: f32 = 30.0;

/// Angle of axis `index` out of `len` axes: the first axis points straight
/// up, the rest follow clockwise.
///
/// Precondition: `len > 0`. An empty skill list has no defined axis layout
/// and is a caller error, not a checked one.
pub fn axis_angle(index: usize, len: usize) -> f32 {
    index as f32 * (TAU / len as f32) - FRAC_PI_2
}

/// Unit direction of axis `index`.
pub fn axis_direction(index: usize, len: usize) -> Vec2 {
    let angle = axis_angle(index, len);
    Vec2::new(angle.cos(), angle.sin())
}

/// Polygon vertices for the given animation progress, one per skill, in
/// axis order. Vertex radius scales with both the score and the progress,
/// so the polygon grows outward from the center as the chart animates in.
pub fn vertices(skills: &[Skill], max_radius: f32, progress: f32) -> SmallVec<[Vec2; 12]> {
    skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let radius = skill.score as f32 / 100.0 * max_radius * progress;
            axis_direction(i, skills.len()) * radius
        })
        .collect()
}

/// Score as displayed next to an axis label mid-animation.
pub fn displayed_score(score: u8, progress: f32) -> u32 {
    (score as f32 * progress).round() as u32
}
