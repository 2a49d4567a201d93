use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Particle count used by the full-screen background field.
pub const FIELD_PARTICLE_COUNT: usize = 50;

/// Edges are drawn between particles closer than this (pixels).
pub const CONNECT_MAX_DISTANCE: f32 = 150.0;

/// Opacity of an edge at distance zero; falls off linearly to 0 at the cutoff.
pub const CONNECT_OPACITY_CEILING: f32 = 0.15;

/// Lateral weave applied per frame, scaled by sin(phase).
pub const LATERAL_WEAVE: f32 = 0.5;

/// Particles recycle once they rise this far above the viewport, and reappear
/// the same margin below it.
pub const RECYCLE_MARGIN: f32 = 10.0;

/// Two accent hues; each particle picks one at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleHue {
    Cyan,
    Violet,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    pub hue: ParticleHue,
    /// Upward drift per frame.
    pub speed: f32,
    /// Phase angle driving the lateral weave.
    pub angle: f32,
    pub amplitude: f32,
    /// Phase advance per frame.
    pub frequency: f32,
}

/// Connection between two particles, by index into the arena.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Fixed-size arena of drifting particles.
///
/// Particles are created once and recycled in place when they leave the top
/// of the viewport, so the arena never allocates per frame and its count is
/// constant for the field's lifetime.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                radius: rng.gen::<f32>() * 2.0 + 0.5,
                hue: if rng.gen::<f32>() > 0.5 {
                    ParticleHue::Cyan
                } else {
                    ParticleHue::Violet
                },
                speed: rng.gen::<f32>() * 0.5 + 0.1,
                angle: rng.gen::<f32>() * TAU,
                amplitude: rng.gen::<f32>() * 50.0 + 20.0,
                frequency: rng.gen::<f32>() * 0.02 + 0.01,
            })
            .collect();
        Self {
            particles,
            width,
            height,
            rng,
        }
    }

    /// Follow a canvas resize. Existing particles keep their positions and
    /// pick up the new bounds on their next recycle.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance every particle by one frame: phase increment, upward drift,
    /// lateral weave, and recycle-in-place once past the top margin.
    pub fn advance(&mut self) {
        let Self {
            particles,
            width,
            height,
            rng,
        } = self;
        for p in particles.iter_mut() {
            p.angle += p.frequency;
            p.pos.y -= p.speed;
            p.pos.x += p.angle.sin() * LATERAL_WEAVE;
            if p.pos.y < -RECYCLE_MARGIN {
                p.pos.y = *height + RECYCLE_MARGIN;
                p.pos.x = rng.gen::<f32>() * *width;
            }
        }
    }

    /// Proximity edges between all unordered particle pairs.
    ///
    /// O(n^2) scan; fine at n <= 50 and revisited only if the field ever
    /// grows past decorative use. At exactly `max_distance` the opacity is 0
    /// and no edge is yielded.
    pub fn connections(&self, max_distance: f32) -> Vec<Edge> {
        let mut edges = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dist = self.particles[i].pos.distance(self.particles[j].pos);
                if dist < max_distance {
                    let opacity = (1.0 - dist / max_distance) * CONNECT_OPACITY_CEILING;
                    if opacity > 0.0 {
                        edges.push(Edge { a: i, b: j, opacity });
                    }
                }
            }
        }
        edges
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
