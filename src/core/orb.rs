use glam::Vec2;
use std::f32::consts::TAU;

// Geometry for the pulsating "AI orb": breathing glow layers, a radially
// modulated waveform ring, and orbiting accent particles while thinking.
// Everything here is center-relative; the renderer adds the canvas center.

pub const GLOW_LAYER_COUNT: usize = 5;
pub const WAVE_BASE_RADIUS: f32 = 50.0;
pub const WAVE_COUNT_IDLE: usize = 16;
pub const WAVE_COUNT_THINKING: usize = 24;
pub const WAVE_AMPLITUDE_IDLE: f32 = 8.0;
pub const WAVE_AMPLITUDE_THINKING: f32 = 15.0;
pub const ORBITER_COUNT: usize = 6;
pub const ORBITER_RADIUS: f32 = 45.0;

/// Visual state flags, owned and mutated by the caller. Every combination is
/// valid and renders deterministically.
#[derive(Clone, Copy, Debug)]
pub struct OrbFlags {
    /// Dims the glow to 30% intensity when false.
    pub active: bool,
    /// Densifies the waveform and overlays orbiters when true.
    pub thinking: bool,
}

impl Default for OrbFlags {
    fn default() -> Self {
        Self {
            active: true,
            thinking: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GlowLayer {
    pub radius: f32,
    pub alpha: f32,
}

/// Concentric glow layers, outermost first. Radius and alpha breathe with
/// time, phase-offset per layer.
pub fn glow_layers(time: f32, active: bool) -> Vec<GlowLayer> {
    let dim = if active { 1.0 } else { 0.3 };
    (1..=GLOW_LAYER_COUNT)
        .rev()
        .map(|i| {
            let i = i as f32;
            GlowLayer {
                radius: 60.0 + i * 10.0 + (time * 2.0 + i).sin() * 5.0,
                alpha: (0.1 - i * 0.015) * dim,
            }
        })
        .collect()
}

pub fn wave_count(thinking: bool) -> usize {
    if thinking {
        WAVE_COUNT_THINKING
    } else {
        WAVE_COUNT_IDLE
    }
}

pub fn wave_amplitude(thinking: bool) -> f32 {
    if thinking {
        WAVE_AMPLITUDE_THINKING
    } else {
        WAVE_AMPLITUDE_IDLE
    }
}

/// Samples per ring revolution; the path is closed by the renderer.
pub fn wave_sample_count(thinking: bool) -> usize {
    wave_count(thinking) * 4
}

/// Closed waveform ring: one point per sample, radius perturbed by a sine of
/// both angle and time so the ripple travels around the ring.
pub fn waveform_ring(time: f32, thinking: bool) -> Vec<Vec2> {
    let samples = wave_sample_count(thinking);
    let count = wave_count(thinking) as f32;
    let amplitude = wave_amplitude(thinking);
    (0..samples)
        .map(|i| {
            let angle = i as f32 / samples as f32 * TAU;
            let wave = (angle * count + time * 4.0).sin() * amplitude;
            let radius = WAVE_BASE_RADIUS + wave;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Accent particles orbiting the center, 60 degrees apart; empty unless
/// thinking.
pub fn orbiters(time: f32, thinking: bool) -> Vec<Vec2> {
    if !thinking {
        return Vec::new();
    }
    (0..ORBITER_COUNT)
        .map(|i| {
            let angle = time * 3.0 + i as f32 * TAU / ORBITER_COUNT as f32;
            Vec2::new(angle.cos(), angle.sin()) * ORBITER_RADIUS
        })
        .collect()
}
