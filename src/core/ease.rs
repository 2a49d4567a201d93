use instant::Instant;

/// Duration shared by every animated count-up in the product.
pub const SCORE_ANIM_DURATION_MS: f32 = 1500.0;

/// Cubic ease-out: approaches the target with decreasing velocity.
/// Input outside [0, 1] is clamped, so the curve is idempotent past 1.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Time-boxed count-up from 0 to `target`.
///
/// Each widget owns an independent instance; there is no shared animation
/// clock. The displayed value never exceeds `target`, and once the duration
/// has elapsed, sampling keeps returning `target` until `restart` is called
/// with new data.
pub struct ScoreAnimator {
    target: f32,
    duration_ms: f32,
    started: Instant,
}

impl ScoreAnimator {
    pub fn new(target: f32) -> Self {
        Self::with_duration(target, SCORE_ANIM_DURATION_MS)
    }

    pub fn with_duration(target: f32, duration_ms: f32) -> Self {
        Self {
            target,
            duration_ms,
            started: Instant::now(),
        }
    }

    /// Reset to 0 and animate toward a new target.
    pub fn restart(&mut self, target: f32) {
        self.target = target;
        self.started = Instant::now();
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Eased progress in [0, 1] at a given elapsed time.
    pub fn progress_at(&self, elapsed_ms: f32) -> f32 {
        ease_out_cubic(elapsed_ms / self.duration_ms)
    }

    /// Animated value at a given elapsed time. Pure; the live accessors below
    /// sample it with real elapsed time.
    pub fn value_at(&self, elapsed_ms: f32) -> f32 {
        self.target * self.progress_at(elapsed_ms)
    }

    /// Rounded display value at a given elapsed time. Target must be >= 0.
    pub fn displayed_at(&self, elapsed_ms: f32) -> u32 {
        self.value_at(elapsed_ms).round() as u32
    }

    fn elapsed_ms(&self) -> f32 {
        self.started.elapsed().as_secs_f32() * 1000.0
    }

    pub fn value(&self) -> f32 {
        self.value_at(self.elapsed_ms())
    }

    pub fn progress(&self) -> f32 {
        self.progress_at(self.elapsed_ms())
    }

    pub fn displayed(&self) -> u32 {
        self.displayed_at(self.elapsed_ms())
    }

    /// True once the full duration has elapsed (terminal state).
    pub fn done(&self) -> bool {
        self.elapsed_ms() >= self.duration_ms
    }
}
