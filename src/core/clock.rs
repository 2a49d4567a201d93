// Fixed-step simulation clock for the ambient render loops.
//
// Time advances by a constant increment per animation frame rather than by
// wall-clock delta: the same number of ticks always produces the same visual
// state. Motion speed therefore tracks the display refresh rate.

/// Default time step per animation frame.
pub const TIME_STEP: f32 = 0.02;

#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    time: f32,
    step: f32,
}

impl SimClock {
    pub fn new(step: f32) -> Self {
        Self { time: 0.0, step }
    }

    /// Advance by one frame and return the new accumulated time.
    pub fn tick(&mut self) -> f32 {
        self.time += self.step;
        self.time
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(TIME_STEP)
    }
}
