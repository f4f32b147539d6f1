/// Fixed timestep accumulator.
/// Decouples simulation rate from render rate: frame deltas are banked and
/// paid out as whole fixed steps.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time not yet consumed by a full step.
    accumulator: f32,
}

/// Most steps a single frame may run, bounding catch-up after a stall.
const MAX_CATCH_UP_STEPS: u32 = 10;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Bank frame time and return the number of fixed steps to run now.
    /// The fractional remainder stays banked for the next frame.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * MAX_CATCH_UP_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between steps (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
