//! Frame clock with fixed-timestep accumulator

use std::time::Instant;

/// Decouples motion steps from render cadence: sources advance on fixed
/// ticks regardless of how fast the window redraws.
pub struct FrameClock {
    /// Fixed step interval in seconds (default: 1/60)
    pub fixed_step: f64,
    accumulator: f64,
    last_instant: Instant,
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            fixed_step: 1.0 / 60.0,
            accumulator: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock. Call once per redraw.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        // Clamp to avoid spiral of death (max 250ms frame time)
        self.accumulator += elapsed.min(0.25);
    }

    /// Returns true if there's enough accumulated time for a motion step
    pub fn should_step(&self) -> bool {
        self.accumulator >= self.fixed_step
    }

    /// Consume one fixed step from the accumulator
    pub fn consume_step(&mut self) {
        self.accumulator -= self.fixed_step;
    }
}
