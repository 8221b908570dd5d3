use std::time::Instant;

/// Frame clock - tracks delta time between frames
///
/// The first tick after creation or [`Clock::reset`] yields zero, so time
/// spent on startup never turns into one large camera jump.
#[derive(Debug, Default)]
pub struct Clock {
    last_tick: Option<Instant>,
    delta: f32,
}

impl Clock {
    /// Create a clock that has not ticked yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now`
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.delta = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.delta
    }

    /// Delta produced by the most recent tick
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Forget the last tick; the next one yields zero
    pub fn reset(&mut self) {
        self.last_tick = None;
        self.delta = 0.0;
    }
}
