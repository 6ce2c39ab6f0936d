#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Frame clock for driving per-frame updates.
pub struct Timer {
    start_time: Instant,
    last_tick: Instant,
    /// Time between the two most recent ticks.
    pub delta: Duration,
    /// Total elapsed time since creation.
    pub elapsed: Duration,
    /// Total number of ticks.
    pub frame_count: u64,
    /// Cap applied by [`dt_seconds`](Self::dt_seconds). A frame that stalls
    /// (debugger, backgrounded tab) would otherwise come back as one giant
    /// integration step.
    pub max_delta: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_tick: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            max_delta: Duration::from_millis(250),
        }
    }

    /// Advances the clock; call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_tick;
        self.elapsed = now - self.start_time;
        self.last_tick = now;
        self.frame_count += 1;
    }

    /// Seconds between the two most recent ticks, capped at `max_delta`.
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.min(self.max_delta).as_secs_f32()
    }
}
