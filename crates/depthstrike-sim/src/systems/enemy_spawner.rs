//! Enemy spawn timer.
//!
//! Enemies appear on a fixed wall-clock interval that is independent of
//! the tick rate. The host feeds elapsed time in; the timer reports how
//! many spawns fell due.

use std::time::Duration;

use depthstrike_core::constants::ENEMY_SPAWN_INTERVAL_MS;

/// Interval timer with start/stop semantics.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: Duration,
    accumulated: Duration,
    running: bool,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(ENEMY_SPAWN_INTERVAL_MS))
    }
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    /// (Re)start from zero. Restarting a running timer discards any
    /// partial interval.
    pub fn start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feed elapsed time; returns the number of intervals that completed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }
        fired
    }
}
