//! Clock abstraction for deterministic timer handling.
//!
//! Engines never call `Instant::now()` themselves; they ask the [`Clock`]
//! they were built with. Production uses [`SystemClock`], tests drive a
//! [`ManualClock`] forward explicitly, and the async driver uses
//! [`TokioClock`] so paused tokio time applies.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Real monotonic time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced time for tests and replay.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// and give another to the engine.
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Arc<Mutex<Instant>>,
    base: Instant,
}

impl ManualClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            instant: Arc::new(Mutex::new(now)),
            base: now,
        }
    }

    /// Advance time by a duration.
    pub fn advance(&self, duration: Duration) {
        *self.instant.lock() += duration;
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.instant.lock().saturating_duration_since(self.base)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.instant.lock()
    }
}

/// Tokio's clock, which honours `tokio::time::pause`.
#[cfg(feature = "driver")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[cfg(feature = "driver")]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
