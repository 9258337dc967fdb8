//! Run/pause clock engine and the time sources it reads from.
//!
//! The engine never looks at wall-clock time. Elapsed time is derived from a
//! [`MonotonicClock`], so adjusting the system clock cannot make a running
//! stopwatch jump backwards.

#[cfg(target_arch = "wasm32")]
use log::warn;
use std::cell::Cell;
#[cfg(test)]
use std::rc::Rc;
use std::time::Duration;

/// Source of monotonic time measured from an arbitrary fixed origin.
pub trait MonotonicClock {
    /// Time since the clock's origin. Never decreases between calls.
    fn now(&self) -> Duration;
}

/// Platform monotonic clock: `performance.now()` in the browser,
/// `Instant` everywhere else.
///
/// Without `performance` (some embedded webviews) the browser build falls
/// back to `Date.now()`, which is wall-clock time. Readings are clamped so
/// they never go below the previous one; a wall-clock step backwards shows
/// up as the display holding still until time catches up.
#[derive(Debug, Clone)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
    #[cfg(target_arch = "wasm32")]
    performance: Option<web_sys::Performance>,
    last: Cell<Duration>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            origin: std::time::Instant::now(),
            #[cfg(target_arch = "wasm32")]
            performance: Self::detect_performance(),
            last: Cell::new(Duration::ZERO),
        }
    }

    /// The source is chosen once, so readings never mix two origins.
    #[cfg(target_arch = "wasm32")]
    fn detect_performance() -> Option<web_sys::Performance> {
        let performance = web_sys::window().and_then(|w| w.performance());
        if performance.is_none() {
            warn!("performance.now() unavailable; timing falls back to Date.now()");
        }
        performance
    }

    /// Never returns less than the previous reading.
    fn clamp_forward(&self, raw: Duration) -> Duration {
        let now = raw.max(self.last.get());
        self.last.set(now);
        now
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl MonotonicClock for SystemClock {
    fn now(&self) -> Duration {
        self.clamp_forward(self.origin.elapsed())
    }
}

#[cfg(target_arch = "wasm32")]
impl MonotonicClock for SystemClock {
    fn now(&self) -> Duration {
        let ms = match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        };
        self.clamp_forward(Duration::from_secs_f64(ms.max(0.0) / 1000.0))
    }
}

/// Hand-driven clock for deterministic tests. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: Duration) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

#[cfg(test)]
impl MonotonicClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Milliseconds since the Unix epoch. Informational only.
#[cfg(not(target_arch = "wasm32"))]
pub fn wall_clock_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Milliseconds since the Unix epoch. Informational only.
#[cfg(target_arch = "wasm32")]
pub fn wall_clock_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Tracks running/paused state and computes elapsed time.
///
/// While running, elapsed time is `now - anchor` where the anchor is the
/// resume instant shifted back by everything accumulated before it. The
/// anchor is kept as the `(resumed_at, accumulated)` pair so no arithmetic
/// ever needs a negative timestamp.
#[derive(Debug, Clone)]
pub struct ClockEngine<C: MonotonicClock = SystemClock> {
    clock: C,
    running: bool,
    started: bool,
    resumed_at: Duration,
    accumulated: Duration,
}

impl ClockEngine<SystemClock> {
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: MonotonicClock> ClockEngine<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running: false,
            started: false,
            resumed_at: Duration::ZERO,
            accumulated: Duration::ZERO,
        }
    }

    /// Starts or resumes. No-op while already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.resumed_at = self.clock.now();
        self.running = true;
        self.started = true;
    }

    /// Freezes elapsed time. No-op while not running.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.accumulated = self.elapsed();
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.started = false;
        self.resumed_at = Duration::ZERO;
        self.accumulated = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        if self.running {
            self.accumulated + self.clock.now().saturating_sub(self.resumed_at)
        } else {
            self.accumulated
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stopped after having run at least once since the last reset.
    pub fn is_paused(&self) -> bool {
        !self.running && self.started
    }
}
