//! Composed stopwatch: one clock, one lap ledger, one state machine.
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --start--> Running
//! {Running, Paused} --reset--> Idle
//! Running --lap--> Running
//! ```
//!
//! Everything the UI enables or labels is derived from [`Phase`] through pure
//! functions, so views and tests read the same source of truth.

use crate::clock::{wall_clock_ms, ClockEngine, MonotonicClock, SystemClock};
use crate::ledger::{Lap, LapError, LapLedger};
use log::{debug, info};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    Paused,
}

impl Phase {
    pub fn status_text(self) -> &'static str {
        match self {
            Phase::Idle => "Ready to start",
            Phase::Running => "Running...",
            Phase::Paused => "Paused",
        }
    }

    pub fn start_label(self) -> &'static str {
        match self {
            Phase::Idle => "Start",
            Phase::Running => "Running",
            Phase::Paused => "Resume",
        }
    }
}

/// Which controls are currently usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
    pub lap: bool,
    pub clear_laps: bool,
    pub export: bool,
}

impl Controls {
    pub fn for_state(phase: Phase, lap_count: usize) -> Self {
        let running = phase == Phase::Running;
        let has_laps = lap_count > 0;
        Self {
            start: !running,
            pause: running,
            reset: phase != Phase::Idle,
            lap: running,
            clear_laps: has_laps,
            export: has_laps,
        }
    }
}

pub struct Stopwatch<C: MonotonicClock = SystemClock> {
    clock: ClockEngine<C>,
    laps: LapLedger,
}

impl Stopwatch<SystemClock> {
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock::new())
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::with_system_clock()
    }
}

impl<C: MonotonicClock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock: ClockEngine::new(clock),
            laps: LapLedger::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.clock.is_running() {
            Phase::Running
        } else if self.clock.is_paused() {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }

    pub fn controls(&self) -> Controls {
        Controls::for_state(self.phase(), self.laps.count())
    }

    pub fn start(&mut self) {
        if self.clock.is_running() {
            return;
        }
        self.clock.start();
        info!("Stopwatch started at {:?}", self.clock.elapsed());
    }

    pub fn pause(&mut self) {
        if !self.clock.is_running() {
            return;
        }
        self.clock.pause();
        info!("Stopwatch paused at {:?}", self.clock.elapsed());
    }

    /// Starts when allowed, otherwise pauses when allowed.
    pub fn toggle(&mut self) {
        let controls = self.controls();
        if controls.start {
            self.start();
        } else if controls.pause {
            self.pause();
        }
    }

    /// Stops the clock and drops every lap.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.laps.reset();
        info!("Stopwatch reset");
    }

    /// Records a lap at the current elapsed time. Rejected while not running,
    /// leaving the ledger untouched.
    pub fn lap(&mut self) -> Result<Lap, LapError> {
        self.lap_at(wall_clock_ms())
    }

    pub fn lap_at(&mut self, recorded_at_ms: u64) -> Result<Lap, LapError> {
        if !self.clock.is_running() {
            debug!("Lap rejected: stopwatch is {:?}", self.phase());
            return Err(LapError::NotRunning);
        }
        self.laps.record_lap(self.clock.elapsed(), recorded_at_ms)
    }

    pub fn clear_laps(&mut self) {
        self.laps.clear();
        info!("Lap list cleared");
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn laps(&self) -> &LapLedger {
        &self.laps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn stopwatch() -> (Stopwatch<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Duration::from_secs(3));
        (Stopwatch::new(clock.clone()), clock)
    }

    #[test]
    fn test_phase_transitions() {
        let (mut sw, clock) = stopwatch();
        assert_eq!(sw.phase(), Phase::Idle);
        sw.start();
        assert_eq!(sw.phase(), Phase::Running);
        sw.pause();
        assert_eq!(sw.phase(), Phase::Paused);
        sw.start();
        assert_eq!(sw.phase(), Phase::Running);
        sw.reset();
        assert_eq!(sw.phase(), Phase::Idle);

        // Paused at zero elapsed is still Paused, not Idle.
        sw.start();
        sw.pause();
        assert_eq!(sw.phase(), Phase::Paused);
        clock.advance_ms(1);
        sw.reset();
        assert_eq!(sw.phase(), Phase::Idle);
    }

    #[test]
    fn test_scenario_laps() {
        let (mut sw, clock) = stopwatch();
        sw.start();
        clock.advance_ms(1_000);
        sw.lap_at(1).unwrap();
        clock.advance_ms(1_500);
        sw.lap_at(2).unwrap();
        clock.advance_ms(100);
        let third = sw.lap_at(3).unwrap();

        assert_eq!(third.number, 3);
        assert_eq!(third.total, Duration::from_millis(2_600));
        assert_eq!(sw.laps().count(), 3);
        assert_eq!(sw.laps().best(), Some(Duration::from_millis(100)));
        assert_eq!(sw.laps().average(), Some(Duration::from_nanos(866_666_666)));
    }

    #[test]
    fn test_lap_while_paused_is_rejected() {
        let (mut sw, clock) = stopwatch();
        sw.start();
        clock.advance_ms(900);
        sw.lap_at(0).unwrap();
        sw.pause();
        clock.advance_ms(50);

        let before = sw.laps().clone();
        assert_eq!(sw.lap_at(0), Err(LapError::NotRunning));
        assert_eq!(sw.laps(), &before);
        assert_eq!(sw.laps().best(), Some(Duration::from_millis(900)));
        assert_eq!(sw.laps().average(), Some(Duration::from_millis(900)));
    }

    #[test]
    fn test_lap_while_idle_is_rejected() {
        let (mut sw, _clock) = stopwatch();
        assert_eq!(sw.lap(), Err(LapError::NotRunning));
        assert!(sw.laps().is_empty());
    }

    #[test]
    fn test_reset_clears_laps_and_clock() {
        let (mut sw, clock) = stopwatch();
        sw.start();
        clock.advance_ms(250);
        sw.lap().unwrap();
        sw.reset();
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert!(!sw.is_running());
        assert_eq!(sw.laps().count(), 0);
        assert_eq!(sw.laps().best(), None);
    }

    #[test]
    fn test_clear_laps_keeps_clock() {
        let (mut sw, clock) = stopwatch();
        sw.start();
        clock.advance_ms(400);
        sw.lap().unwrap();
        sw.clear_laps();
        assert!(sw.is_running());
        assert_eq!(sw.elapsed(), Duration::from_millis(400));
        assert_eq!(sw.laps().average(), None);

        // Next lap measures its split from zero again.
        clock.advance_ms(100);
        let lap = sw.lap().unwrap();
        assert_eq!(lap.number, 1);
        assert_eq!(lap.split, Duration::from_millis(500));
    }

    #[test]
    fn test_toggle_alternates() {
        let (mut sw, _clock) = stopwatch();
        sw.toggle();
        assert_eq!(sw.phase(), Phase::Running);
        sw.toggle();
        assert_eq!(sw.phase(), Phase::Paused);
        sw.toggle();
        assert_eq!(sw.phase(), Phase::Running);
    }

    #[test]
    fn test_controls_per_phase() {
        let idle = Controls::for_state(Phase::Idle, 0);
        assert!(idle.start && !idle.pause && !idle.reset && !idle.lap);
        assert!(!idle.clear_laps && !idle.export);

        let running = Controls::for_state(Phase::Running, 2);
        assert!(!running.start && running.pause && running.reset && running.lap);
        assert!(running.clear_laps && running.export);

        let paused = Controls::for_state(Phase::Paused, 0);
        assert!(paused.start && !paused.pause && paused.reset && !paused.lap);
        assert!(!paused.export);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Phase::Idle.status_text(), "Ready to start");
        assert_eq!(Phase::Running.status_text(), "Running...");
        assert_eq!(Phase::Paused.start_label(), "Resume");
        assert_eq!(Phase::Idle.start_label(), "Start");
    }
}
