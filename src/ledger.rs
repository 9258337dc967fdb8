//! Ordered record of laps and the statistics derived from it.

use log::debug;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// One recorded lap. Immutable once created, and only ever created by
/// [`LapLedger::record_lap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lap {
    /// 1-based, equal to the lap's position in the ledger.
    pub number: usize,
    /// Elapsed time on the clock when the lap was taken.
    pub total: Duration,
    /// Time since the previous lap, or since zero for the first lap.
    pub split: Duration,
    /// Wall-clock timestamp (ms since the Unix epoch). Display only.
    pub recorded_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LapError {
    /// The clock was not running when the lap was requested.
    NotRunning,
    /// The elapsed value went backwards relative to the previous lap.
    Regressed { previous: Duration, current: Duration },
}

impl fmt::Display for LapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LapError::NotRunning => write!(f, "Laps can only be recorded while the timer is running"),
            LapError::Regressed { previous, current } => write!(
                f,
                "Elapsed time {:?} is earlier than the previous lap at {:?}",
                current, previous
            ),
        }
    }
}

impl std::error::Error for LapError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LapLedger {
    laps: Vec<Lap>,
}

impl LapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lap taken at `elapsed`.
    ///
    /// `elapsed` must come straight from the clock at call time; a value
    /// below the previous lap's total is rejected and nothing is recorded.
    pub fn record_lap(&mut self, elapsed: Duration, recorded_at_ms: u64) -> Result<Lap, LapError> {
        let previous = self.laps.last().map(|l| l.total).unwrap_or(Duration::ZERO);
        let split = elapsed
            .checked_sub(previous)
            .ok_or(LapError::Regressed { previous, current: elapsed })?;

        let lap = Lap {
            number: self.laps.len() + 1,
            total: elapsed,
            split,
            recorded_at_ms,
        };
        debug!("Recorded lap #{} total={:?} split={:?}", lap.number, lap.total, lap.split);
        self.laps.push(lap);
        Ok(lap)
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    /// Same as [`clear`](Self::clear); called when the whole stopwatch resets.
    pub fn reset(&mut self) {
        self.clear();
    }

    pub fn count(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn last(&self) -> Option<&Lap> {
        self.laps.last()
    }

    /// The lap with the shortest split. Earliest lap wins ties.
    pub fn best_lap(&self) -> Option<&Lap> {
        self.laps
            .iter()
            .reduce(|best, lap| if lap.split < best.split { lap } else { best })
    }

    pub fn best(&self) -> Option<Duration> {
        self.best_lap().map(|l| l.split)
    }

    /// Mean split, kept at full `Duration` precision (nanoseconds, truncated).
    /// Rounding for display happens in [`crate::format`].
    pub fn average(&self) -> Option<Duration> {
        if self.laps.is_empty() {
            return None;
        }
        let sum: u128 = self.laps.iter().map(|l| l.split.as_nanos()).sum();
        let mean = sum / self.laps.len() as u128;
        Some(Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX)))
    }

    /// Read-only view in recording order.
    pub fn all(&self) -> &[Lap] {
        &self.laps
    }
}
