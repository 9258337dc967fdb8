//! Stopwatch and lap-timer core.
//!
//! The [`clock`] engine and the [`ledger`] of laps are plain Rust with no
//! browser dependency, composed by [`session::Stopwatch`]. The Yew front end
//! in `main.rs` is a thin layer over these.

pub mod clock;
pub mod export;
pub mod format;
pub mod ledger;
pub mod session;
pub mod shortcuts;
pub mod store;
pub mod theme;

pub use clock::{ClockEngine, MonotonicClock, SystemClock};
pub use export::{export_file_name, render_report, ExportError};
pub use format::{format_hms_cs, format_stat, TimeParts};
pub use ledger::{Lap, LapError, LapLedger};
pub use session::{Controls, Phase, Stopwatch};
pub use shortcuts::Shortcut;
pub use theme::Theme;

/// Crate-wide constants
pub mod defaults {
    /// Display refresh cadence while running. Rendering only.
    pub const REFRESH_INTERVAL_MS: u32 = 10;
    pub const THEME_STORAGE_KEY: &str = "theme";
    pub const EXPORT_TITLE: &str = "ChronoMaster Pro - Lap Times Export";
    pub const EXPORT_FILE_PREFIX: &str = "chronomaster-laps";
}
