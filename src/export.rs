//! Plain-text lap report.
//!
//! ```text
//! ChronoMaster Pro - Lap Times Export
//! Exported on: 19/10/2026, 14:02:11
//! Total Laps: 2
//!
//! Lap#	Total Time	Split Time
//! 1	00:00:01.00	00:00:01.00
//! 2	00:00:02.50	00:00:01.50
//! ```

use crate::defaults::{EXPORT_FILE_PREFIX, EXPORT_TITLE};
use crate::format::format_hms_cs;
use crate::ledger::Lap;
use log::info;
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    NoLaps,
    Csv(csv::Error),
    Encoding(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoLaps => write!(f, "There are no laps to export"),
            ExportError::Csv(e) => write!(f, "Failed to write lap rows: {}", e),
            ExportError::Encoding(e) => write!(f, "Lap report is not valid text: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

/// Renders the report. `exported_on` is shown verbatim in the header.
pub fn render_report(laps: &[Lap], exported_on: &str) -> Result<String, ExportError> {
    if laps.is_empty() {
        return Err(ExportError::NoLaps);
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(["Lap#", "Total Time", "Split Time"])?;
    for lap in laps {
        wtr.write_record([
            lap.number.to_string(),
            format_hms_cs(lap.total),
            format_hms_cs(lap.split),
        ])?;
    }
    let rows = wtr
        .into_inner()
        .map_err(|e| ExportError::Encoding(e.to_string()))?;
    let rows = String::from_utf8(rows).map_err(|e| ExportError::Encoding(e.to_string()))?;

    let report = format!(
        "{}\nExported on: {}\nTotal Laps: {}\n\n{}",
        EXPORT_TITLE,
        exported_on,
        laps.len(),
        rows.trim_end_matches('\n')
    );
    info!("Rendered lap report with {} laps", laps.len());
    Ok(report)
}

/// Download name for a report exported on `iso_timestamp`
/// (`2026-10-19T12:00:00.000Z` gives `chronomaster-laps-2026-10-19.txt`).
pub fn export_file_name(iso_timestamp: &str) -> String {
    let date = iso_timestamp.split('T').next().unwrap_or(iso_timestamp);
    format!("{}-{}.txt", EXPORT_FILE_PREFIX, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LapLedger;
    use std::time::Duration;

    fn laps(totals: &[u64]) -> Vec<Lap> {
        let mut ledger = LapLedger::new();
        for &t in totals {
            ledger.record_lap(Duration::from_millis(t), 0).unwrap();
        }
        ledger.all().to_vec()
    }

    #[test]
    fn test_report_layout() {
        let report = render_report(&laps(&[1_000, 2_500]), "19/10/2026, 14:02:11").unwrap();
        let expected = "ChronoMaster Pro - Lap Times Export\n\
                        Exported on: 19/10/2026, 14:02:11\n\
                        Total Laps: 2\n\
                        \n\
                        Lap#\tTotal Time\tSplit Time\n\
                        1\t00:00:01.00\t00:00:01.00\n\
                        2\t00:00:02.50\t00:00:01.50";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_long_sessions_keep_hours() {
        let report = render_report(&laps(&[3_725_410]), "now").unwrap();
        assert!(report.ends_with("1\t01:02:05.41\t01:02:05.41"));
    }

    #[test]
    fn test_empty_export_is_rejected() {
        assert!(matches!(render_report(&[], "now"), Err(ExportError::NoLaps)));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            export_file_name("2026-10-19T12:00:00.000Z"),
            "chronomaster-laps-2026-10-19.txt"
        );
        assert_eq!(export_file_name("2026-10-19"), "chronomaster-laps-2026-10-19.txt");
    }
}
