//! Mood tracker.
//!
//! Keeps a daily mood log on a five-point scale. Recording twice on the same date
//! replaces that day's entry. The log can be saved to and loaded from a JSON file.

use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{MoodEntry, MoodLevel};

/// Date format accepted from the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date such as `2024-03-09`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    Ok(NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)?)
}

/// Daily mood log, kept sorted by date
#[derive(Debug, Clone, Default)]
pub struct MoodTracker {
    entries: Vec<MoodEntry>,
}

impl MoodTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the mood for `date`, replacing any existing entry for that date.
    pub fn record(&mut self, date: NaiveDate, mood: MoodLevel, note: impl Into<String>) {
        let entry = MoodEntry {
            date,
            mood,
            note: note.into(),
        };

        match self.entries.binary_search_by_key(&date, |e| e.date) {
            Ok(idx) => {
                debug!(%date, "Replacing mood entry");
                self.entries[idx] = entry;
            }
            Err(idx) => self.entries.insert(idx, entry),
        }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn get(&self, date: NaiveDate) -> Option<&MoodEntry> {
        self.entries
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Mean mood value, `None` when the log is empty
    pub fn average(&self) -> Option<f32> {
        if self.entries.is_empty() {
            return None;
        }
        let total: u32 = self.entries.iter().map(|e| u32::from(e.mood.value())).sum();
        Some(total as f32 / self.entries.len() as f32)
    }

    /// Load a log from `path`. A missing file yields an empty tracker.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries: Vec<MoodEntry> = serde_json::from_str(&raw)?;
        entries.sort_by_key(|e| e.date);
        entries.dedup_by_key(|e| e.date);
        info!(count = entries.len(), path = %path.display(), "Loaded mood log");
        Ok(Self { entries })
    }

    /// Write the log to `path` as JSON.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2023-11-05 ").unwrap(), day(5));

        let err = parse_date("05/11/2023").unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ref msg) if msg.starts_with("Date parse error"))
        );
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn test_record_upserts_per_day() {
        let mut tracker = MoodTracker::new();
        tracker.record(day(2), MoodLevel::Good, "Good day at work");
        tracker.record(day(1), MoodLevel::Neutral, "Feeling okay");
        tracker.record(day(2), MoodLevel::Low, "");

        assert_eq!(tracker.entries().len(), 2);
        assert_eq!(tracker.entries()[0].date, day(1));
        assert_eq!(tracker.get(day(2)).unwrap().mood, MoodLevel::Low);
    }

    #[test]
    fn test_average() {
        let mut tracker = MoodTracker::new();
        assert_eq!(tracker.average(), None);

        tracker.record(day(1), MoodLevel::Low, "");
        tracker.record(day(2), MoodLevel::Excellent, "");
        assert_eq!(tracker.average(), Some(3.5));
    }
}
