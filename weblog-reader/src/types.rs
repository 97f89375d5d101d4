//! Core types for the weblog reader library
//!
//! This module defines the parsed log record and the error type shared by the
//! parser and the reader. A record is a plain value: it stores whatever integers
//! it was built from and performs no calendar validation.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Number of integer fields in every log line
pub const FIELD_COUNT: usize = 5;

/// One parsed web-server access record
///
/// Entries order chronologically by `(year, month, day, hour, minute)`,
/// compared component-wise in that priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
}

impl LogEntry {
    /// Create an entry from its five fields
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Create an entry from a slice of exactly five fields
    /// in the order year, month, day, hour, minute
    pub fn from_fields(fields: &[i32]) -> Result<Self> {
        match *fields {
            [year, month, day, hour, minute] => Ok(Self::new(year, month, day, hour, minute)),
            _ => Err(ReaderError::MalformedRecord {
                line_number: None,
                line: fields
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            }),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    /// All five fields in sort-key order
    pub fn fields(&self) -> [i32; FIELD_COUNT] {
        [self.year, self.month, self.day, self.hour, self.minute]
    }

    /// Convert to a calendar date/time, if the fields describe a real instant
    ///
    /// Returns `None` for out-of-range values such as day 31 in February.
    /// This never affects ordering, which is always by raw field values.
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        let hour = u32::try_from(self.hour).ok()?;
        let minute = u32::try_from(self.minute).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)?.and_hms_opt(hour, minute, 0)
    }
}

impl Ord for LogEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fields().cmp(&other.fields())
    }
}

impl PartialOrd for LogEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Errors that can occur while loading or traversing a log
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The source could not be opened or read; callers may substitute fallback data
    #[error("Log source unavailable: {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record{}: {line:?} ({reason})", line_suffix(.line_number))]
    MalformedRecord {
        /// 1-based line number, when the record came from a source
        line_number: Option<usize>,
        line: String,
        reason: String,
    },

    #[error("No entries remain (cursor at position {position})")]
    ExhaustedIterator { position: usize },

    #[error("It is not permitted to remove entries")]
    UnsupportedMutation,

    #[error("Too many simulated entries requested: {requested} (maximum {max})")]
    TooManySimulatedEntries { requested: usize, max: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn line_suffix(line_number: &Option<usize>) -> String {
    match line_number {
        Some(n) => format!(" on line {}", n),
        None => String::new(),
    }
}

impl ReaderError {
    /// True if the caller may recover by substituting fallback data
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, ReaderError::SourceUnavailable { .. })
    }
}
