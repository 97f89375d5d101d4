//! Log line parser
//!
//! Converts one raw line of the form `year month day hour minute` into a
//! [`LogEntry`]. Fields must be base-10 integers; there are exactly five of them.
//! No calendar validation is done: `2024 2 31 0 0` parses fine.

use crate::types::{LogEntry, ReaderError, Result, FIELD_COUNT};
use std::str::FromStr;

/// Parse a single log line into an entry
///
/// `line_number` is 1-based and only used to identify the offending line
/// in a `MalformedRecord` error.
pub fn parse_line(line: &str, line_number: Option<usize>) -> Result<LogEntry> {
    let malformed = |reason: String| ReaderError::MalformedRecord {
        line_number,
        line: line.to_string(),
        reason,
    };

    let mut fields = [0i32; FIELD_COUNT];
    let mut count = 0;

    for token in line.split_whitespace() {
        let value = token
            .parse::<i32>()
            .map_err(|e| malformed(format!("field {:?} is not an integer: {}", token, e)))?;

        if count < FIELD_COUNT {
            fields[count] = value;
        }
        count += 1;
    }

    if count != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT, count
        )));
    }

    LogEntry::from_fields(&fields)
}

/// Parse every line of an in-memory log, failing on the first malformed line
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<LogEntry>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_line(line, Some(index + 1)))
        .collect()
}

impl FromStr for LogEntry {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self> {
        parse_line(s, None)
    }
}
