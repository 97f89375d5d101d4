//! Entry dump output
//!
//! Renders the loaded entries in sort order as plain text or JSON.

use crate::config::OutputFormat;
use anyhow::Result;
use std::io::Write;
use weblog_reader::LogfileReader;

/// Write every entry in the requested format
pub fn write_entries<W: Write>(
    reader: &LogfileReader,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => reader.write_data(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reader.entries())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weblog_reader::LogEntry;

    fn reader() -> LogfileReader {
        LogfileReader::from_entries(vec![
            LogEntry::new(2024, 5, 1, 10, 0),
            LogEntry::new(2023, 12, 31, 23, 59),
        ])
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        write_entries(&reader(), OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2023 12 31 23 59\n2024 5 1 10 0\n");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_entries(&reader(), OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["year"], 2023);
        assert_eq!(list[1]["hour"], 10);
    }
}
