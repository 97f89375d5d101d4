//! Main reader API
//!
//! `LogfileReader` loads every line of a log, parses it, sorts the entries
//! chronologically and hands them out through a restartable forward-only cursor.
//! The entry sequence is never modified after load.

use crate::config::{ReaderConfig, DEFAULT_LOG_FILE, MAX_SIMULATED_ENTRIES};
use crate::creator::{EntrySource, LogfileCreator};
use crate::parser::parse_lines;
use crate::types::{LogEntry, ReaderError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Layout of each line in the log file
pub const LOG_FORMAT: &str = "Year Month(1-12) Day Hour Minute";

/// A traversal position into a sorted entry sequence
///
/// The cursor is a plain value, separate from the entries it walks over, so
/// any number of independent traversals can share one sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// A cursor at the first entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the entry the next call to `advance` will return
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn has_next(&self, entries: &[LogEntry]) -> bool {
        self.position < entries.len()
    }

    /// Return the entry at the cursor and move past it
    pub fn advance<'a>(&mut self, entries: &'a [LogEntry]) -> Result<&'a LogEntry> {
        let entry = entries
            .get(self.position)
            .ok_or(ReaderError::ExhaustedIterator {
                position: self.position,
            })?;
        self.position += 1;
        Ok(entry)
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Sorted, read-only view of a web-server access log
#[derive(Debug, Clone)]
pub struct LogfileReader {
    entries: Vec<LogEntry>,
    cursor: Cursor,
    /// Where the entries came from (None for in-memory data)
    source: Option<PathBuf>,
    /// True if the entries were substituted rather than read
    simulated: bool,
    rejected_removals: usize,
}

impl LogfileReader {
    /// Load, parse and sort every line of the named file
    ///
    /// # Returns
    /// * `Err(SourceUnavailable)` if the file cannot be read; the caller may
    ///   substitute fallback data
    /// * `Err(MalformedRecord)` for the first line that does not parse; nothing
    ///   is partially loaded
    ///
    /// # Example
    /// ```no_run
    /// use weblog_reader::LogfileReader;
    ///
    /// let mut reader = LogfileReader::open("weblog.txt").unwrap();
    /// while reader.has_next() {
    ///     println!("{}", reader.next_entry().unwrap());
    /// }
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading log file: {:?}", path);

        let content =
            std::fs::read_to_string(path).map_err(|source| ReaderError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let entries = parse_lines(content.lines())?;
        log::info!("Parsed {} entries from {:?}", entries.len(), path);

        let mut reader = Self::from_entries(entries);
        reader.source = Some(path.to_path_buf());
        Ok(reader)
    }

    /// Load the default log file (`weblog.txt`)
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_LOG_FILE)
    }

    /// Load the named file, substituting `count` entries from `fallback`
    /// if the file cannot be read
    ///
    /// Malformed lines are still fatal: only an unavailable source is replaced.
    pub fn open_with_fallback<S: EntrySource>(
        path: impl AsRef<Path>,
        fallback: &mut S,
        count: usize,
    ) -> Result<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Err(e) if e.is_source_unavailable() => {
                log::warn!("{}", e);
                log::warn!("Using {} simulated entries instead of {:?}", count, path);
                let mut reader = Self::from_source(fallback, count);
                reader.source = Some(path.to_path_buf());
                Ok(reader)
            }
            other => other,
        }
    }

    /// Load according to a configuration, simulating data if it allows
    ///
    /// Fails with `TooManySimulatedEntries` if fallback is enabled and
    /// `simulated_entries` exceeds `MAX_SIMULATED_ENTRIES`.
    pub fn open_or_simulate(config: &ReaderConfig) -> Result<Self> {
        if !config.fallback {
            return Self::open(&config.source);
        }

        if config.simulated_entries > MAX_SIMULATED_ENTRIES {
            return Err(ReaderError::TooManySimulatedEntries {
                requested: config.simulated_entries,
                max: MAX_SIMULATED_ENTRIES,
            });
        }

        let mut creator = match config.seed {
            Some(seed) => LogfileCreator::with_seed(seed),
            None => LogfileCreator::new(),
        };
        Self::open_with_fallback(&config.source, &mut creator, config.simulated_entries)
    }

    /// Parse in-memory lines, failing on the first malformed one
    pub fn from_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Ok(Self::from_entries(parse_lines(lines)?))
    }

    /// Build a reader over `count` entries drawn from `source`
    pub fn from_source<S: EntrySource>(source: &mut S, count: usize) -> Self {
        let entries = (0..count).map(|_| source.produce()).collect();
        let mut reader = Self::from_entries(entries);
        reader.simulated = true;
        reader
    }

    /// Sort the given entries and position the cursor at the first one
    pub fn from_entries(mut entries: Vec<LogEntry>) -> Self {
        entries.sort();
        log::debug!("Sorted {} entries", entries.len());

        Self {
            entries,
            cursor: Cursor::new(),
            source: None,
            simulated: false,
            rejected_removals: 0,
        }
    }

    /// Does the reader have more data to supply?
    pub fn has_next(&self) -> bool {
        self.cursor.has_next(&self.entries)
    }

    /// Return the entry at the cursor and advance past it
    ///
    /// Fails with `ExhaustedIterator` once every entry has been returned;
    /// check `has_next()` first.
    pub fn next_entry(&mut self) -> Result<LogEntry> {
        self.cursor.advance(&self.entries).copied()
    }

    /// Move the cursor back to the first entry so the data can be
    /// traversed again
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Removing entries is not permitted
    ///
    /// The sequence is left untouched; the rejection is logged and counted.
    pub fn remove(&mut self) {
        log::warn!("{}", ReaderError::UnsupportedMutation);
        self.rejected_removals += 1;
    }

    /// How many times `remove()` has been refused
    pub fn rejected_removals(&self) -> usize {
        self.rejected_removals
    }

    /// A description of the expected line layout
    pub fn format(&self) -> &'static str {
        LOG_FORMAT
    }

    /// Current cursor position
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// All entries in sorted order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// A fresh traversal that does not move the reader's own cursor
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The file this reader was asked to load, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// True if the entries are simulated rather than read from the source
    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    /// Write every entry in sorted order, one per line
    pub fn write_data<W: Write>(&self, out: &mut W) -> Result<()> {
        for entry in &self.entries {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LogfileReader {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reader() -> LogfileReader {
        LogfileReader::from_lines(["2024 5 1 10 0", "2023 12 31 23 59", "2024 5 1 9 0"]).unwrap()
    }

    fn drain(reader: &mut LogfileReader) -> Vec<LogEntry> {
        let mut out = Vec::new();
        while reader.has_next() {
            out.push(reader.next_entry().unwrap());
        }
        out
    }

    #[test]
    fn test_entries_sorted_on_load() {
        let mut reader = sample_reader();
        let rendered: Vec<String> = drain(&mut reader).iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["2023 12 31 23 59", "2024 5 1 9 0", "2024 5 1 10 0"]
        );
    }

    #[test]
    fn test_next_past_end_fails() {
        let mut reader = sample_reader();
        drain(&mut reader);
        assert!(!reader.has_next());

        let err = reader.next_entry().unwrap_err();
        assert!(matches!(err, ReaderError::ExhaustedIterator { position: 3 }));
        // Still exhausted, no stale data
        assert!(reader.next_entry().is_err());
    }

    #[test]
    fn test_reset_restarts_traversal() {
        let mut reader = sample_reader();
        let first = drain(&mut reader);
        reader.reset();
        assert_eq!(reader.cursor().position(), 0);
        let second = drain(&mut reader);
        assert_eq!(first, second);

        // Reset mid-traversal
        reader.reset();
        reader.next_entry().unwrap();
        reader.reset();
        assert_eq!(reader.next_entry().unwrap(), first[0]);
    }

    #[test]
    fn test_empty_reader() {
        let mut reader = LogfileReader::from_lines(std::iter::empty()).unwrap();
        assert!(reader.is_empty());
        assert!(!reader.has_next());
        assert!(reader.next_entry().is_err());
    }

    #[test]
    fn test_remove_leaves_entries_untouched() {
        let mut reader = sample_reader();
        let before = reader.entries().to_vec();
        reader.next_entry().unwrap();

        reader.remove();
        reader.remove();

        assert_eq!(reader.entries(), before.as_slice());
        assert_eq!(reader.rejected_removals(), 2);
        assert_eq!(reader.cursor().position(), 1);
    }

    #[test]
    fn test_iter_is_independent_of_cursor() {
        let mut reader = sample_reader();
        reader.next_entry().unwrap();

        let all: Vec<_> = reader.iter().copied().collect();
        assert_eq!(all.len(), 3);
        assert_eq!(reader.cursor().position(), 1);
    }

    #[test]
    fn test_independent_cursors() {
        let reader = sample_reader();
        let mut a = Cursor::new();
        let mut b = Cursor::new();

        a.advance(reader.entries()).unwrap();
        a.advance(reader.entries()).unwrap();
        let from_b = b.advance(reader.entries()).unwrap();

        assert_eq!(from_b, &reader.entries()[0]);
        assert_eq!(a.position(), 2);
        assert_eq!(b.position(), 1);
    }

    #[test]
    fn test_malformed_line_aborts_load() {
        let err = LogfileReader::from_lines(["2024 5 1 10 0", "2024 13"]).unwrap_err();
        assert!(matches!(
            err,
            ReaderError::MalformedRecord {
                line_number: Some(2),
                ..
            }
        ));
    }

    #[test]
    fn test_write_data() {
        let reader = sample_reader();
        let mut out = Vec::new();
        reader.write_data(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2023 12 31 23 59\n2024 5 1 9 0\n2024 5 1 10 0\n"
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(sample_reader().format(), "Year Month(1-12) Day Hour Minute");
    }

    #[test]
    fn test_default_source_name() {
        assert_eq!(ReaderConfig::default().source, Path::new(DEFAULT_LOG_FILE));
        assert_eq!(DEFAULT_LOG_FILE, "weblog.txt");

        // Only meaningful when no weblog.txt sits in the working directory
        if !Path::new(DEFAULT_LOG_FILE).exists() {
            match LogfileReader::open_default() {
                Err(ReaderError::SourceUnavailable { path, .. }) => {
                    assert_eq!(path, PathBuf::from("weblog.txt"));
                }
                other => panic!("expected SourceUnavailable, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_simulated_entry_limit() {
        let config = ReaderConfig::new()
            .with_source("no-such-dir/missing.txt")
            .with_simulated_entries(MAX_SIMULATED_ENTRIES + 1);
        let err = LogfileReader::open_or_simulate(&config).unwrap_err();
        assert!(matches!(
            err,
            ReaderError::TooManySimulatedEntries {
                requested,
                max: MAX_SIMULATED_ENTRIES,
            } if requested == MAX_SIMULATED_ENTRIES + 1
        ));

        let small = ReaderConfig::new()
            .with_source("no-such-dir/missing.txt")
            .with_simulated_entries(10)
            .with_seed(5);
        assert_eq!(LogfileReader::open_or_simulate(&small).unwrap().len(), 10);
    }

    #[test]
    fn test_from_source_sorts_simulated_data() {
        let mut creator = LogfileCreator::with_seed(3);
        let reader = LogfileReader::from_source(&mut creator, 50);
        assert!(reader.is_simulated());
        assert_eq!(reader.len(), 50);
        assert!(reader.entries().windows(2).all(|w| w[0] <= w[1]));
    }
}
