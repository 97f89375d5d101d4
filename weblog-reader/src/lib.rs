//! Weblog Reader Library
//!
//! Reads a web-server access log whose lines are fixed-field date/time records,
//! converts each line into a [`LogEntry`], sorts the entries chronologically and
//! exposes them for repeated sequential traversal.
//!
//! # Architecture
//!
//! - `parser` turns one line into an entry, or a `MalformedRecord` error
//! - `reader` loads a whole source, sorts it, and owns a restartable cursor
//! - `creator` produces simulated entries for an unavailable source
//!
//! The library does NOT:
//! - Stream or incrementally parse unbounded files
//! - Validate calendar dates (day 31 in February is stored as given)
//! - Allow entries to be added or removed after load
//!
//! # Example Usage
//!
//! ```no_run
//! use weblog_reader::{LogfileCreator, LogfileReader};
//!
//! let mut creator = LogfileCreator::new();
//! let mut reader = LogfileReader::open_with_fallback("weblog.txt", &mut creator, 100).unwrap();
//!
//! while reader.has_next() {
//!     let entry = reader.next_entry().unwrap();
//!     println!("{}", entry);
//! }
//!
//! // Walk the same data again
//! reader.reset();
//! ```

// Public modules
pub mod config;
pub mod creator;
pub mod parser;
pub mod reader;
pub mod types;

// Re-export main types for convenience
pub use config::{
    ReaderConfig, DEFAULT_LOG_FILE, DEFAULT_SIMULATED_ENTRIES, MAX_SIMULATED_ENTRIES,
};
pub use creator::{EntrySource, LogfileCreator};
pub use parser::parse_line;
pub use reader::{Cursor, LogfileReader, LOG_FORMAT};
pub use types::{LogEntry, ReaderError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
