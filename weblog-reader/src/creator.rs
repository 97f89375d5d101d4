//! Simulated log data
//!
//! Supplies plausible synthetic entries when a real log cannot be read, and can
//! write them out as a log file. Days never exceed the 28th, so no per-month
//! day counts are needed.

use crate::types::{LogEntry, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;

/// Anything that can produce entries on demand
pub trait EntrySource {
    /// Produce one entry; callable repeatedly
    fn produce(&mut self) -> LogEntry;
}

/// Random entry generator
pub struct LogfileCreator {
    rng: StdRng,
    years: RangeInclusive<i32>,
}

impl LogfileCreator {
    pub const FIRST_YEAR: i32 = 2020;
    pub const LAST_YEAR: i32 = 2025;

    /// Create a generator seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a generator that always produces the same sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            years: Self::FIRST_YEAR..=Self::LAST_YEAR,
        }
    }

    /// Produce `count` entries in generation order (unsorted)
    pub fn create_entries(&mut self, count: usize) -> Vec<LogEntry> {
        (0..count).map(|_| self.produce()).collect()
    }

    /// Write `count` simulated entries to a log file, one per line
    pub fn create_file(&mut self, path: &Path, count: usize) -> Result<()> {
        log::info!("Writing {} simulated entries to {:?}", count, path);

        let mut out = BufWriter::new(File::create(path)?);
        for _ in 0..count {
            writeln!(out, "{}", self.produce())?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for LogfileCreator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntrySource for LogfileCreator {
    fn produce(&mut self) -> LogEntry {
        let year = self.rng.random_range(self.years.clone());
        let month = self.rng.random_range(1..=12);
        let day = self.rng.random_range(1..=28);
        let hour = self.rng.random_range(0..=23);
        let minute = self.rng.random_range(0..=59);
        LogEntry::new(year, month, day, hour, minute)
    }
}
