//! Reader configuration types
//!
//! This module defines the configuration for loading a log, including what to do
//! when the source cannot be read.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log file used when no source is named
pub const DEFAULT_LOG_FILE: &str = "weblog.txt";

/// Number of simulated entries substituted for an unavailable source
pub const DEFAULT_SIMULATED_ENTRIES: usize = 100;

/// Upper bound on simulated entries; the whole set is held in memory
pub const MAX_SIMULATED_ENTRIES: usize = 1_000_000;

/// Configuration for the reader library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Path of the log file to load
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Whether to substitute simulated data when the source is unavailable
    #[serde(default = "default_true")]
    pub fallback: bool,

    /// How many simulated entries to substitute (at most `MAX_SIMULATED_ENTRIES`)
    #[serde(default = "default_simulated_entries")]
    pub simulated_entries: usize,

    /// Optional: seed for reproducible simulated data
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_true() -> bool {
    true
}

fn default_simulated_entries() -> usize {
    DEFAULT_SIMULATED_ENTRIES
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            fallback: true,
            simulated_entries: DEFAULT_SIMULATED_ENTRIES,
            seed: None,
        }
    }
}

impl ReaderConfig {
    /// Create a new reader configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the source path
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Builder method: enable or disable fallback substitution
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    /// Builder method: set the number of simulated entries
    pub fn with_simulated_entries(mut self, count: usize) -> Self {
        self.simulated_entries = count;
        self
    }

    /// Builder method: seed the simulated data generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
