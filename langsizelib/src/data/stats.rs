//! Run-scoped accumulation of per-language byte totals.
//!
//! An [`Aggregator`] is owned by exactly one scan and fed sequentially. It keeps
//! languages in first-seen order, which the ranker relies on for ties.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Accumulated bytes for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTotal {
    pub language: String,
    pub size: u64,
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Bytes across all classified files
    pub total_size: u64,
    /// Classified files (plus unclassified ones, when asked to count them)
    pub file_count: usize,
    /// Paths left out by the ignore policy or because they could not be read
    pub ignored_count: usize,
    /// Files kept by the ignore policy that no language matched
    pub unclassified_count: usize,
    /// Longest language name recorded, in characters
    pub max_language_name_length: usize,
}

/// Single-owner accumulator for a scan.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    totals: Vec<LanguageTotal>,
    index: HashMap<String, usize>,
    stats: RunStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one classified file.
    pub fn record(&mut self, language: &str, size: u64) {
        match self.index.get(language) {
            Some(&i) => self.totals[i].size += size,
            None => {
                self.index.insert(language.to_string(), self.totals.len());
                self.totals.push(LanguageTotal {
                    language: language.to_string(),
                    size,
                });
            }
        }

        self.stats.total_size += size;
        self.stats.file_count += 1;
        self.stats.max_language_name_length = self
            .stats
            .max_language_name_length
            .max(language.chars().count());
    }

    /// Count a path that was left out.
    pub fn record_ignored(&mut self) {
        self.stats.ignored_count += 1;
    }

    /// Count a file no language matched. It adds no bytes.
    pub fn record_unclassified(&mut self, count_as_file: bool) {
        self.stats.unclassified_count += 1;
        if count_as_file {
            self.stats.file_count += 1;
        }
    }

    /// Bytes recorded for a language.
    pub fn size_of(&self, language: &str) -> Option<u64> {
        self.index.get(language).map(|&i| self.totals[i].size)
    }

    /// Totals in first-seen order.
    pub fn totals(&self) -> &[LanguageTotal] {
        &self.totals
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Consume the accumulator.
    pub fn finish(self) -> (Vec<LanguageTotal>, RunStats) {
        (self.totals, self.stats)
    }
}
