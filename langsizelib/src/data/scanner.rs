//! High-level scan API.
//!
//! A scan drives one [`FileSource`] to exhaustion, strictly one entry at a
//! time: content heuristics, then classification, then aggregation. Ignored
//! and unreadable paths are counted and skipped; git object errors abort.

use std::path::Path;

use serde::Serialize;

use crate::query::ranking::{rank, RankedResult};
use crate::source::{FileSource, IgnorePolicy, SourceEntry, SourceMode, Verdict};
use crate::Result;

use super::classify::{Classifier, Linguist};
use super::stats::{Aggregator, LanguageTotal, RunStats};

/// Options for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Ignore rules and overrides
    pub policy: IgnorePolicy,
    /// Count files no language matched in `file_count`
    pub count_unclassified: bool,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ignore policy.
    pub fn policy(mut self, policy: IgnorePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Count unclassified files in `file_count`.
    pub fn count_unclassified(mut self, yes: bool) -> Self {
        self.count_unclassified = yes;
        self
    }
}

/// Result of one scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    /// Per-language bytes, in first-seen order
    pub totals: Vec<LanguageTotal>,
    /// Run counters
    pub stats: RunStats,
}

impl ScanResult {
    /// Rank the totals; `limit == 0` means unlimited.
    pub fn rank(&self, limit: usize) -> Vec<RankedResult> {
        rank(&self.totals, limit)
    }

    /// Bytes recorded for a language.
    pub fn size_of(&self, language: &str) -> Option<u64> {
        self.totals
            .iter()
            .find(|t| t.language == language)
            .map(|t| t.size)
    }
}

/// Drive a source through the ignore policy, classifier and aggregator.
pub fn scan_source<I, C>(source: I, options: &ScanOptions, classifier: &C) -> Result<ScanResult>
where
    I: IntoIterator<Item = Result<SourceEntry>>,
    C: Classifier + ?Sized,
{
    let mut aggregator = Aggregator::new();

    for entry in source {
        match entry? {
            SourceEntry::Ignored { path, reason } => {
                tracing::debug!(path = %path, %reason, "ignored");
                aggregator.record_ignored();
            }
            SourceEntry::Unreadable { path, message } => {
                tracing::warn!(path = %path, %message, "skipping unreadable path");
                aggregator.record_ignored();
            }
            SourceEntry::File(file) => {
                if let Verdict::Ignore(reason) =
                    options.policy.check_contents(&file.path, &file.content)
                {
                    tracing::debug!(path = %file.path, %reason, "ignored");
                    aggregator.record_ignored();
                    continue;
                }

                match classifier.classify(&file.path, &file.content) {
                    Some(language) => aggregator.record(language, file.size),
                    None => {
                        tracing::debug!(path = %file.path, "unclassified");
                        aggregator.record_unclassified(options.count_unclassified);
                    }
                }
            }
        }
    }

    let (totals, stats) = aggregator.finish();
    tracing::info!(
        languages = totals.len(),
        files = stats.file_count,
        bytes = stats.total_size,
        ignored = stats.ignored_count,
        unclassified = stats.unclassified_count,
        "scan complete"
    );

    Ok(ScanResult { totals, stats })
}

/// Scan with an already resolved source mode.
pub fn scan_mode<C>(
    path: impl AsRef<Path>,
    mode: &SourceMode,
    options: &ScanOptions,
    classifier: &C,
) -> Result<ScanResult>
where
    C: Classifier + ?Sized,
{
    let path = path.as_ref();
    let source = match mode {
        SourceMode::Filesystem => FileSource::filesystem(path, &options.policy)?,
        SourceMode::Git { treeish } => FileSource::git(path, treeish, &options.policy)?,
    };
    tracing::debug!(source = source.kind(), path = %path.display(), "scanning");

    scan_source(source, options, classifier)
}

/// Scan the working tree under `root` with the built-in classifier.
///
/// # Example
///
/// ```rust
/// use langsizelib::{scan_directory, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("main.go"), "package main\n\nfunc main() {}\n").unwrap();
/// fs::write(dir.path().join("notes.md"), "# Notes\n").unwrap();
///
/// let result = scan_directory(dir.path(), &ScanOptions::new()).unwrap();
/// assert_eq!(result.stats.file_count, 2);
/// assert_eq!(result.size_of("Go"), Some(29));
///
/// let ranked = result.rank(10);
/// assert_eq!(ranked[0].language, "Go");
/// ```
pub fn scan_directory(root: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanResult> {
    scan_mode(root, &SourceMode::Filesystem, options, &Linguist::new())
}

/// Scan the tree `treeish` resolves to, in the repository containing `path`,
/// with the built-in classifier.
pub fn scan_git_tree(
    path: impl AsRef<Path>,
    treeish: &str,
    options: &ScanOptions,
) -> Result<ScanResult> {
    let mode = SourceMode::Git {
        treeish: treeish.to_string(),
    };
    scan_mode(path, &mode, options, &Linguist::new())
}
