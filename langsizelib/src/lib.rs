//! # langsizelib
//!
//! Per-language byte statistics for a directory tree or a git tree.
//!
//! ## Overview
//!
//! A scan walks one source of files, drops what the ignore policy rejects,
//! classifies what remains and sums file sizes per language. The result is
//! ranked by share of bytes, with an optional limit that folds the tail into a
//! single "Other" entry.
//!
//! The pipeline has four stages:
//!
//! - **Source**: filesystem walk or git tree walk, plus the ignore policy
//! - **Data**: classification and aggregation
//! - **Query**: ranking and the "Other" bucket
//! - **Output**: text and JSON report structures
//!
//! ## Features
//!
//! - **Two interchangeable sources**: the working directory or any tree-ish
//! - **Vendored, generated, minified and binary files ignored** by default
//! - **Pluggable classification** through the [`Classifier`] trait
//! - **Pure data types**: no printing, no process exit
//!
//! ## Example
//!
//! ```rust
//! use langsizelib::{scan_directory, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.go"), "package main\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# hi\n").unwrap();
//!
//! let result = scan_directory(dir.path(), &ScanOptions::new()).unwrap();
//! assert_eq!(result.size_of("Go"), Some(13));
//!
//! let ranked = result.rank(10);
//! assert_eq!(ranked[0].language, "Go");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

#[cfg(test)]
mod testing;

pub use data::{
    scan_directory, scan_git_tree, scan_mode, scan_source, Aggregator, Classifier, LanguageDef,
    LanguageTotal, Linguist, RunStats, ScanOptions, ScanResult,
};
pub use error::LangsizeError;
pub use output::{colored_report, json_report, ColoredEntry, LanguageEntry, ReportRow, TextReport};
pub use query::{rank, RankedResult, OTHER};
pub use source::{
    discover_repository, is_inside_repository, CandidateFile, FileSource, IgnorePolicy,
    IgnoreReason, ModeRequest, SourceEntry, SourceMode, Verdict, DEFAULT_TREEISH,
};

/// Result type for langsizelib operations
pub type Result<T> = std::result::Result<T, LangsizeError>;
