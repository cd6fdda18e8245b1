//! Data collection: classify files and accumulate statistics.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Classification**: the [`Classifier`] seam and the built-in [`Linguist`]
//! - **Statistics**: per-language totals and run counters ([`Aggregator`])
//! - **Scanning**: high-level API (`scan_directory`, `scan_git_tree`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use langsizelib::data::{scan_directory, ScanOptions};
//!
//! let result = scan_directory(".", &ScanOptions::new())?;
//! println!("{} bytes of Rust", result.size_of("Rust").unwrap_or(0));
//! ```

pub mod classify;
pub mod languages;
pub mod scanner;
pub mod stats;

pub use classify::{Classifier, Linguist};
pub use languages::{LanguageDef, LANGUAGES};
pub use scanner::{
    scan_directory, scan_git_tree, scan_mode, scan_source, ScanOptions, ScanResult,
};
pub use stats::{Aggregator, LanguageTotal, RunStats};
