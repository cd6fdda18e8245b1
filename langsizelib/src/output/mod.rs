//! Output formatting: present ranked results.
//!
//! This module handles the fourth and final stage of the pipeline. It provides:
//!
//! - **TextReport**: aligned rows and summary lines
//! - **json_report**: map of language name to entry
//! - **colored_report**: ranked entries with display colors
//!
//! These are pure presentation structures. Ordering comes from the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use langsizelib::output::TextReport;
//!
//! let report = TextReport::new(&result.rank(10), &result.stats);
//! print!("{report}");
//! ```

pub mod report;

pub use report::{colored_report, json_report, ColoredEntry, LanguageEntry, ReportRow, TextReport};
