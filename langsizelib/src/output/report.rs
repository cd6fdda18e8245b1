//! Presentation-ready report structures.
//!
//! These only format ranked data; ordering always comes from the ranker.
//!
//! - [`TextReport`]: aligned rows plus the summary lines
//! - [`json_report`]: language name to `{language, percent, percentage, size}`
//! - [`colored_report`]: ranked array of `{language, percent, color}`

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::classify::Classifier;
use crate::data::stats::RunStats;
use crate::query::ranking::RankedResult;

/// One formatted row of the text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Language name, right-aligned to the report width
    pub label: String,
    /// Percentage, zero-padded to 4 decimals, with a trailing `%`
    pub percent: String,
}

/// Human-readable report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReport {
    pub rows: Vec<ReportRow>,
    /// "N languages detected in M files"
    pub summary: String,
    /// "K ignored paths"
    pub ignored: String,
}

impl TextReport {
    pub fn new(ranked: &[RankedResult], stats: &RunStats) -> Self {
        let width = stats.max_language_name_length;
        let rows = ranked
            .iter()
            .map(|r| ReportRow {
                label: format!("{:>width$}", r.language, width = width),
                percent: format!("{:07.4}%", r.percent),
            })
            .collect();

        let summary = format!(
            "{} language{} detected in {} file{}",
            ranked.len(),
            plural(ranked.len()),
            stats.file_count,
            plural(stats.file_count)
        );
        let ignored = format!(
            "{} ignored path{}",
            stats.ignored_count,
            plural(stats.ignored_count)
        );

        Self {
            rows,
            summary,
            ignored,
        }
    }
}

impl fmt::Display for TextReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}: {}", row.label, row.percent)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f, "{}", self.ignored)
    }
}

/// Value of the JSON report, keyed by language name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: String,
    pub percent: f64,
    /// `percent` to two decimals
    pub percentage: String,
    pub size: u64,
}

/// Element of the colored JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredEntry {
    pub language: String,
    pub percent: f64,
    /// Display color, empty when the language has none
    pub color: String,
}

/// JSON report: language name to entry, in sorted key order.
///
/// `percentage` is filled for every row, "Other" included.
pub fn json_report(ranked: &[RankedResult]) -> BTreeMap<String, LanguageEntry> {
    ranked
        .iter()
        .map(|r| {
            let entry = LanguageEntry {
                language: r.language.clone(),
                percent: r.percent,
                percentage: format!("{:.2}", r.percent),
                size: r.size,
            };
            (r.language.clone(), entry)
        })
        .collect()
}

/// Colored JSON report, in ranked order.
pub fn colored_report<C>(ranked: &[RankedResult], classifier: &C) -> Vec<ColoredEntry>
where
    C: Classifier + ?Sized,
{
    ranked
        .iter()
        .map(|r| ColoredEntry {
            language: r.language.clone(),
            percent: r.percent,
            color: classifier
                .color(&r.language)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
