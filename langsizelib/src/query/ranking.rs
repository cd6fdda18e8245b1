//! Ranking: turn raw totals into an ordered, percentage-annotated list.
//!
//! This is the single source of ordering for every output format. Entries are
//! sorted by percent, descending, with a stable sort so equal percentages keep
//! the order in which languages were first seen. When a limit applies, the
//! tail is folded into one synthetic "Other" entry.

use serde::{Deserialize, Serialize};

use crate::data::stats::LanguageTotal;

/// Label of the entry that folds the tail beyond the limit.
pub const OTHER: &str = "Other";

/// One row of the ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub language: String,
    /// Bytes; always 0 for the "Other" entry
    pub size: u64,
    /// Share of the total, 0 to 100
    pub percent: f64,
}

/// Rank totals by share of bytes.
///
/// `limit == 0` means unlimited. With `limit == L` and more than `L` languages,
/// the result has `L + 1` rows: the top `L` and an "Other" row whose percent is
/// the sum of the folded rows and whose size is reported as 0.
///
/// Empty input, or input whose sizes sum to 0, ranks to an empty list.
pub fn rank(totals: &[LanguageTotal], limit: usize) -> Vec<RankedResult> {
    let total_size: u64 = totals.iter().map(|t| t.size).sum();
    if total_size == 0 {
        return Vec::new();
    }

    let mut results: Vec<RankedResult> = totals
        .iter()
        .map(|t| RankedResult {
            language: t.language.clone(),
            size: t.size,
            percent: t.size as f64 / total_size as f64 * 100.0,
        })
        .collect();

    results.sort_by(|a, b| b.percent.total_cmp(&a.percent));

    if limit > 0 && results.len() > limit {
        let percent = results[limit..].iter().map(|r| r.percent).sum();
        results.truncate(limit);
        results.push(RankedResult {
            language: OTHER.to_string(),
            size: 0,
            percent,
        });
    }

    results
}
