//! Output rendering for the CLI.

use console::Style;
use langsizelib::{colored_report, json_report, Classifier, RankedResult, RunStats, TextReport};

/// Render the text report, with language names in bold when stdout is a terminal.
pub fn render_text(ranked: &[RankedResult], stats: &RunStats) -> String {
    let report = TextReport::new(ranked, stats);
    let name = Style::new().for_stdout().bold();

    let mut out = String::new();
    for row in &report.rows {
        out.push_str(&format!("{}: {}\n", name.apply_to(&row.label), row.percent));
    }
    out.push('\n');
    out.push_str(&report.summary);
    out.push('\n');
    out.push_str(&report.ignored);
    out.push('\n');
    out
}

/// Pretty JSON object keyed by language name.
pub fn render_json(ranked: &[RankedResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json_report(ranked))
}

/// Pretty JSON array in ranked order, with display colors.
pub fn render_json_with_colors<C>(
    ranked: &[RankedResult],
    classifier: &C,
) -> serde_json::Result<String>
where
    C: Classifier + ?Sized,
{
    serde_json::to_string_pretty(&colored_report(ranked, classifier))
}
