//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale tag (e.g., "sv", "fr-CA").
    pub locale: String,
    /// Number of source keys translated.
    pub translated: usize,
    /// Source keys with no translation.
    pub missing: Vec<String>,
}

/// Format coverage data as a table.
pub fn format_coverage_table(source_count: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Missing"]);

    for entry in coverage {
        table.add_row(vec![
            entry.locale.clone(),
            format!("{}/{source_count}", entry.translated),
            entry.missing.len().to_string(),
        ]);
    }

    table
}

/// Format a number and its words as a two-column table.
pub fn format_speech_table(rows: &[(i64, String)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Number", "Words"]);
    for (n, words) in rows {
        table.add_row(vec![n.to_string(), words.clone()]);
    }
    table
}
