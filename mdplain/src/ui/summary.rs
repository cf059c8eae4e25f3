//! Per-rule summary output, as a table or as JSON.

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use mdplain_core::RuleSummaryItem;
use std::io::Write;

/// Writes the summary as a table. An empty summary gets a one-line note.
pub fn print_summary<W: Write>(summary: &[RuleSummaryItem], writer: &mut W) -> Result<()> {
    if summary.is_empty() {
        writeln!(writer, "No Markdown constructs were stripped.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rule", "Stripped"]);
    for item in summary {
        table.add_row(vec![Cell::new(&item.rule_name), Cell::new(item.occurrences)]);
    }
    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    table.add_row(vec![Cell::new("total"), Cell::new(total)]);

    writeln!(writer, "{table}")?;
    Ok(())
}

/// Writes the summary as pretty-printed JSON.
pub fn print_summary_json<W: Write>(summary: &[RuleSummaryItem], writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize rule summary")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}
