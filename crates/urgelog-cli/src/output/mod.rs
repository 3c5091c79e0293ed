//! Output formatting helpers for the CLI.
//!
//! Entries and summaries render as JSON, a table, or plain text.

mod json;
mod text;

pub use json::{anonymized_json, entries_json, entry_json};
pub use text::{entry_summary, print_entry, print_entry_list, print_stats};

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}
