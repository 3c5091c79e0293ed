//! Export command handler.

use urgelog_core::EntryStore;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::helpers::parse_datetime;
use crate::output::{anonymized_json, entries_json};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let mut entries = store.list_entries()?;
    if let Some(value) = &args.since {
        let since = parse_datetime(value)?;
        entries.retain(|entry| entry.timestamp >= since);
    }

    let values: Vec<serde_json::Value> = if args.anonymized {
        entries.iter().map(anonymized_json).collect()
    } else {
        entries_json(&entries)?
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
        "jsonl" => {
            for value in &values {
                println!("{}", serde_json::to_string(value)?);
            }
        }
        other => {
            return Err(anyhow::anyhow!(
                "Unsupported export format: {} (use json or jsonl)",
                other
            ));
        }
    }
    Ok(())
}
