//! List command handler.

use chrono::{DateTime, Utc};

use urgelog_core::{EntryStore, UrgeEntry};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_datetime, parse_duration};
use crate::output::{entries_json, parse_output_format, print_entry_list, OutputFormat};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let mut since: Option<DateTime<Utc>> = None;
    let mut until: Option<DateTime<Utc>> = None;
    if let Some(window) = &args.last {
        since = Some(Utc::now() - parse_duration(window)?);
    }
    if let Some(value) = &args.since {
        since = Some(parse_datetime(value)?);
    }
    if let Some(value) = &args.until {
        until = Some(parse_datetime(value)?);
    }

    let mut entries: Vec<UrgeEntry> = if since.is_some() || until.is_some() {
        store.list_entries_between(
            since.unwrap_or(DateTime::<Utc>::MIN_UTC),
            until.unwrap_or(DateTime::<Utc>::MAX_UTC),
        )?
    } else {
        store.list_entries()?
    };

    // Newest first for display; the store hands back ascending order.
    entries.reverse();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    let configured = ctx.configured_format();
    let format = parse_output_format(args.format.as_deref().or(configured.as_deref()))?;
    if args.json {
        if args.format.is_some() {
            return Err(anyhow::anyhow!("--format cannot be used with --json"));
        }
        let output = serde_json::to_string_pretty(&entries_json(&entries)?)?;
        println!("{}", output);
    } else {
        print_entry_list(
            &entries,
            format.unwrap_or(OutputFormat::Table),
            ctx.quiet(),
        );
    }
    Ok(())
}
