//! Stats command handler.
//!
//! Always recomputes from a fresh store snapshot; the summary is a pure
//! projection, never cached.

use urgelog_core::{compute_analytics, EntryStore};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::print_stats;

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let entries = store.list_entries()?;
    let summary = compute_analytics(&entries);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_stats(&summary);
    }
    Ok(())
}
