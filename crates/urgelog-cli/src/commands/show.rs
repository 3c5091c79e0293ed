//! Show command handler.

use uuid::Uuid;

use urgelog_core::{EntryStore, UrgeLogError};

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = Uuid::parse_str(&args.id)
        .map_err(|e| anyhow::anyhow!("Invalid entry ID: {}", e))?;

    let store = ctx.open_store()?;
    let entry = store
        .get_entry(&id)?
        .ok_or(UrgeLogError::NotFound(id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry)?)?);
    } else {
        print_entry(&entry, ctx.quiet());
    }
    Ok(())
}
