//! Delete command handler.

use std::io::IsTerminal;

use uuid::Uuid;

use urgelog_core::{EntryStore, UrgeLogError};

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::prompt;
use crate::output::entry_summary;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let id = Uuid::parse_str(&args.id)
        .map_err(|e| anyhow::anyhow!("Invalid entry ID: {}", e))?;

    let mut store = ctx.open_store()?;
    let entry = store
        .get_entry(&id)?
        .ok_or(UrgeLogError::NotFound(id))?;

    let interactive = std::io::stdin().is_terminal();
    if !args.yes && interactive && !prompt::confirm_delete(&entry_summary(&entry))? {
        if !ctx.quiet() {
            println!("Aborted.");
        }
        return Ok(());
    }

    store.delete_entry(&id)?;
    store.close()?;

    if !ctx.quiet() {
        println!("Deleted entry {}", id);
    }
    Ok(())
}
