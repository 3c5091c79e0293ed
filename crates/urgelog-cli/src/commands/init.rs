//! Init command handler.

use std::path::PathBuf;

use urgelog_core::SqliteStore;

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{default_config_path, default_store_path, write_config, UrgelogConfig};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let target: PathBuf = match (&args.path, &ctx.cli().db) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(db)) => PathBuf::from(db),
        (None, None) => default_store_path()?,
    };

    // Opening creates the file and schema; close immediately, commands
    // reopen on demand.
    SqliteStore::open(&target)?.close()?;

    let config_path = default_config_path()?;
    write_config(&config_path, &UrgelogConfig::new(target.clone()))?;

    if !ctx.quiet() {
        println!("Initialized urge log at {}", target.display());
        println!();
        println!("Quickstart:");
        println!("  urgelog add           Log an urge interactively");
        println!("  urgelog list          Browse your history");
        println!("  urgelog stats         See your patterns");
    }
    Ok(())
}
