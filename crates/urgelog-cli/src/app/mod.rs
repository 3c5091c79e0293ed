//! Application context for the Urgelog CLI.
//!
//! Bundles CLI arguments with database-path resolution so handlers do not
//! each re-derive where the store lives.

use std::path::PathBuf;

use urgelog_core::SqliteStore;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config};

/// Application context shared by all command handlers.
pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolve the database path: `--db` flag (or `URGELOG_DB`) first,
    /// then the config file.
    pub fn db_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(db) = &self.cli.db {
            return Ok(PathBuf::from(db));
        }

        let config_path = default_config_path()?;
        if !config_path.exists() {
            return Err(anyhow::anyhow!(
                "No urge log found at {}.\nHint: Run `urgelog init` to create one.",
                config_path.display()
            ));
        }
        let config = read_config(&config_path)?;
        Ok(PathBuf::from(config.store.path))
    }

    /// The configured default list format, if any.
    pub fn configured_format(&self) -> Option<String> {
        let config_path = default_config_path().ok()?;
        if !config_path.exists() {
            return None;
        }
        read_config(&config_path).ok()?.ui.format
    }

    /// Open the store at the resolved path, refusing to invent a database
    /// outside of `init`.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.db_path()?;
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "No urge log found at {}.\nHint: Run `urgelog init` to create one.",
                path.display()
            ));
        }
        log::debug!("using database at {}", path.display());
        Ok(SqliteStore::open(&path)?)
    }
}
