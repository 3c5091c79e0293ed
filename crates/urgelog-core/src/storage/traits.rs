//! Entry store trait definition.
//!
//! The `EntryStore` trait defines the interface the CLI and the analytics
//! pipeline consume. The analytics engine never talks to a store directly;
//! it is handed the snapshot returned by [`EntryStore::list_entries`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::model::UrgeEntry;

/// Persistence contract for urge entries.
///
/// Entries must pass [`UrgeEntry::validate`] before being written; the
/// store does not re-validate. Every write either succeeds or fails
/// atomically per entry; there are no partial-field updates.
pub trait EntryStore {
    /// Insert a new entry.
    ///
    /// # Errors
    ///
    /// Returns `UrgeLogError::Storage` if an entry with the same id
    /// already exists or the write fails.
    fn insert_entry(&mut self, entry: &UrgeEntry) -> Result<()>;

    /// Replace an existing entry wholesale, keyed by its id.
    ///
    /// # Errors
    ///
    /// Returns `UrgeLogError::NotFound` if no entry with that id exists.
    fn replace_entry(&mut self, entry: &UrgeEntry) -> Result<()>;

    /// Delete an entry by id.
    ///
    /// # Errors
    ///
    /// Returns `UrgeLogError::NotFound` if no entry with that id exists.
    fn delete_entry(&mut self, id: &Uuid) -> Result<()>;

    /// Get an entry by id.
    ///
    /// Returns `Ok(None)` when the id is unknown.
    fn get_entry(&self, id: &Uuid) -> Result<Option<UrgeEntry>>;

    /// List all entries ordered by timestamp ascending.
    fn list_entries(&self) -> Result<Vec<UrgeEntry>>;

    /// List entries with `since <= timestamp <= until`, ascending.
    fn list_entries_between(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<UrgeEntry>>;
}
