//! SQLite-backed entry store.
//!
//! One `entries` table: scalar categories as their canonical text labels,
//! the multi-valued fields as JSON columns, timestamps as epoch
//! milliseconds (matching the entry wire format). `PRAGMA user_version`
//! stamps the schema so a file written by a newer build is refused
//! instead of being misread.
//!
//! Rows carrying a category label outside the closed set (written by a
//! newer version with more categories) are skipped on read with a warning
//! rather than failing the whole listing; structurally corrupt rows (bad
//! UUID, bad JSON) are hard storage errors.

use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use rusqlite::{params, Connection, Row};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{Result, UrgeLogError};
use crate::model::{
    ActionTaken, Emotion, Location, PhysicalSensation, SensationLocation, SensationType,
    UrgeEntry, UrgeType,
};
use crate::storage::traits::EntryStore;

const SCHEMA_VERSION: i64 = 1;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id              TEXT PRIMARY KEY,
    timestamp       INTEGER NOT NULL,
    urge_type       TEXT NOT NULL,
    intensity       INTEGER NOT NULL,
    location        TEXT NOT NULL,
    emotions_json   TEXT NOT NULL,
    sensations_json TEXT NOT NULL,
    action_taken    TEXT NOT NULL,
    notes           TEXT
);

CREATE INDEX IF NOT EXISTS idx_entries_timestamp ON entries(timestamp);
"#;

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    timestamp,
    urge_type,
    intensity,
    location,
    emotions_json,
    sensations_json,
    action_taken,
    notes
FROM entries";

/// Sensation pair as stored on disk, labels still unparsed.
#[derive(Deserialize)]
struct RawSensation {
    #[serde(rename = "type")]
    sensation: String,
    location: String,
}

/// SQLite entry store with an explicit open/close lifecycle.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if necessary) the store at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self::prepare(conn)?;
        log::debug!("opened entry store at {}", path.display());
        Ok(store)
    }

    /// Open a throwaway in-memory store. Used by tests and callers that
    /// want a store without touching any persistent medium.
    pub fn open_in_memory() -> Result<Self> {
        Self::prepare(Connection::open_in_memory()?)
    }

    /// Close the store, releasing the underlying connection.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| UrgeLogError::Storage(err.to_string()))
    }

    fn prepare(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version > SCHEMA_VERSION {
            return Err(UrgeLogError::Storage(format!(
                "database schema version {} is newer than this build supports ({})",
                version, SCHEMA_VERSION
            )));
        }
        if version < SCHEMA_VERSION {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        Ok(Self { conn })
    }

    fn query_entries(&self, sql: &str, bind: &[i64]) -> Result<Vec<UrgeEntry>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(bind.iter()))?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            if let Some(entry) = decode_entry(row)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

impl EntryStore for SqliteStore {
    fn insert_entry(&mut self, entry: &UrgeEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO entries (
                id, timestamp, urge_type, intensity, location,
                emotions_json, sensations_json, action_taken, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                entry.id.to_string(),
                entry.timestamp.timestamp_millis(),
                entry.urge_type.label(),
                i64::from(entry.intensity),
                entry.location.label(),
                serde_json::to_string(&entry.emotions)?,
                serde_json::to_string(&entry.sensations)?,
                entry.action_taken.label(),
                entry.notes.as_deref(),
            ],
        )?;
        Ok(())
    }

    fn replace_entry(&mut self, entry: &UrgeEntry) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE entries
             SET
                timestamp = ?1,
                urge_type = ?2,
                intensity = ?3,
                location = ?4,
                emotions_json = ?5,
                sensations_json = ?6,
                action_taken = ?7,
                notes = ?8
             WHERE id = ?9;",
            params![
                entry.timestamp.timestamp_millis(),
                entry.urge_type.label(),
                i64::from(entry.intensity),
                entry.location.label(),
                serde_json::to_string(&entry.emotions)?,
                serde_json::to_string(&entry.sensations)?,
                entry.action_taken.label(),
                entry.notes.as_deref(),
                entry.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(UrgeLogError::NotFound(entry.id));
        }
        Ok(())
    }

    fn delete_entry(&mut self, id: &Uuid) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(UrgeLogError::NotFound(*id));
        }
        Ok(())
    }

    fn get_entry(&self, id: &Uuid) -> Result<Option<UrgeEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => decode_entry(row),
            None => Ok(None),
        }
    }

    fn list_entries(&self) -> Result<Vec<UrgeEntry>> {
        self.query_entries(
            &format!("{ENTRY_SELECT_SQL} ORDER BY timestamp ASC, id ASC;"),
            &[],
        )
    }

    fn list_entries_between(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<UrgeEntry>> {
        self.query_entries(
            &format!(
                "{ENTRY_SELECT_SQL}
                 WHERE timestamp >= ?1 AND timestamp <= ?2
                 ORDER BY timestamp ASC, id ASC;"
            ),
            &[since.timestamp_millis(), until.timestamp_millis()],
        )
    }
}

/// Decode one row into an entry.
///
/// `Ok(None)` means the row carries an unknown category label and was
/// skipped; `Err` means the row is structurally corrupt.
fn decode_entry(row: &Row<'_>) -> Result<Option<UrgeEntry>> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        UrgeLogError::Storage(format!("invalid uuid `{id_text}` in entries.id"))
    })?;

    let millis: i64 = row.get("timestamp")?;
    let timestamp = Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        UrgeLogError::Storage(format!("invalid timestamp `{millis}` for entry {id}"))
    })?;

    let intensity: i64 = row.get("intensity")?;
    let intensity = u8::try_from(intensity).map_err(|_| {
        UrgeLogError::Storage(format!("invalid intensity `{intensity}` for entry {id}"))
    })?;

    let urge_type_text: String = row.get("urge_type")?;
    let Some(urge_type) = UrgeType::parse(&urge_type_text) else {
        log::warn!("skipping entry {id}: unknown urge type `{urge_type_text}`");
        return Ok(None);
    };

    let location_text: String = row.get("location")?;
    let Some(location) = Location::parse(&location_text) else {
        log::warn!("skipping entry {id}: unknown location `{location_text}`");
        return Ok(None);
    };

    let action_text: String = row.get("action_taken")?;
    let Some(action_taken) = ActionTaken::parse(&action_text) else {
        log::warn!("skipping entry {id}: unknown action `{action_text}`");
        return Ok(None);
    };

    let emotions_json: String = row.get("emotions_json")?;
    let emotion_labels: Vec<String> = serde_json::from_str(&emotions_json)?;
    let mut emotions = Vec::with_capacity(emotion_labels.len());
    for label in &emotion_labels {
        let Some(emotion) = Emotion::parse(label) else {
            log::warn!("skipping entry {id}: unknown emotion `{label}`");
            return Ok(None);
        };
        emotions.push(emotion);
    }

    let sensations_json: String = row.get("sensations_json")?;
    let raw_sensations: Vec<RawSensation> = serde_json::from_str(&sensations_json)?;
    let mut sensations = Vec::with_capacity(raw_sensations.len());
    for raw in &raw_sensations {
        let Some(sensation) = SensationType::parse(&raw.sensation) else {
            log::warn!("skipping entry {id}: unknown sensation `{}`", raw.sensation);
            return Ok(None);
        };
        let Some(area) = SensationLocation::parse(&raw.location) else {
            log::warn!(
                "skipping entry {id}: unknown sensation location `{}`",
                raw.location
            );
            return Ok(None);
        };
        sensations.push(PhysicalSensation::new(sensation, area));
    }

    Ok(Some(UrgeEntry {
        id,
        timestamp,
        urge_type,
        intensity,
        location,
        emotions,
        sensations,
        action_taken,
        notes: row.get("notes")?,
    }))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_entry(millis: i64) -> UrgeEntry {
        UrgeEntry::new(
            Utc.timestamp_millis_opt(millis).single().expect("timestamp"),
            UrgeType::Phone,
            5,
            Location::Home,
            vec![Emotion::Bored],
            vec![PhysicalSensation::new(
                SensationType::Restlessness,
                SensationLocation::Chest,
            )],
            ActionTaken::Processed,
        )
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        let entry = sample_entry(1_700_000_000_000).with_notes("at my desk");
        store.insert_entry(&entry).expect("insert");

        let loaded = store.get_entry(&entry.id).expect("get").expect("present");
        assert_eq!(loaded, entry);
    }

    #[test]
    fn list_orders_by_timestamp_ascending() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        let newer = sample_entry(2_000);
        let older = sample_entry(1_000);
        store.insert_entry(&newer).expect("insert newer");
        store.insert_entry(&older).expect("insert older");

        let entries = store.list_entries().expect("list");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, older.id);
        assert_eq!(entries[1].id, newer.id);
    }

    #[test]
    fn list_between_is_inclusive() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        for millis in [1_000, 2_000, 3_000] {
            store.insert_entry(&sample_entry(millis)).expect("insert");
        }

        let since = Utc.timestamp_millis_opt(1_000).single().expect("since");
        let until = Utc.timestamp_millis_opt(2_000).single().expect("until");
        let entries = store.list_entries_between(since, until).expect("list");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn replace_swaps_the_whole_record() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        let mut entry = sample_entry(1_000);
        store.insert_entry(&entry).expect("insert");

        entry.intensity = 9;
        entry.action_taken = ActionTaken::GaveIn;
        entry.notes = Some("rough evening".to_string());
        store.replace_entry(&entry).expect("replace");

        let loaded = store.get_entry(&entry.id).expect("get").expect("present");
        assert_eq!(loaded, entry);
        assert_eq!(store.list_entries().expect("list").len(), 1);
    }

    #[test]
    fn replace_missing_entry_is_not_found() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        let entry = sample_entry(1_000);
        match store.replace_entry(&entry) {
            Err(UrgeLogError::NotFound(id)) => assert_eq!(id, entry.id),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn delete_missing_entry_is_not_found() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        let id = Uuid::new_v4();
        match store.delete_entry(&id) {
            Err(UrgeLogError::NotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        let entry = sample_entry(1_000);
        store.insert_entry(&entry).expect("insert");
        assert!(matches!(
            store.insert_entry(&entry),
            Err(UrgeLogError::Storage(_))
        ));
    }

    #[test]
    fn unknown_category_rows_are_skipped_not_fatal() {
        let mut store = SqliteStore::open_in_memory().expect("open");
        let kept = sample_entry(1_000);
        store.insert_entry(&kept).expect("insert");

        store
            .conn
            .execute(
                "INSERT INTO entries (
                    id, timestamp, urge_type, intensity, location,
                    emotions_json, sensations_json, action_taken, notes
                ) VALUES (?1, 2000, 'Doomscrolling', 5, 'Home',
                          '[\"Bored\"]',
                          '[{\"type\":\"Tightness\",\"location\":\"Chest\"}]',
                          'Processed the urge', NULL);",
                [Uuid::new_v4().to_string()],
            )
            .expect("raw insert");

        let entries = store.list_entries().expect("list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, kept.id);
    }

    #[test]
    fn newer_schema_version_is_refused() {
        let conn = Connection::open_in_memory().expect("raw open");
        conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
            .expect("bump version");
        assert!(matches!(
            SqliteStore::prepare(conn),
            Err(UrgeLogError::Storage(_))
        ));
    }
}
