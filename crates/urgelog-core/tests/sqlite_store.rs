//! On-disk store lifecycle tests.

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use urgelog_core::{
    ActionTaken, Emotion, EntryStore, Location, PhysicalSensation, SensationLocation,
    SensationType, SqliteStore, UrgeEntry, UrgeType,
};

fn sample_entry(millis: i64) -> UrgeEntry {
    UrgeEntry::new(
        Utc.timestamp_millis_opt(millis).single().expect("timestamp"),
        UrgeType::Shopping,
        7,
        Location::PublicSpace,
        vec![Emotion::Excited, Emotion::Anxious],
        vec![
            PhysicalSensation::new(SensationType::RacingPounding, SensationLocation::Heart),
            PhysicalSensation::new(SensationType::Sweating, SensationLocation::Face),
        ],
        ActionTaken::PartiallyGaveIn,
    )
}

#[test]
fn entries_survive_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("urges.db");

    let entry = sample_entry(1_700_000_000_000).with_notes("mall trip");
    {
        let mut store = SqliteStore::open(&path).expect("open");
        store.insert_entry(&entry).expect("insert");
        store.close().expect("close");
    }

    let store = SqliteStore::open(&path).expect("reopen");
    let entries = store.list_entries().expect("list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], entry);
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("deeper").join("urges.db");

    let store = SqliteStore::open(&path).expect("open");
    store.close().expect("close");
    assert!(path.exists());
}

#[test]
fn delete_removes_the_row_on_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("urges.db");

    let entry = sample_entry(1_700_000_000_000);
    {
        let mut store = SqliteStore::open(&path).expect("open");
        store.insert_entry(&entry).expect("insert");
        store.delete_entry(&entry.id).expect("delete");
        store.close().expect("close");
    }

    let store = SqliteStore::open(&path).expect("reopen");
    assert!(store.list_entries().expect("list").is_empty());
    assert!(store.get_entry(&entry.id).expect("get").is_none());
}

#[test]
fn edits_are_visible_after_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("urges.db");

    let mut entry = sample_entry(1_700_000_000_000);
    {
        let mut store = SqliteStore::open(&path).expect("open");
        store.insert_entry(&entry).expect("insert");
        entry.action_taken = ActionTaken::Processed;
        entry.emotions = vec![Emotion::Happy];
        store.replace_entry(&entry).expect("replace");
        store.close().expect("close");
    }

    let store = SqliteStore::open(&path).expect("reopen");
    let loaded = store.get_entry(&entry.id).expect("get").expect("present");
    assert_eq!(loaded.action_taken, ActionTaken::Processed);
    assert_eq!(loaded.emotions, vec![Emotion::Happy]);
}
