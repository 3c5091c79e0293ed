//! Store-to-engine flow: analytics are derived from a freshly listed
//! snapshot and recomputed after every mutation.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

use urgelog_core::{
    compute_analytics_at, ActionTaken, Emotion, EntryStore, Location, PhysicalSensation,
    SensationLocation, SensationType, SqliteStore, UrgeEntry, UrgeType,
};

fn reference_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 9, 10, 12, 0, 0)
        .single()
        .expect("unambiguous local time")
}

fn days_ago(days: i64) -> DateTime<Utc> {
    (reference_now() - Duration::days(days)).with_timezone(&Utc)
}

fn entry(timestamp: DateTime<Utc>, action_taken: ActionTaken) -> UrgeEntry {
    UrgeEntry::new(
        timestamp,
        UrgeType::Vape,
        4,
        Location::Work,
        vec![Emotion::Stressed],
        vec![PhysicalSensation::new(
            SensationType::Tension,
            SensationLocation::Shoulders,
        )],
        action_taken,
    )
}

#[test]
fn summary_tracks_the_store_snapshot() {
    let mut store = SqliteStore::open_in_memory().expect("open");

    let summary = compute_analytics_at(&store.list_entries().expect("list"), reference_now());
    assert_eq!(summary.total_entries, 0);
    assert_eq!(summary.most_common_trigger, "Not enough data");

    let lapse = entry(days_ago(3), ActionTaken::GaveIn);
    store.insert_entry(&lapse).expect("insert lapse");
    store
        .insert_entry(&entry(days_ago(1), ActionTaken::Processed))
        .expect("insert");

    let summary = compute_analytics_at(&store.list_entries().expect("list"), reference_now());
    assert_eq!(summary.total_entries, 2);
    assert_eq!(summary.current_streak, 3);
    assert_eq!(summary.success_rate, 50);

    // Deleting the lapse must change the streak on the next recompute;
    // the summary is a pure projection with no state of its own.
    store.delete_entry(&lapse.id).expect("delete");
    let summary = compute_analytics_at(&store.list_entries().expect("list"), reference_now());
    assert_eq!(summary.total_entries, 1);
    assert_eq!(summary.current_streak, 1);
    assert_eq!(summary.success_rate, 100);
}

#[test]
fn engine_does_not_mutate_the_snapshot() {
    let mut store = SqliteStore::open_in_memory().expect("open");
    for offset in 1..=3 {
        store
            .insert_entry(&entry(days_ago(offset), ActionTaken::Processed))
            .expect("insert");
    }

    let snapshot = store.list_entries().expect("list");
    let before = snapshot.clone();
    let _ = compute_analytics_at(&snapshot, reference_now());
    assert_eq!(snapshot, before);
}

#[test]
fn trigger_emerges_once_five_entries_exist() {
    let mut store = SqliteStore::open_in_memory().expect("open");
    for offset in 1..=4 {
        store
            .insert_entry(&entry(days_ago(offset), ActionTaken::Processed))
            .expect("insert");
    }

    let summary = compute_analytics_at(&store.list_entries().expect("list"), reference_now());
    assert_eq!(
        summary.most_common_trigger,
        "Log more entries to see patterns"
    );

    store
        .insert_entry(&entry(days_ago(5), ActionTaken::Processed))
        .expect("insert");
    let summary = compute_analytics_at(&store.list_entries().expect("list"), reference_now());
    assert_eq!(summary.most_common_trigger, "Stressed at Work");
}
