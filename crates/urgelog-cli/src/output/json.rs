//! JSON output for entries.
//!
//! Full entries use the record's own serialization (camelCase fields,
//! epoch-ms timestamps). The anonymized shape strips identifying fields
//! and adds the derived time fields used for aggregate analysis.

use chrono::{Datelike, Local, Timelike};

use urgelog_core::UrgeEntry;

pub fn entry_json(entry: &UrgeEntry) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entry)?)
}

pub fn entries_json(entries: &[UrgeEntry]) -> anyhow::Result<Vec<serde_json::Value>> {
    entries.iter().map(entry_json).collect()
}

/// Anonymized record: no id, no notes, categories flattened to labels,
/// plus hour-of-day and day-of-week (0 = Sunday) in local time.
pub fn anonymized_json(entry: &UrgeEntry) -> serde_json::Value {
    let local = entry.timestamp.with_timezone(&Local);
    serde_json::json!({
        "urge_type": entry.urge_type.label(),
        "intensity": entry.intensity,
        "location": entry.location.label(),
        "emotions": entry.emotions.iter().map(|e| e.label()).collect::<Vec<_>>(),
        "sensation_types": entry
            .sensations
            .iter()
            .map(|s| s.sensation.label())
            .collect::<Vec<_>>(),
        "sensation_locations": entry
            .sensations
            .iter()
            .map(|s| s.location.label())
            .collect::<Vec<_>>(),
        "action_taken": entry.action_taken.label(),
        "timestamp": entry.timestamp.to_rfc3339(),
        "hour_of_day": local.hour(),
        "day_of_week": local.weekday().num_days_from_sunday(),
    })
}
