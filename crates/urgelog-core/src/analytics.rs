//! Analytics derivation over an entry snapshot.
//!
//! [`compute_analytics`] is a pure projection: it never mutates its input,
//! holds no state between calls, and is recomputed from the full entry
//! collection every time a summary is needed. There is no cache to
//! invalidate; callers reload and recompute after every write.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::model::{
    ActionTaken, Emotion, Location, SensationLocation, SensationType, UrgeEntry, UrgeType,
};

/// Shown when the collection is empty.
pub const NOT_ENOUGH_DATA: &str = "Not enough data";
/// Shown while fewer than [`TRIGGER_MIN_ENTRIES`] entries exist.
pub const LOG_MORE_ENTRIES: &str = "Log more entries to see patterns";
/// Fallback if no trigger key could be formed.
pub const NO_CLEAR_PATTERN: &str = "No clear pattern yet";

/// Minimum entries before a trigger pattern is reported; below this a
/// single sample would masquerade as a pattern.
pub const TRIGGER_MIN_ENTRIES: usize = 5;

/// Derived behavioral summary over the full entry collection.
///
/// Breakdown maps omit zero-count categories. Multi-valued fields
/// (emotions, sensations) contribute once per element, so those totals
/// can exceed `total_entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_entries: usize,
    /// Whole calendar days since the most recent lapse (or since the
    /// earliest entry when no lapse exists).
    pub current_streak: i64,
    /// Percentage of entries with a `Processed` outcome, rounded half
    /// away from zero.
    pub success_rate: u32,
    /// Mean intensity rounded to one decimal place.
    pub average_intensity: f64,
    pub urge_type_breakdown: BTreeMap<UrgeType, u64>,
    pub location_breakdown: BTreeMap<Location, u64>,
    pub emotion_breakdown: BTreeMap<Emotion, u64>,
    pub sensation_type_breakdown: BTreeMap<SensationType, u64>,
    pub sensation_location_map: BTreeMap<SensationLocation, u64>,
    /// Local hour of day [0,23] -> occurrence count.
    pub time_patterns: BTreeMap<u32, u64>,
    pub most_common_trigger: String,
}

impl AnalyticsSummary {
    fn empty() -> Self {
        Self {
            total_entries: 0,
            current_streak: 0,
            success_rate: 0,
            average_intensity: 0.0,
            urge_type_breakdown: BTreeMap::new(),
            location_breakdown: BTreeMap::new(),
            emotion_breakdown: BTreeMap::new(),
            sensation_type_breakdown: BTreeMap::new(),
            sensation_location_map: BTreeMap::new(),
            time_patterns: BTreeMap::new(),
            most_common_trigger: NOT_ENOUGH_DATA.to_string(),
        }
    }
}

/// Derives the summary for the current wall clock.
pub fn compute_analytics(entries: &[UrgeEntry]) -> AnalyticsSummary {
    compute_analytics_at(entries, Local::now())
}

/// Clock-injected variant of [`compute_analytics`].
///
/// Referentially transparent: the same entries and `now` always yield the
/// same summary. Only `current_streak` depends on `now`.
pub fn compute_analytics_at(entries: &[UrgeEntry], now: DateTime<Local>) -> AnalyticsSummary {
    if entries.is_empty() {
        // Required short-circuit: avoids division by zero in the rates.
        return AnalyticsSummary::empty();
    }

    let total = entries.len();

    let processed = entries
        .iter()
        .filter(|entry| entry.action_taken == ActionTaken::Processed)
        .count();
    let success_rate = (processed as f64 / total as f64 * 100.0).round() as u32;

    let intensity_sum: u64 = entries.iter().map(|entry| u64::from(entry.intensity)).sum();
    let average_intensity = (intensity_sum as f64 / total as f64 * 10.0).round() / 10.0;

    let mut urge_type_breakdown = BTreeMap::new();
    let mut location_breakdown = BTreeMap::new();
    let mut emotion_breakdown = BTreeMap::new();
    let mut sensation_type_breakdown = BTreeMap::new();
    let mut sensation_location_map = BTreeMap::new();
    let mut time_patterns = BTreeMap::new();

    for entry in entries {
        *urge_type_breakdown.entry(entry.urge_type).or_insert(0) += 1;
        *location_breakdown.entry(entry.location).or_insert(0) += 1;
        for emotion in &entry.emotions {
            *emotion_breakdown.entry(*emotion).or_insert(0) += 1;
        }
        for sensation in &entry.sensations {
            *sensation_type_breakdown
                .entry(sensation.sensation)
                .or_insert(0) += 1;
            *sensation_location_map
                .entry(sensation.location)
                .or_insert(0) += 1;
        }
        let hour = entry.timestamp.with_timezone(&Local).hour();
        *time_patterns.entry(hour).or_insert(0) += 1;
    }

    AnalyticsSummary {
        total_entries: total,
        current_streak: current_streak(entries, now.date_naive()),
        success_rate,
        average_intensity,
        urge_type_breakdown,
        location_breakdown,
        emotion_breakdown,
        sensation_type_breakdown,
        sensation_location_map,
        time_patterns,
        most_common_trigger: most_common_trigger(entries),
    }
}

fn local_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Days since the most recent lapse, day-truncated in local time.
///
/// Scans from the newest entry backward for a `GaveIn` outcome; only the
/// most recent lapse matters, earlier ones are irrelevant once a later one
/// exists. Without any lapse, the oldest entry acts as day zero of an
/// unbroken streak. A lapse logged today yields 0.
fn current_streak(entries: &[UrgeEntry], today: NaiveDate) -> i64 {
    let mut newest_first: Vec<&UrgeEntry> = entries.iter().collect();
    newest_first.sort_by_key(|entry| std::cmp::Reverse(entry.timestamp));

    for entry in &newest_first {
        if entry.action_taken == ActionTaken::GaveIn {
            return (today - local_day(entry.timestamp)).num_days();
        }
    }

    match newest_first.last() {
        Some(oldest) => (today - local_day(oldest.timestamp)).num_days(),
        None => 0,
    }
}

/// The most frequent (primary emotion, location) pairing.
///
/// Keys are tallied in input order; the highest count wins and ties go to
/// the key that appeared first. An entry without emotions is skipped
/// rather than crashing the derivation.
fn most_common_trigger(entries: &[UrgeEntry]) -> String {
    if entries.len() < TRIGGER_MIN_ENTRIES {
        return LOG_MORE_ENTRIES.to_string();
    }

    let mut tallies: Vec<(String, u64)> = Vec::new();
    for entry in entries {
        let Some(primary) = entry.primary_emotion() else {
            continue;
        };
        let key = format!("{} at {}", primary, entry.location);
        match tallies.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, count)) => *count += 1,
            None => tallies.push((key, 1)),
        }
    }

    let mut best: Option<(&str, u64)> = None;
    for (key, count) in &tallies {
        if best.map_or(true, |(_, top)| *count > top) {
            best = Some((key, *count));
        }
    }
    match best {
        Some((key, _)) => key.to_string(),
        None => NO_CLEAR_PATTERN.to_string(),
    }
}
