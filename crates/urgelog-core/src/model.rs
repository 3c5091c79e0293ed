//! Entry data model.
//!
//! Defines the closed category enumerations, the `UrgeEntry` record, and
//! entry validation. Categories are real enums rather than open strings so
//! invalid values are caught at construction time, not at aggregation time.
//!
//! JSON field names and category labels are part of the export format;
//! changing either breaks previously exported data.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Inclusive bounds for `UrgeEntry::intensity`.
pub const INTENSITY_MIN: u8 = 1;
pub const INTENSITY_MAX: u8 = 10;

/// Maximum length of the free-text notes field, in characters.
pub const MAX_NOTES_CHARS: usize = 500;

/// Lowercases and strips everything but letters and digits, so that
/// "Friend's Place", "friends-place" and "friends place" all compare equal.
fn normalized(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The category of urge being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgeType {
    Alcohol,
    Cannabis,
    Food,
    Phone,
    Porn,
    Shopping,
    Tobacco,
    #[serde(rename = "TV")]
    Tv,
    Vape,
}

impl UrgeType {
    pub const ALL: [UrgeType; 9] = [
        UrgeType::Alcohol,
        UrgeType::Cannabis,
        UrgeType::Food,
        UrgeType::Phone,
        UrgeType::Porn,
        UrgeType::Shopping,
        UrgeType::Tobacco,
        UrgeType::Tv,
        UrgeType::Vape,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UrgeType::Alcohol => "Alcohol",
            UrgeType::Cannabis => "Cannabis",
            UrgeType::Food => "Food",
            UrgeType::Phone => "Phone",
            UrgeType::Porn => "Porn",
            UrgeType::Shopping => "Shopping",
            UrgeType::Tobacco => "Tobacco",
            UrgeType::Tv => "TV",
            UrgeType::Vape => "Vape",
        }
    }

    /// Parse user input, tolerant of case and punctuation differences.
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = normalized(value);
        Self::ALL
            .into_iter()
            .find(|candidate| normalized(candidate.label()) == wanted)
    }
}

impl fmt::Display for UrgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the user was when the urge occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Home,
    Work,
    School,
    #[serde(rename = "Friend's Place")]
    FriendsPlace,
    #[serde(rename = "Public Space")]
    PublicSpace,
    Vehicle,
    Other,
}

impl Location {
    pub const ALL: [Location; 7] = [
        Location::Home,
        Location::Work,
        Location::School,
        Location::FriendsPlace,
        Location::PublicSpace,
        Location::Vehicle,
        Location::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Location::Home => "Home",
            Location::Work => "Work",
            Location::School => "School",
            Location::FriendsPlace => "Friend's Place",
            Location::PublicSpace => "Public Space",
            Location::Vehicle => "Vehicle",
            Location::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = normalized(value);
        Self::ALL
            .into_iter()
            .find(|candidate| normalized(candidate.label()) == wanted)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emotions felt at the time of the urge.
///
/// Entries keep these in selection order; the first one selected is the
/// "primary" emotion used for trigger-pattern derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Stressed,
    Anxious,
    Bored,
    Sad,
    Angry,
    Lonely,
    Happy,
    Excited,
    Tired,
    Other,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Stressed,
        Emotion::Anxious,
        Emotion::Bored,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Lonely,
        Emotion::Happy,
        Emotion::Excited,
        Emotion::Tired,
        Emotion::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Stressed => "Stressed",
            Emotion::Anxious => "Anxious",
            Emotion::Bored => "Bored",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Lonely => "Lonely",
            Emotion::Happy => "Happy",
            Emotion::Excited => "Excited",
            Emotion::Tired => "Tired",
            Emotion::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = normalized(value);
        Self::ALL
            .into_iter()
            .find(|candidate| normalized(candidate.label()) == wanted)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The kind of physical sensation felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SensationType {
    Tightness,
    Restlessness,
    Emptiness,
    #[serde(rename = "Racing/Pounding")]
    RacingPounding,
    Tension,
    Heaviness,
    Sweating,
    #[serde(rename = "Trembling/Shaking")]
    TremblingShaking,
    Nausea,
    Aching,
}

impl SensationType {
    pub const ALL: [SensationType; 10] = [
        SensationType::Tightness,
        SensationType::Restlessness,
        SensationType::Emptiness,
        SensationType::RacingPounding,
        SensationType::Tension,
        SensationType::Heaviness,
        SensationType::Sweating,
        SensationType::TremblingShaking,
        SensationType::Nausea,
        SensationType::Aching,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensationType::Tightness => "Tightness",
            SensationType::Restlessness => "Restlessness",
            SensationType::Emptiness => "Emptiness",
            SensationType::RacingPounding => "Racing/Pounding",
            SensationType::Tension => "Tension",
            SensationType::Heaviness => "Heaviness",
            SensationType::Sweating => "Sweating",
            SensationType::TremblingShaking => "Trembling/Shaking",
            SensationType::Nausea => "Nausea",
            SensationType::Aching => "Aching",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = normalized(value);
        Self::ALL
            .into_iter()
            .find(|candidate| normalized(candidate.label()) == wanted)
    }
}

impl fmt::Display for SensationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The body area where a sensation was felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SensationLocation {
    Chest,
    Heart,
    Shoulders,
    Neck,
    Stomach,
    Ribs,
    Face,
    Hips,
    Legs,
    Arms,
    Back,
}

impl SensationLocation {
    pub const ALL: [SensationLocation; 11] = [
        SensationLocation::Chest,
        SensationLocation::Heart,
        SensationLocation::Shoulders,
        SensationLocation::Neck,
        SensationLocation::Stomach,
        SensationLocation::Ribs,
        SensationLocation::Face,
        SensationLocation::Hips,
        SensationLocation::Legs,
        SensationLocation::Arms,
        SensationLocation::Back,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensationLocation::Chest => "Chest",
            SensationLocation::Heart => "Heart",
            SensationLocation::Shoulders => "Shoulders",
            SensationLocation::Neck => "Neck",
            SensationLocation::Stomach => "Stomach",
            SensationLocation::Ribs => "Ribs",
            SensationLocation::Face => "Face",
            SensationLocation::Hips => "Hips",
            SensationLocation::Legs => "Legs",
            SensationLocation::Arms => "Arms",
            SensationLocation::Back => "Back",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = normalized(value);
        Self::ALL
            .into_iter()
            .find(|candidate| normalized(candidate.label()) == wanted)
    }
}

impl fmt::Display for SensationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the user responded to the urge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionTaken {
    /// Rode the urge out without acting on it.
    #[serde(rename = "Processed the urge")]
    Processed,
    /// Acted on the urge.
    #[serde(rename = "Gave in to urge")]
    GaveIn,
    /// Acted on the urge in a limited way.
    #[serde(rename = "Partially gave in")]
    PartiallyGaveIn,
}

impl ActionTaken {
    pub const ALL: [ActionTaken; 3] = [
        ActionTaken::Processed,
        ActionTaken::GaveIn,
        ActionTaken::PartiallyGaveIn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActionTaken::Processed => "Processed the urge",
            ActionTaken::GaveIn => "Gave in to urge",
            ActionTaken::PartiallyGaveIn => "Partially gave in",
        }
    }

    /// Parse user input; short forms are accepted alongside full labels.
    pub fn parse(value: &str) -> Option<Self> {
        match normalized(value).as_str() {
            "processed" | "processedtheurge" => Some(ActionTaken::Processed),
            "gavein" | "gaveintourge" => Some(ActionTaken::GaveIn),
            "partial" | "partiallygavein" => Some(ActionTaken::PartiallyGaveIn),
            _ => None,
        }
    }
}

impl fmt::Display for ActionTaken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One physical sensation: what was felt and where.
///
/// Serialized as `{"type": ..., "location": ...}` in the export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhysicalSensation {
    #[serde(rename = "type")]
    pub sensation: SensationType,
    pub location: SensationLocation,
}

impl PhysicalSensation {
    pub fn new(sensation: SensationType, location: SensationLocation) -> Self {
        Self {
            sensation,
            location,
        }
    }
}

impl fmt::Display for PhysicalSensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.sensation, self.location)
    }
}

/// Rejection reasons for a candidate entry.
///
/// Kept separate from storage failures so callers can prompt the user to
/// correct input before any write is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("intensity must be between 1 and 10, got {0}")]
    IntensityOutOfRange(u8),
    #[error("at least one emotion must be selected")]
    NoEmotions,
    #[error("at least one physical sensation must be recorded")]
    NoSensations,
    #[error("duplicate sensation: {0}")]
    DuplicateSensation(PhysicalSensation),
    #[error("notes exceed 500 characters (got {0})")]
    NotesTooLong(usize),
}

/// One logged urge event.
///
/// Immutable once created; edits replace the record wholesale, keyed by
/// `id`. Timestamps are user-editable (back-dated entries are allowed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgeEntry {
    /// Stable unique identifier for the record's lifetime.
    pub id: Uuid,
    /// When the urge occurred. Epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub urge_type: UrgeType,
    /// Subjective strength, [`INTENSITY_MIN`]..=[`INTENSITY_MAX`].
    pub intensity: u8,
    pub location: Location,
    /// Selection order is preserved; the first element is the primary
    /// emotion used for trigger derivation.
    pub emotions: Vec<Emotion>,
    /// Unique (type, location) pairs.
    #[serde(rename = "physicalSensations")]
    pub sensations: Vec<PhysicalSensation>,
    pub action_taken: ActionTaken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UrgeEntry {
    /// Creates an entry with a freshly generated id and no notes.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timestamp: DateTime<Utc>,
        urge_type: UrgeType,
        intensity: u8,
        location: Location,
        emotions: Vec<Emotion>,
        sensations: Vec<PhysicalSensation>,
        action_taken: ActionTaken,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            urge_type,
            intensity,
            location,
            emotions,
            sensations,
            action_taken,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// The first-selected emotion, used for trigger-pattern derivation.
    pub fn primary_emotion(&self) -> Option<Emotion> {
        self.emotions.first().copied()
    }

    /// Checks the entry invariants.
    ///
    /// Pure: no I/O, no side effects. Callers must invoke this before
    /// handing the entry to a store; the store does not re-validate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(INTENSITY_MIN..=INTENSITY_MAX).contains(&self.intensity) {
            return Err(ValidationError::IntensityOutOfRange(self.intensity));
        }
        if self.emotions.is_empty() {
            return Err(ValidationError::NoEmotions);
        }
        if self.sensations.is_empty() {
            return Err(ValidationError::NoSensations);
        }
        let mut seen = HashSet::new();
        for sensation in &self.sensations {
            if !seen.insert(*sensation) {
                return Err(ValidationError::DuplicateSensation(*sensation));
            }
        }
        if let Some(notes) = &self.notes {
            let chars = notes.chars().count();
            if chars > MAX_NOTES_CHARS {
                return Err(ValidationError::NotesTooLong(chars));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_entry() -> UrgeEntry {
        UrgeEntry::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap(),
            UrgeType::Phone,
            6,
            Location::Home,
            vec![Emotion::Bored, Emotion::Tired],
            vec![PhysicalSensation::new(
                SensationType::Restlessness,
                SensationLocation::Chest,
            )],
            ActionTaken::Processed,
        )
    }

    #[test]
    fn valid_entry_passes_validation() {
        assert_eq!(sample_entry().validate(), Ok(()));
    }

    #[test]
    fn intensity_bounds_are_inclusive() {
        let mut entry = sample_entry();
        entry.intensity = 1;
        assert!(entry.validate().is_ok());
        entry.intensity = 10;
        assert!(entry.validate().is_ok());
        entry.intensity = 0;
        assert_eq!(
            entry.validate(),
            Err(ValidationError::IntensityOutOfRange(0))
        );
        entry.intensity = 11;
        assert_eq!(
            entry.validate(),
            Err(ValidationError::IntensityOutOfRange(11))
        );
    }

    #[test]
    fn empty_emotions_rejected() {
        let mut entry = sample_entry();
        entry.emotions.clear();
        assert_eq!(entry.validate(), Err(ValidationError::NoEmotions));
    }

    #[test]
    fn empty_sensations_rejected() {
        let mut entry = sample_entry();
        entry.sensations.clear();
        assert_eq!(entry.validate(), Err(ValidationError::NoSensations));
    }

    #[test]
    fn duplicate_sensation_pair_rejected() {
        let mut entry = sample_entry();
        let pair = entry.sensations[0];
        entry.sensations.push(pair);
        assert_eq!(
            entry.validate(),
            Err(ValidationError::DuplicateSensation(pair))
        );
    }

    #[test]
    fn same_type_different_area_is_not_a_duplicate() {
        let mut entry = sample_entry();
        entry.sensations.push(PhysicalSensation::new(
            SensationType::Restlessness,
            SensationLocation::Legs,
        ));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn overlong_notes_rejected() {
        let entry = sample_entry().with_notes("x".repeat(MAX_NOTES_CHARS + 1));
        assert_eq!(
            entry.validate(),
            Err(ValidationError::NotesTooLong(MAX_NOTES_CHARS + 1))
        );
        let entry = sample_entry().with_notes("x".repeat(MAX_NOTES_CHARS));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn blank_notes_become_none() {
        let entry = sample_entry().with_notes("   ");
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn parse_is_tolerant_of_user_spelling() {
        assert_eq!(Location::parse("friends-place"), Some(Location::FriendsPlace));
        assert_eq!(Location::parse("Public Space"), Some(Location::PublicSpace));
        assert_eq!(UrgeType::parse("tv"), Some(UrgeType::Tv));
        assert_eq!(
            SensationType::parse("racing-pounding"),
            Some(SensationType::RacingPounding)
        );
        assert_eq!(ActionTaken::parse("processed"), Some(ActionTaken::Processed));
        assert_eq!(ActionTaken::parse("gave-in"), Some(ActionTaken::GaveIn));
        assert_eq!(
            ActionTaken::parse("partial"),
            Some(ActionTaken::PartiallyGaveIn)
        );
        assert_eq!(Location::parse("somewhere"), None);
    }

    #[test]
    fn entry_serializes_with_export_field_names() {
        let entry = sample_entry().with_notes("after lunch");
        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value["urgeType"], "Phone");
        assert_eq!(value["actionTaken"], "Processed the urge");
        assert_eq!(value["physicalSensations"][0]["type"], "Restlessness");
        assert_eq!(value["physicalSensations"][0]["location"], "Chest");
        assert_eq!(value["timestamp"], entry.timestamp.timestamp_millis());

        let back: UrgeEntry = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, entry);
    }
}
