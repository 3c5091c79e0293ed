//! Parsing helpers for datetimes, durations, and category values.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use urgelog_core::{
    ActionTaken, Emotion, Location, PhysicalSensation, SensationLocation, SensationType, UrgeType,
};

/// Parse a datetime string.
///
/// Accepts RFC-3339, `YYYY-MM-DD HH:MM` (local wall clock, matching how
/// entries are logged), or a bare `YYYY-MM-DD` (local midnight).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return local_to_utc(naive, value);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date value: {}", value))?;
        return local_to_utc(naive, value);
    }

    Err(anyhow::anyhow!(
        "Invalid date/time (expected ISO-8601, \"YYYY-MM-DD HH:MM\", or YYYY-MM-DD): {}",
        value
    ))
}

fn local_to_utc(naive: NaiveDateTime, original: &str) -> anyhow::Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("Date/time does not exist in the local zone: {}", original))
}

/// Parse a duration string (e.g., "7d", "24h").
pub fn parse_duration(value: &str) -> anyhow::Result<Duration> {
    if value.len() < 2 {
        return Err(anyhow::anyhow!(
            "Invalid duration: {} (expected <number><unit>)",
            value
        ));
    }

    let (num_str, unit) = value.split_at(value.len() - 1);
    let amount: i64 = num_str
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", value))?;
    if amount <= 0 {
        return Err(anyhow::anyhow!("Duration must be positive: {}", value));
    }

    match unit {
        "d" => Ok(Duration::days(amount)),
        "h" => Ok(Duration::hours(amount)),
        "m" => Ok(Duration::minutes(amount)),
        "s" => Ok(Duration::seconds(amount)),
        _ => Err(anyhow::anyhow!(
            "Invalid duration unit: {} (use d/h/m/s)",
            unit
        )),
    }
}

fn unknown_value(field: &str, value: &str, valid: &[&'static str]) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown {}: \"{}\" (expected one of: {})",
        field,
        value,
        valid.join(", ")
    )
}

pub fn parse_urge_type(value: &str) -> anyhow::Result<UrgeType> {
    UrgeType::parse(value)
        .ok_or_else(|| unknown_value("urge type", value, &UrgeType::ALL.map(|v| v.label())))
}

pub fn parse_location(value: &str) -> anyhow::Result<Location> {
    Location::parse(value)
        .ok_or_else(|| unknown_value("location", value, &Location::ALL.map(|v| v.label())))
}

pub fn parse_emotion(value: &str) -> anyhow::Result<Emotion> {
    Emotion::parse(value)
        .ok_or_else(|| unknown_value("emotion", value, &Emotion::ALL.map(|v| v.label())))
}

pub fn parse_action(value: &str) -> anyhow::Result<ActionTaken> {
    ActionTaken::parse(value)
        .ok_or_else(|| unknown_value("action", value, &["processed", "gave-in", "partial"]))
}

/// Parse a `TYPE:AREA` sensation pair (e.g. "tightness:chest").
pub fn parse_sensation_pair(value: &str) -> anyhow::Result<PhysicalSensation> {
    let (kind, area) = value
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("Invalid sensation \"{}\" (expected TYPE:AREA)", value))?;

    let sensation = SensationType::parse(kind).ok_or_else(|| {
        unknown_value(
            "sensation type",
            kind,
            &SensationType::ALL.map(|v| v.label()),
        )
    })?;
    let location = SensationLocation::parse(area).ok_or_else(|| {
        unknown_value(
            "sensation area",
            area,
            &SensationLocation::ALL.map(|v| v.label()),
        )
    })?;

    Ok(PhysicalSensation::new(sensation, location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let parsed = parse_datetime("2025-06-01T14:30:00Z").expect("parse");
        assert_eq!(parsed.timestamp(), 1_748_788_200);
    }

    #[test]
    fn parses_sensation_pairs() {
        let pair = parse_sensation_pair("racing-pounding:heart").expect("parse");
        assert_eq!(pair.sensation, SensationType::RacingPounding);
        assert_eq!(pair.location, SensationLocation::Heart);

        assert!(parse_sensation_pair("tightness").is_err());
        assert!(parse_sensation_pair("tightness:elbow").is_err());
    }

    #[test]
    fn rejects_bad_durations() {
        assert!(parse_duration("7").is_err());
        assert!(parse_duration("0d").is_err());
        assert!(parse_duration("7w").is_err());
        assert_eq!(parse_duration("7d").expect("parse"), Duration::days(7));
    }

    #[test]
    fn unknown_category_errors_list_valid_values() {
        let err = parse_urge_type("doomscrolling").unwrap_err();
        assert!(err.to_string().contains("Phone"));
    }
}
