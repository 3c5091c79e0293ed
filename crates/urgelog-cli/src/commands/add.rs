//! Add entry command handler.
//!
//! Every field can come from a flag; whatever is missing is gathered by
//! the interactive form. With `--no-input` (or a non-terminal stdin) all
//! required fields must be supplied as flags.

use std::io::IsTerminal;

use chrono::{Local, Utc};

use urgelog_core::{EntryStore, UrgeEntry, UrgeLogError};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::prompt;
use crate::helpers::{
    parse_action, parse_datetime, parse_emotion, parse_location, parse_sensation_pair,
    parse_urge_type,
};

fn missing(field: &str, flag: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Missing {} (pass {} or run interactively without --no-input)",
        field,
        flag
    )
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    // Resolve the store first so a missing database fails before the user
    // fills in a whole form.
    let mut store = ctx.open_store()?;

    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let needs_prompting = args.urge_type.is_none()
        || args.intensity.is_none()
        || args.location.is_none()
        || args.emotion.is_empty()
        || args.sensation.is_empty()
        || args.action.is_none();

    if interactive && needs_prompting && !ctx.quiet() {
        println!("Urgelog \u{00B7} log urge");
        println!();
    }

    let timestamp = match &args.date {
        Some(value) => parse_datetime(value)?,
        None => Utc::now(),
    };

    let urge_type = match &args.urge_type {
        Some(value) => parse_urge_type(value)?,
        None if interactive => prompt::select_urge_type()?,
        None => return Err(missing("urge type", "TYPE")),
    };

    let intensity = match args.intensity {
        Some(value) => value,
        None if interactive => prompt::prompt_intensity()?,
        None => return Err(missing("intensity", "--intensity")),
    };

    let location = match &args.location {
        Some(value) => parse_location(value)?,
        None if interactive => prompt::select_location()?,
        None => return Err(missing("location", "--location")),
    };

    let emotions = if !args.emotion.is_empty() {
        args.emotion
            .iter()
            .map(|value| parse_emotion(value))
            .collect::<anyhow::Result<Vec<_>>>()?
    } else if interactive {
        prompt::prompt_emotions()?
    } else {
        return Err(missing("emotions", "--emotion"));
    };

    let sensations = if !args.sensation.is_empty() {
        args.sensation
            .iter()
            .map(|value| parse_sensation_pair(value))
            .collect::<anyhow::Result<Vec<_>>>()?
    } else if interactive {
        prompt::prompt_sensations()?
    } else {
        return Err(missing("sensations", "--sensation"));
    };

    let action_taken = match &args.action {
        Some(value) => parse_action(value)?,
        None if interactive => prompt::select_action()?,
        None => return Err(missing("action", "--action")),
    };

    let mut entry = UrgeEntry::new(
        timestamp,
        urge_type,
        intensity,
        location,
        emotions,
        sensations,
        action_taken,
    );
    entry = match &args.notes {
        Some(notes) => entry.with_notes(notes.clone()),
        None if interactive => match prompt::prompt_notes()? {
            Some(notes) => entry.with_notes(notes),
            None => entry,
        },
        None => entry,
    };

    // Validation failures never reach the store; the caller is prompted
    // to correct input instead.
    entry.validate().map_err(UrgeLogError::from)?;

    store.insert_entry(&entry)?;
    store.close()?;

    if !ctx.quiet() {
        println!("Logged {} urge ({})", entry.urge_type, entry.action_taken);
        println!(
            "ID: {}  \u{00B7}  {}  \u{00B7}  intensity {}",
            entry.id,
            entry
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M"),
            entry.intensity
        );
    }
    Ok(())
}
