//! Edit command handler.
//!
//! Loads the entry, applies the provided overrides, re-validates, and
//! replaces the stored record wholesale.

use uuid::Uuid;

use urgelog_core::{EntryStore, UrgeLogError};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{
    parse_action, parse_datetime, parse_emotion, parse_location, parse_sensation_pair,
    parse_urge_type,
};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let id = Uuid::parse_str(&args.id)
        .map_err(|e| anyhow::anyhow!("Invalid entry ID: {}", e))?;

    let mut store = ctx.open_store()?;
    let mut entry = store
        .get_entry(&id)?
        .ok_or(UrgeLogError::NotFound(id))?;

    if let Some(value) = &args.urge_type {
        entry.urge_type = parse_urge_type(value)?;
    }
    if let Some(value) = args.intensity {
        entry.intensity = value;
    }
    if let Some(value) = &args.location {
        entry.location = parse_location(value)?;
    }
    if !args.emotion.is_empty() {
        entry.emotions = args
            .emotion
            .iter()
            .map(|value| parse_emotion(value))
            .collect::<anyhow::Result<Vec<_>>>()?;
    }
    if !args.sensation.is_empty() {
        entry.sensations = args
            .sensation
            .iter()
            .map(|value| parse_sensation_pair(value))
            .collect::<anyhow::Result<Vec<_>>>()?;
    }
    if let Some(value) = &args.action {
        entry.action_taken = parse_action(value)?;
    }
    if let Some(value) = &args.date {
        entry.timestamp = parse_datetime(value)?;
    }
    if let Some(notes) = &args.notes {
        entry.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes.clone())
        };
    }

    entry.validate().map_err(UrgeLogError::from)?;

    store.replace_entry(&entry)?;
    store.close()?;

    if !ctx.quiet() {
        println!("Updated entry {}", entry.id);
    }
    Ok(())
}
