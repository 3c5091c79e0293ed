//! Interactive prompts for the entry form.
//!
//! Emotions and sensations are collected one at a time so selection order
//! is preserved; the first emotion chosen becomes the primary emotion.

use std::fmt::Display;

use dialoguer::{Confirm, Input, Select};

use urgelog_core::model::{INTENSITY_MAX, INTENSITY_MIN, MAX_NOTES_CHARS};
use urgelog_core::{
    ActionTaken, Emotion, Location, PhysicalSensation, SensationLocation, SensationType, UrgeType,
};

fn select_from<T: Copy + Display>(prompt: &str, options: &[T]) -> anyhow::Result<T> {
    let labels: Vec<String> = options.iter().map(|option| option.to_string()).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[index])
}

pub fn select_urge_type() -> anyhow::Result<UrgeType> {
    select_from("Urge type", &UrgeType::ALL)
}

pub fn select_location() -> anyhow::Result<Location> {
    select_from("Where are you?", &Location::ALL)
}

pub fn select_action() -> anyhow::Result<ActionTaken> {
    select_from("What did you do?", &ActionTaken::ALL)
}

pub fn prompt_intensity() -> anyhow::Result<u8> {
    let value = Input::<u8>::new()
        .with_prompt(format!(
            "Intensity ({}-{})",
            INTENSITY_MIN, INTENSITY_MAX
        ))
        .validate_with(|input: &u8| {
            if (INTENSITY_MIN..=INTENSITY_MAX).contains(input) {
                Ok(())
            } else {
                Err(format!(
                    "intensity must be between {} and {}",
                    INTENSITY_MIN, INTENSITY_MAX
                ))
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Collect emotions one at a time, preserving selection order.
pub fn prompt_emotions() -> anyhow::Result<Vec<Emotion>> {
    let mut selected: Vec<Emotion> = Vec::new();
    loop {
        let remaining: Vec<Emotion> = Emotion::ALL
            .into_iter()
            .filter(|emotion| !selected.contains(emotion))
            .collect();
        let mut labels: Vec<String> = remaining.iter().map(|e| e.to_string()).collect();
        let done_index = labels.len();
        if !selected.is_empty() {
            labels.push("Done".to_string());
        }

        let prompt = if selected.is_empty() {
            "How are you feeling? (first pick is the primary emotion)"
        } else {
            "Add another emotion"
        };
        let index = Select::new()
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;

        if index == done_index && !selected.is_empty() {
            break;
        }
        selected.push(remaining[index]);
        if selected.len() == Emotion::ALL.len() {
            break;
        }
    }
    Ok(selected)
}

/// Collect sensation pairs, rejecting duplicates at the prompt.
pub fn prompt_sensations() -> anyhow::Result<Vec<PhysicalSensation>> {
    let mut selected: Vec<PhysicalSensation> = Vec::new();
    loop {
        let sensation = select_from("Physical sensation", &SensationType::ALL)?;
        let area = select_from("Where in the body?", &SensationLocation::ALL)?;
        let pair = PhysicalSensation::new(sensation, area);

        if selected.contains(&pair) {
            eprintln!("{} is already added", pair);
        } else {
            selected.push(pair);
        }

        let again = Confirm::new()
            .with_prompt("Add another sensation?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }
    Ok(selected)
}

pub fn prompt_notes() -> anyhow::Result<Option<String>> {
    let value = Input::<String>::new()
        .with_prompt("Notes (optional)")
        .allow_empty(true)
        .validate_with(|input: &String| {
            if input.chars().count() <= MAX_NOTES_CHARS {
                Ok(())
            } else {
                Err(format!("notes are limited to {} characters", MAX_NOTES_CHARS))
            }
        })
        .interact_text()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

pub fn confirm_delete(summary: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("Delete {}?", summary))
        .default(false)
        .interact()?)
}
