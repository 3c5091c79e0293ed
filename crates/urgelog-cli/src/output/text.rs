//! Text and table output for entries and the analytics summary.

use std::fmt::Display;
use std::io::IsTerminal;

use chrono::Local;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

use urgelog_core::{AnalyticsSummary, UrgeEntry};

use super::OutputFormat;

const HOUR_BAR_WIDTH: u64 = 30;

fn heading(text: &str) -> String {
    if std::io::stdout().is_terminal() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn local_time(entry: &UrgeEntry) -> String {
    entry
        .timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line human description, used by delete confirmations.
pub fn entry_summary(entry: &UrgeEntry) -> String {
    format!(
        "{} urge at {} ({})",
        entry.urge_type,
        entry.location,
        local_time(entry)
    )
}

pub fn print_entry(entry: &UrgeEntry, quiet: bool) {
    if !quiet {
        println!("ID: {}", entry.id);
    }
    println!("When: {}", local_time(entry));
    println!("Type: {}", entry.urge_type);
    println!("Intensity: {}/10", entry.intensity);
    println!("Location: {}", entry.location);
    println!("Emotions: {}", join(&entry.emotions));
    println!("Sensations: {}", join(&entry.sensations));
    println!("Outcome: {}", entry.action_taken);
    if let Some(notes) = &entry.notes {
        println!();
        println!("{}", notes);
    }
}

pub fn print_entry_list(entries: &[UrgeEntry], format: OutputFormat, quiet: bool) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec![
                "When", "Type", "Int", "Location", "Outcome", "ID",
            ]);
            for entry in entries {
                table.add_row(vec![
                    local_time(entry),
                    entry.urge_type.to_string(),
                    entry.intensity.to_string(),
                    entry.location.to_string(),
                    entry.action_taken.to_string(),
                    entry.id.to_string(),
                ]);
            }
            println!("{table}");
            if !quiet {
                println!("{} entries", entries.len());
            }
        }
        OutputFormat::Plain => {
            for entry in entries {
                println!(
                    "{} {} {} {} {} {}",
                    entry.id,
                    local_time(entry),
                    entry.urge_type,
                    entry.intensity,
                    entry.location,
                    entry.action_taken
                );
            }
        }
    }
}

fn print_breakdown<K: Display>(title: &str, breakdown: impl IntoIterator<Item = (K, u64)>) {
    let mut rows: Vec<(String, u64)> = breakdown
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect();
    if rows.is_empty() {
        return;
    }
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    println!();
    println!("{}", heading(title));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    for (label, count) in rows {
        table.add_row(vec![label, count.to_string()]);
    }
    println!("{table}");
}

pub fn print_stats(summary: &AnalyticsSummary) {
    println!("{}", heading("Summary"));
    println!("Entries logged: {}", summary.total_entries);
    println!("Current streak: {} days", summary.current_streak);
    println!("Success rate: {}%", summary.success_rate);
    println!("Average intensity: {:.1}/10", summary.average_intensity);
    println!("Most common trigger: {}", summary.most_common_trigger);

    print_breakdown(
        "Urge types",
        summary
            .urge_type_breakdown
            .iter()
            .map(|(k, v)| (k, *v)),
    );
    print_breakdown(
        "Locations",
        summary.location_breakdown.iter().map(|(k, v)| (k, *v)),
    );
    print_breakdown(
        "Emotions",
        summary.emotion_breakdown.iter().map(|(k, v)| (k, *v)),
    );
    print_breakdown(
        "Sensations",
        summary
            .sensation_type_breakdown
            .iter()
            .map(|(k, v)| (k, *v)),
    );
    print_breakdown(
        "Body areas",
        summary
            .sensation_location_map
            .iter()
            .map(|(k, v)| (k, *v)),
    );

    if !summary.time_patterns.is_empty() {
        println!();
        println!("{}", heading("Time of day"));
        let max = summary
            .time_patterns
            .values()
            .copied()
            .max()
            .unwrap_or(1)
            .max(1);
        for (hour, count) in &summary.time_patterns {
            let width = (count * HOUR_BAR_WIDTH).div_ceil(max);
            println!("{:>2}:00  {:<30} {}", hour, "#".repeat(width as usize), count);
        }
    }
}
