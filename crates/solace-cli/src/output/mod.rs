//! Entry rendering for the terminal.

use comfy_table::{presets, Table};
use owo_colors::OwoColorize;

use solace_core::Entry;

use crate::helpers::{short_id, truncate};

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Table,
    Plain,
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

pub fn print_entries_table(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries");
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "DATE", "EMOTION", "TAGS"]);
    for entry in entries {
        table.add_row(vec![
            short_id(&entry.id),
            entry.date.clone(),
            truncate(&entry.emotion, 40),
            entry.all_tags().collect::<Vec<_>>().join(", "),
        ]);
    }
    println!("{}", table);
}

pub fn print_entries_plain(entries: &[Entry]) {
    for entry in entries {
        println!(
            "{} {} {}",
            entry.id,
            entry.date,
            truncate(&entry.emotion, 60)
        );
    }
}

pub fn print_entry(entry: &Entry) {
    println!("{} {}", "ID:".bold(), entry.id);
    println!("{} {}", "Date:".bold(), entry.date);
    print_field("Emotion", &entry.emotion);
    print_field("Trigger", &entry.trigger);
    print_field("Behavior", &entry.behavior);
    print_field("Wins", &entry.wins);
    print_field("Notes", &entry.therapy_prep);
    if !entry.location_name.is_empty() {
        print_field("Place", &entry.location_name);
    }
    let tags: Vec<&str> = entry.all_tags().collect();
    if !tags.is_empty() {
        println!("{} {}", "Tags:".bold(), tags.join(", "));
    }
    if let (Some(lat), Some(lng)) = (entry.lat, entry.lng) {
        println!("{} {}, {}", "Coordinates:".bold(), lat, lng);
    }
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{} {}", format!("{}:", label).bold(), value);
    }
}
