//! Read-only export projections.
//!
//! Export filters by date range only (keyword and tag filters never
//! apply here) and emits either a JSON array of raw entries or a
//! flattened CSV. It is a one-way dump; nothing reads it back.

use std::str::FromStr;

use crate::entry::Entry;
use crate::error::{JournalError, Result};

/// Column order for the tabular export.
const CSV_HEADER: &str = "id,date,emotion,behavior,wins,therapyPrep,locationTags,timeTags,otherTags,lat,lng";

/// Separator for flattened array cells.
const ARRAY_JOIN: &str = ";";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(JournalError::InvalidInput(format!(
                "Unsupported export format: {} (use json or csv)",
                other
            ))),
        }
    }
}

/// Project entries within an inclusive date range into the requested
/// format. Empty or absent bounds leave that side open.
pub fn export_entries(
    entries: &[Entry],
    from: Option<&str>,
    to: Option<&str>,
    format: ExportFormat,
) -> Result<String> {
    let selected: Vec<&Entry> = entries
        .iter()
        .filter(|entry| in_range(&entry.date, from, to))
        .collect();
    match format {
        ExportFormat::Json => serde_json::to_string(&selected)
            .map_err(|e| JournalError::Storage(format!("Failed to serialize export: {}", e))),
        ExportFormat::Csv => Ok(to_csv(&selected)),
    }
}

fn in_range(date: &str, from: Option<&str>, to: Option<&str>) -> bool {
    let day = date.get(..10).unwrap_or(date);
    if let Some(from) = from {
        if !from.is_empty() && day < from {
            return false;
        }
    }
    if let Some(to) = to {
        if !to.is_empty() && day > to {
            return false;
        }
    }
    true
}

fn to_csv(entries: &[&Entry]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for entry in entries {
        let cells = [
            cell(&entry.id),
            cell(&entry.date),
            cell(&entry.emotion),
            cell(&entry.behavior),
            cell(&entry.wins),
            cell(&entry.therapy_prep),
            cell(&entry.location_tags.join(ARRAY_JOIN)),
            cell(&entry.time_tags.join(ARRAY_JOIN)),
            cell(&entry.other_tags.join(ARRAY_JOIN)),
            number_cell(entry.lat),
            number_cell(entry.lng),
        ];
        rows.push(cells.join(","));
    }
    rows.join("\n")
}

/// Every data cell is quoted with JSON string escaping, which keeps
/// embedded commas, quotes, and newlines inside the cell.
fn cell(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

fn number_cell(value: Option<f64>) -> String {
    match value {
        Some(number) => cell(&number.to_string()),
        None => cell(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, emotion: &str) -> Entry {
        Entry::new(date).with_emotion(emotion)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_csv_header_and_single_matching_row() {
        let entries = vec![
            entry("2023-12-31T22:00", "calm"),
            entry("2024-01-01T09:00", "happy"),
            entry("2024-01-02T08:00", "sad"),
        ];
        let csv = export_entries(
            &entries,
            Some("2024-01-01"),
            Some("2024-01-01"),
            ExportFormat::Csv,
        )
        .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].contains("\"happy\""));
    }

    #[test]
    fn test_csv_flattens_and_escapes() {
        let mut e = entry("2024-01-01T09:00", "torn, but \"okay\"");
        e.time_tags.insert("time:morning");
        e.time_tags.insert("late");
        e.lat = Some(51.5);
        e.lng = Some(-0.12);

        let csv = export_entries(&[e], None, None, ExportFormat::Csv).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(r#""torn, but \"okay\"""#));
        assert!(row.contains("\"time:morning;late\""));
        assert!(row.contains("\"51.5\""));
        assert!(row.contains("\"-0.12\""));
    }

    #[test]
    fn test_csv_absent_coordinates_empty_cells() {
        let csv = export_entries(
            &[entry("2024-01-01T09:00", "happy")],
            None,
            None,
            ExportFormat::Csv,
        )
        .unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with("\"\",\"\""));
    }

    #[test]
    fn test_json_export_is_raw_entry_array() {
        let entries = vec![entry("2024-01-01T09:00", "happy")];
        let json = export_entries(&entries, None, None, ExportFormat::Json).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].emotion, "happy");
    }

    #[test]
    fn test_empty_range_bounds_are_open() {
        let entries = vec![entry("2024-01-01T09:00", "happy")];
        let json = export_entries(&entries, Some(""), Some(""), ExportFormat::Json).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_no_entries_still_emits_header() {
        let csv = export_entries(&[], None, None, ExportFormat::Csv).unwrap();
        assert_eq!(csv, CSV_HEADER);
    }
}
