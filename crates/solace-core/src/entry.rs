//! Journal entry data model.
//!
//! Field names mirror the persisted JSON, so sealed blobs, snapshots,
//! and exports all share one shape. `date` is a local
//! `YYYY-MM-DDTHH:MM` string and is the primary ordering key; ordering
//! and range filtering rely on its lexicographic form only and never
//! parse it.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tags::TagSet;

/// One journal record.
///
/// Every field is defaultable on input so tolerant restores and older
/// snapshots deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entry {
    /// Unique id, assigned at creation, stable for the entry's lifetime
    pub id: String,

    /// Local timestamp, `YYYY-MM-DDTHH:MM`
    pub date: String,

    /// Emotion label; the quick flow writes
    /// `primary (secondary: deeper, ...)` but the field is free text
    pub emotion: String,

    /// What set the emotion off
    pub trigger: String,

    /// Behavior and patterns
    pub behavior: String,

    /// Wins and challenges
    pub wins: String,

    /// Retained alongside `wins`; the editor folds both into one field
    pub challenge: String,

    /// Therapy prep / notes
    pub therapy_prep: String,

    /// Location tags (`loc:`-derived and user-added)
    pub location_tags: TagSet,

    /// Time tags (`time:`-derived and user-added)
    pub time_tags: TagSet,

    /// Everything else
    pub other_tags: TagSet,

    /// Captured latitude, if any
    pub lat: Option<f64>,

    /// Captured longitude, if any
    pub lng: Option<f64>,

    /// Free-text place name
    pub location_name: String,
}

impl Entry {
    /// An empty entry with a fresh id and the given timestamp.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// An empty entry stamped with the current local time.
    pub fn now() -> Self {
        Self::new(current_stamp())
    }

    pub fn with_emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = emotion.into();
        self
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    pub fn with_behavior(mut self, behavior: impl Into<String>) -> Self {
        self.behavior = behavior.into();
        self
    }

    pub fn with_wins(mut self, wins: impl Into<String>) -> Self {
        self.wins = wins.into();
        self
    }

    pub fn with_therapy_prep(mut self, therapy_prep: impl Into<String>) -> Self {
        self.therapy_prep = therapy_prep.into();
        self
    }

    pub fn with_location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = name.into();
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Copy this entry under a fresh id and a fresh timestamp.
    pub fn duplicate_as_new(&self) -> Self {
        Self {
            id: fresh_id(),
            date: current_stamp(),
            ..self.clone()
        }
    }

    /// All three tag sets, in display order.
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.location_tags
            .iter()
            .chain(self.time_tags.iter())
            .chain(self.other_tags.iter())
    }

    /// The text block keyword search runs over.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.emotion, self.behavior, self.wins, self.therapy_prep
        )
    }
}

/// Collision-resistant entry id. Safe across rapid successive creations.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current local time in the entry timestamp form.
pub fn current_stamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}

/// Current local hour, for time-of-day tagging.
pub fn current_hour() -> u32 {
    Local::now().hour()
}

/// Compose a mood-picker emotion label: `primary (secondary: d1, d2)`.
/// Deeper feelings only render under a secondary emotion.
pub fn emotion_label(primary: &str, secondary: Option<&str>, deeper: &[String]) -> String {
    let mut label = primary.to_string();
    if let Some(secondary) = secondary {
        label.push_str(" (");
        label.push_str(secondary);
        if !deeper.is_empty() {
            label.push_str(": ");
            label.push_str(&deeper.join(", "));
        }
        label.push(')');
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Entry::new("2024-01-01T09:00");
        let b = Entry::new("2024-01-01T09:00");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_builder_chain() {
        let entry = Entry::new("2024-03-05T14:30")
            .with_emotion("calm (centered)")
            .with_behavior("took a walk")
            .with_wins("finished the report")
            .with_therapy_prep("talk about boundaries")
            .with_coordinates(51.5, -0.12);

        assert_eq!(entry.date, "2024-03-05T14:30");
        assert_eq!(entry.emotion, "calm (centered)");
        assert_eq!(entry.lat, Some(51.5));
        assert_eq!(entry.lng, Some(-0.12));
    }

    #[test]
    fn test_duplicate_as_new_changes_identity_keeps_content() {
        let mut original = Entry::new("2020-06-01T08:00").with_emotion("proud");
        original.other_tags.insert("win");

        let copy = original.duplicate_as_new();
        assert_ne!(copy.id, original.id);
        assert_ne!(copy.date, original.date);
        assert_eq!(copy.emotion, "proud");
        assert!(copy.other_tags.contains("win"));
    }

    #[test]
    fn test_serde_wire_field_names() {
        let mut entry = Entry::new("2024-01-01T09:00").with_therapy_prep("notes");
        entry.location_tags.insert("loc:lat_1.00");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"therapyPrep\":\"notes\""));
        assert!(json.contains("\"locationTags\":[\"loc:lat_1.00\"]"));
        assert!(json.contains("\"timeTags\":[]"));
        assert!(json.contains("\"otherTags\":[]"));
        assert!(json.contains("\"lat\":null"));
        assert!(json.contains("\"locationName\":\"\""));
    }

    #[test]
    fn test_serde_missing_fields_default() {
        let entry: Entry =
            serde_json::from_str(r#"{"id":"x","date":"2024-01-01T09:00"}"#).unwrap();
        assert_eq!(entry.id, "x");
        assert_eq!(entry.emotion, "");
        assert!(entry.other_tags.is_empty());
        assert_eq!(entry.lat, None);
    }

    #[test]
    fn test_emotion_label_composition() {
        assert_eq!(emotion_label("happy", None, &[]), "happy");
        assert_eq!(
            emotion_label("happy", Some("joyful"), &[]),
            "happy (joyful)"
        );
        assert_eq!(
            emotion_label(
                "happy",
                Some("joyful"),
                &["elated".to_string(), "cheerful".to_string()]
            ),
            "happy (joyful: elated, cheerful)"
        );
        // Deeper feelings without a secondary have nowhere to hang.
        assert_eq!(
            emotion_label("happy", None, &["elated".to_string()]),
            "happy"
        );
    }

    #[test]
    fn test_current_stamp_shape() {
        let stamp = current_stamp();
        assert_eq!(stamp.len(), 16);
        assert_eq!(&stamp[10..11], "T");
    }

    #[test]
    fn test_searchable_text_covers_narrative_fields() {
        let entry = Entry::new("2024-01-01T09:00")
            .with_emotion("anxious")
            .with_behavior("paced around")
            .with_wins("asked for help")
            .with_therapy_prep("bring this up");
        let text = entry.searchable_text();
        assert!(text.contains("anxious"));
        assert!(text.contains("paced"));
        assert!(text.contains("asked"));
        assert!(text.contains("bring"));
    }
}
