//! Tag sets and tag suggestion helpers.
//!
//! Every entry carries three independent tag sets (location, time,
//! other). `TagSet` guarantees the no-duplicates invariant structurally
//! and preserves insertion order for display.

use serde::{Deserialize, Serialize};

/// Prefix for tags derived from a captured location.
pub const LOCATION_TAG_PREFIX: &str = "loc:";

/// Prefix for time-of-day tags.
pub const TIME_TAG_PREFIX: &str = "time:";

/// Starter suggestions for location tags.
pub const DEFAULT_LOCATION_SUGGESTIONS: [&str; 6] =
    ["home", "office", "busstop", "gym", "cafe", "park"];

/// Starter suggestions for common tags.
pub const DEFAULT_COMMON_SUGGESTIONS: [&str; 9] = [
    "work",
    "family",
    "anxiety",
    "win",
    "challenge",
    "procrastination",
    "gratitude",
    "therapy",
    "trigger",
];

/// An insertion-ordered, duplicate-free set of tags.
///
/// Serializes as a plain JSON array; duplicates in incoming data are
/// dropped on the way in, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, trimming surrounding whitespace. Returns `false`
    /// and leaves the set unchanged when the tag is blank or already
    /// present.
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Remove a tag; returns whether it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    /// Drop every tag carrying the given prefix.
    pub fn remove_prefixed(&mut self, prefix: &str) {
        self.0.retain(|t| !t.starts_with(prefix));
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        let mut set = TagSet::new();
        for tag in tags {
            set.insert(tag);
        }
        set
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl FromIterator<String> for TagSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

/// Time-of-day tag for a local hour.
pub fn time_of_day_tag(hour: u32) -> String {
    let bucket = if hour < 12 {
        "morning"
    } else if hour < 18 {
        "afternoon"
    } else {
        "evening"
    };
    format!("{}{}", TIME_TAG_PREFIX, bucket)
}

/// Tag derived from a captured latitude, at two decimal places.
pub fn location_tag(lat: f64) -> String {
    format!("{}lat_{:.2}", LOCATION_TAG_PREFIX, lat)
}

/// Case-insensitive prefix suggestions from `pool`, skipping tags the
/// entry already holds. Empty input suggests nothing.
pub fn suggest_tags<'a>(input: &str, existing: &TagSet, pool: &'a [String]) -> Vec<&'a str> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    pool.iter()
        .filter(|tag| tag.to_lowercase().starts_with(&needle) && !existing.contains(tag))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = TagSet::new();
        assert!(set.insert("work"));
        assert!(!set.insert("work"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_trims_and_rejects_blank() {
        let mut set = TagSet::new();
        assert!(set.insert("  gym  "));
        assert!(set.contains("gym"));
        assert!(!set.insert("   "));
        assert!(!set.insert(""));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = TagSet::new();
        set.insert("b");
        set.insert("a");
        set.insert("c");
        let tags: Vec<&str> = set.iter().collect();
        assert_eq!(tags, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_vec_dedupes() {
        let set = TagSet::from(vec![
            "work".to_string(),
            "work".to_string(),
            "family".to_string(),
        ]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove_prefixed() {
        let mut set: TagSet = ["loc:lat_12.34", "home", "loc:lat_56.78"]
            .into_iter()
            .collect();
        set.remove_prefixed(LOCATION_TAG_PREFIX);
        let tags: Vec<&str> = set.iter().collect();
        assert_eq!(tags, vec!["home"]);
    }

    #[test]
    fn test_serde_round_trip_as_array() {
        let set: TagSet = ["time:morning", "quick-entry"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["time:morning","quick-entry"]"#);
        let back: TagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(time_of_day_tag(0), "time:morning");
        assert_eq!(time_of_day_tag(11), "time:morning");
        assert_eq!(time_of_day_tag(12), "time:afternoon");
        assert_eq!(time_of_day_tag(17), "time:afternoon");
        assert_eq!(time_of_day_tag(18), "time:evening");
        assert_eq!(time_of_day_tag(23), "time:evening");
    }

    #[test]
    fn test_location_tag_two_decimals() {
        assert_eq!(location_tag(51.5074), "loc:lat_51.51");
        assert_eq!(location_tag(-0.1), "loc:lat_-0.10");
    }

    #[test]
    fn test_suggest_tags_prefix_and_exclusion() {
        let pool: Vec<String> = DEFAULT_COMMON_SUGGESTIONS
            .iter()
            .map(|t| t.to_string())
            .collect();
        let mut existing = TagSet::new();

        let suggestions = suggest_tags("w", &existing, &pool);
        assert_eq!(suggestions, vec!["work", "win"]);

        existing.insert("work");
        let suggestions = suggest_tags("W", &existing, &pool);
        assert_eq!(suggestions, vec!["win"]);

        assert!(suggest_tags("", &existing, &pool).is_empty());
    }
}
