//! Filtering and ordering over entry snapshots.
//!
//! Evaluation is pure: it never mutates the collection, and applying the
//! same filter twice yields the same result. Date comparisons are
//! lexicographic on the `YYYY-MM-DD` prefix of the timestamp string;
//! nothing in here parses a date.

use crate::entry::Entry;

/// Filter specification for querying entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    /// Start date (inclusive, `YYYY-MM-DD`)
    pub date_from: Option<String>,

    /// End date (inclusive, `YYYY-MM-DD`)
    pub date_to: Option<String>,

    /// Case-insensitive keyword over emotion and narrative fields
    pub keyword: Option<String>,

    /// Tags; holding any one of them qualifies an entry
    pub tags: Vec<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add tags from a comma-separated list, ignoring blanks.
    pub fn tags_from_list(mut self, list: &str) -> Self {
        self.tags.extend(
            list.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(String::from),
        );
        self
    }

    /// Whether one entry passes the filter.
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(ref from) = self.date_from {
            if date_part(&entry.date) < from.as_str() {
                return false;
            }
        }
        if let Some(ref to) = self.date_to {
            if date_part(&entry.date) > to.as_str() {
                return false;
            }
        }
        if let Some(ref keyword) = self.keyword {
            if !keyword.is_empty() {
                let haystack = entry.searchable_text().to_lowercase();
                if !haystack.contains(&keyword.to_lowercase()) {
                    return false;
                }
            }
        }
        if !self.tags.is_empty() {
            let any = self
                .tags
                .iter()
                .any(|wanted| entry.all_tags().any(|held| held == wanted.as_str()));
            if !any {
                return false;
            }
        }
        true
    }

    /// Filter and order a snapshot: most recent first by the timestamp
    /// string, ties keeping their original relative order.
    pub fn apply(&self, entries: &[Entry]) -> Vec<Entry> {
        let mut matched: Vec<Entry> = entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

/// The `YYYY-MM-DD` prefix of a timestamp string; shorter strings
/// compare whole.
fn date_part(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, emotion: &str) -> Entry {
        Entry::new(date).with_emotion(emotion)
    }

    #[test]
    fn test_empty_filter_orders_descending() {
        let entries = vec![
            entry("2024-01-01T10:00", "calm"),
            entry("2024-01-02T08:00", "happy"),
        ];
        let result = EntryFilter::new().apply(&entries);
        assert_eq!(result[0].date, "2024-01-02T08:00");
        assert_eq!(result[1].date, "2024-01-01T10:00");
    }

    #[test]
    fn test_ties_keep_original_order() {
        let first = entry("2024-01-01T09:00", "first");
        let second = entry("2024-01-01T09:00", "second");
        let result = EntryFilter::new().apply(&[first, second]);
        assert_eq!(result[0].emotion, "first");
        assert_eq!(result[1].emotion, "second");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let entries = vec![
            entry("2024-01-03T07:00", "calm"),
            entry("2024-01-01T10:00", "happy"),
            entry("2024-01-02T12:00", "sad"),
        ];
        let filter = EntryFilter::new().date_from("2024-01-02");
        let once = filter.apply(&entries);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_range_inclusive() {
        let entries = vec![
            entry("2024-01-01T09:00", "a"),
            entry("2024-01-02T09:00", "b"),
            entry("2024-01-03T09:00", "c"),
        ];
        let filter = EntryFilter::new()
            .date_from("2024-01-01")
            .date_to("2024-01-02");
        let result = filter.apply(&entries);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_keyword_case_insensitive_across_fields() {
        let mut e = entry("2024-01-01T09:00", "Anxious");
        e.therapy_prep = "bring up the Deadline".to_string();
        let entries = vec![e, entry("2024-01-02T09:00", "calm")];

        assert_eq!(EntryFilter::new().keyword("anxious").apply(&entries).len(), 1);
        assert_eq!(EntryFilter::new().keyword("DEADLINE").apply(&entries).len(), 1);
        assert_eq!(EntryFilter::new().keyword("absent").apply(&entries).len(), 0);
    }

    #[test]
    fn test_tags_match_any_across_sets() {
        let mut a = entry("2024-01-01T09:00", "a");
        a.location_tags.insert("home");
        let mut b = entry("2024-01-02T09:00", "b");
        b.other_tags.insert("work");
        let entries = vec![a, b];

        let filter = EntryFilter::new().tags_from_list("home, work");
        assert_eq!(filter.apply(&entries).len(), 2);

        let filter = EntryFilter::new().tag("home");
        let result = filter.apply(&entries);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].emotion, "a");
    }

    #[test]
    fn test_tags_from_list_ignores_blanks() {
        let filter = EntryFilter::new().tags_from_list(" home ,, work ,");
        assert_eq!(filter.tags, vec!["home".to_string(), "work".to_string()]);
    }

    #[test]
    fn test_short_date_compares_whole() {
        let entries = vec![entry("2024-01", "stub")];
        // Nothing to slice at ten characters; the whole string compares.
        let result = EntryFilter::new().date_from("2024-01-01").apply(&entries);
        assert!(result.is_empty());
    }
}
