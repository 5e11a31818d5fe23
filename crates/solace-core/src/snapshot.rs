//! Plaintext backup snapshots.
//!
//! A snapshot bundles the unlocked state (entries, tag suggestion
//! lists, hint) as clear JSON. It is deliberately NOT encrypted: it is
//! the take-your-data-with-you format and must survive a forgotten PIN.
//! Presentation layers are responsible for saying so loudly.

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::{JournalError, Result};

/// Whole-state backup payload.
///
/// Every field is optional on input and applied independently on
/// restore, so partial snapshots (entries only, tags only) are valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Full entry collection
    pub entries: Option<Vec<Entry>>,

    /// Location tag suggestions
    pub location_auto_tags: Option<Vec<String>>,

    /// Common tag suggestions
    pub common_tags: Option<Vec<String>>,

    /// PIN hint; an empty string clears the stored hint
    pub pin_hint: Option<String>,
}

impl Snapshot {
    /// Parse a snapshot. Malformed input is reported without touching
    /// any journal state; parsing happens before anything is applied.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| JournalError::MalformedSnapshot(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| JournalError::Storage(format!("Failed to serialize snapshot: {}", e)))
    }
}
