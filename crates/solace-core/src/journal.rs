//! The journal controller.
//!
//! `Journal` is the explicit context object that owns the slot store,
//! the optional unlocked session, and the in-memory entry collection;
//! every operation goes through it rather than process-wide state.
//!
//! Control flow: credentials gate access; a successful unlock decrypts
//! the persisted blob into memory; every mutation re-seals and rewrites
//! the blob synchronously (there is no write-behind, so a crash between
//! mutation and persist loses that one mutation but never corrupts prior
//! state); the idle check clears the session and the entries; queries
//! read and never mutate.

use std::time::Instant;

use zeroize::Zeroizing;

use crate::credential;
use crate::crypto;
use crate::entry::{self, Entry};
use crate::error::{JournalError, Result};
use crate::export::{self, ExportFormat};
use crate::location::{Coordinates, LocationCapture, LocationTicket};
use crate::query::EntryFilter;
use crate::session::Session;
use crate::snapshot::Snapshot;
use crate::storage::SlotStore;
use crate::tags::{self, TagSet};

/// Preset note text for quick mood entries.
const QUICK_ENTRY_NOTE: &str = "Quick mood entry";

/// Tag marking an entry as created through the quick flow.
const QUICK_ENTRY_TAG: &str = "quick-entry";

/// A PIN-gated journal over a slot store.
pub struct Journal<S: SlotStore> {
    store: S,
    session: Option<Session>,
    entries: Vec<Entry>,
    location_suggestions: Vec<String>,
    common_suggestions: Vec<String>,
    quick_capture: LocationCapture,
    pending_quick_location: Option<Coordinates>,
}

impl<S: SlotStore> Journal<S> {
    /// Wrap a slot store in a locked journal.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
            entries: Vec::new(),
            location_suggestions: tags::DEFAULT_LOCATION_SUGGESTIONS
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            common_suggestions: tags::DEFAULT_COMMON_SUGGESTIONS
                .iter()
                .map(|tag| tag.to_string())
                .collect(),
            quick_capture: LocationCapture::new(),
            pending_quick_location: None,
        }
    }

    /// Consume the journal and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- Credentials ---

    /// Whether first-run setup has happened.
    pub fn is_initialized(&self) -> Result<bool> {
        credential::is_initialized(&self.store)
    }

    /// First-run setup. Doubles as the first login: on success the
    /// journal is unlocked with an empty entry collection.
    pub fn initialize(&mut self, pin: &str, hint: Option<&str>) -> Result<()> {
        if pin.is_empty() {
            return Err(JournalError::InvalidInput(
                "PIN cannot be empty".to_string(),
            ));
        }
        let digest = credential::write_digest(&mut self.store, pin)?;
        credential::write_hint(&mut self.store, hint)?;
        self.session = Some(Session::new(pin, digest));
        self.load_entries();
        Ok(())
    }

    /// Check a PIN against the stored digest. Never errors; fails closed
    /// when no credential record exists.
    pub fn verify(&self, pin: &str) -> bool {
        credential::verify(&self.store, pin)
    }

    /// Verify a PIN and, on success, decrypt the persisted blob into the
    /// entry collection. Any decode or parse failure loads as empty: a
    /// missing or unreadable blob is indistinguishable from "no entries
    /// yet".
    pub fn unlock(&mut self, pin: &str) -> bool {
        if !self.verify(pin) {
            return false;
        }
        self.session = Some(Session::new(pin, crypto::pin_digest(pin)));
        self.load_entries();
        true
    }

    /// Drop the session and the in-memory entries.
    pub fn lock(&mut self) {
        self.session = None;
        self.entries.clear();
        self.quick_capture.invalidate();
        self.pending_quick_location = None;
    }

    pub fn is_unlocked(&self) -> bool {
        self.session.is_some()
    }

    /// The persisted hint, readable while locked. There is no recovery
    /// path for a forgotten PIN.
    pub fn hint(&self) -> Option<String> {
        credential::hint(&self.store).ok().flatten()
    }

    /// Rotate the PIN, re-sealing the entry blob under the new one.
    ///
    /// The new ciphertext, digest, and hint are all written before this
    /// returns, so no caller observes a mixed state; the session
    /// continues under the new PIN.
    pub fn rotate_pin(
        &mut self,
        old_pin: &str,
        new_pin: &str,
        new_hint: Option<&str>,
    ) -> Result<()> {
        if new_pin.is_empty() {
            return Err(JournalError::InvalidInput(
                "New PIN cannot be empty".to_string(),
            ));
        }
        match self.session.as_ref() {
            None => return Err(JournalError::Locked),
            Some(session) if crypto::pin_digest(old_pin) != session.digest() => {
                return Err(JournalError::Unauthorized)
            }
            Some(_) => {}
        }

        let plaintext = serialize_entries(&self.entries)?;
        let sealed = crypto::seal(&plaintext, new_pin);
        self.store.set(credential::DATA_SLOT, &sealed)?;
        let digest = credential::write_digest(&mut self.store, new_pin)?;
        credential::write_hint(&mut self.store, new_hint)?;
        if let Some(session) = self.session.as_mut() {
            session.rekey(new_pin, digest);
        }
        Ok(())
    }

    // --- Entries ---

    /// Read-only view of the current entries (empty while locked).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.entry(id).is_some()
    }

    /// Append a new entry and persist. The id is freshly assigned here;
    /// whatever the draft carried is discarded.
    pub fn create(&mut self, mut entry: Entry) -> Result<String> {
        self.require_unlocked()?;
        entry.id = entry::fresh_id();
        let id = entry.id.clone();
        self.entries.push(entry);
        self.persist()?;
        Ok(id)
    }

    /// Quick mood entry: minimal fields, time-of-day tag, quick-entry
    /// tag, and any still-current pending location capture.
    pub fn quick_entry(&mut self, emotion_label: impl Into<String>) -> Result<String> {
        self.require_unlocked()?;
        let mut entry = Entry::now()
            .with_emotion(emotion_label)
            .with_therapy_prep(QUICK_ENTRY_NOTE);
        entry.time_tags.insert(tags::time_of_day_tag(entry::current_hour()));
        entry.other_tags.insert(QUICK_ENTRY_TAG);
        if let Some(position) = self.pending_quick_location.take() {
            entry.lat = Some(position.lat);
            entry.lng = Some(position.lng);
            entry.location_tags.insert(tags::location_tag(position.lat));
        }
        // The entry is saved now; a position arriving late must not
        // attach to it retroactively.
        self.quick_capture.invalidate();
        self.create(entry)
    }

    /// Replace an entry wholesale, keyed by id. Returns `false` and
    /// writes nothing when the id is unknown; callers that need to
    /// distinguish create-from-update should check [`Journal::exists`].
    pub fn replace(&mut self, id: &str, mut entry: Entry) -> Result<bool> {
        self.require_unlocked()?;
        let Some(slot) = self.entries.iter_mut().find(|held| held.id == id) else {
            return Ok(false);
        };
        entry.id = id.to_string();
        *slot = entry;
        self.persist()?;
        Ok(true)
    }

    /// Duplicate an existing entry under a fresh id and timestamp.
    /// Returns the new id, or `None` when the source id is unknown.
    pub fn duplicate(&mut self, id: &str) -> Result<Option<String>> {
        self.require_unlocked()?;
        let Some(copy) = self.entry(id).map(Entry::duplicate_as_new) else {
            return Ok(None);
        };
        self.create(copy).map(Some)
    }

    /// Evaluate a filter against the current entries.
    pub fn filter(&self, filter: &EntryFilter) -> Vec<Entry> {
        filter.apply(&self.entries)
    }

    // --- Activity / idle ---

    /// Record a user-observable interaction.
    pub fn record_activity(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.monitor_mut().record_activity();
        }
    }

    /// Run the idle check against the current clock. Returns whether it
    /// forced a lock.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Idle check with an explicit clock, for schedulers and tests.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let expired = self
            .session
            .as_ref()
            .map(|session| session.monitor().is_expired_at(now))
            .unwrap_or(false);
        if expired {
            self.lock();
        }
        expired
    }

    // --- Quick-entry location capture ---

    /// Begin a location capture for the next quick entry. Only the
    /// ticket returned by the most recent call may deliver a result.
    pub fn begin_quick_capture(&mut self) -> LocationTicket {
        self.pending_quick_location = None;
        self.quick_capture.begin()
    }

    /// Deliver a captured position. Stale tickets are discarded; returns
    /// whether the position was accepted.
    pub fn deliver_quick_capture(
        &mut self,
        ticket: LocationTicket,
        position: Coordinates,
    ) -> bool {
        if !self.quick_capture.accepts(ticket) {
            return false;
        }
        self.pending_quick_location = Some(position);
        true
    }

    // --- Tag suggestions ---

    pub fn location_suggestions(&self) -> &[String] {
        &self.location_suggestions
    }

    pub fn common_suggestions(&self) -> &[String] {
        &self.common_suggestions
    }

    pub fn add_location_suggestion(&mut self, tag: impl Into<String>) {
        push_unique(&mut self.location_suggestions, tag.into());
    }

    pub fn add_common_suggestion(&mut self, tag: impl Into<String>) {
        push_unique(&mut self.common_suggestions, tag.into());
    }

    pub fn suggest_location_tags(&self, input: &str, existing: &TagSet) -> Vec<&str> {
        tags::suggest_tags(input, existing, &self.location_suggestions)
    }

    pub fn suggest_common_tags(&self, input: &str, existing: &TagSet) -> Vec<&str> {
        tags::suggest_tags(input, existing, &self.common_suggestions)
    }

    // --- Backup / restore / export ---

    /// Assemble a plaintext snapshot of the unlocked state. The result
    /// is NOT encrypted; it is meant to leave the device.
    pub fn backup(&self) -> Result<Snapshot> {
        self.require_unlocked()?;
        Ok(Snapshot {
            entries: Some(self.entries.clone()),
            location_auto_tags: Some(self.location_suggestions.clone()),
            common_tags: Some(self.common_suggestions.clone()),
            pin_hint: Some(self.hint().unwrap_or_default()),
        })
    }

    /// Apply a snapshot: entries and suggestion lists are replaced
    /// wholesale when present; a present hint replaces the stored one
    /// (empty clears it). Re-persists under the session PIN so the disk
    /// immediately matches.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        self.require_unlocked()?;
        let Snapshot {
            entries,
            location_auto_tags,
            common_tags,
            pin_hint,
        } = snapshot;
        if let Some(entries) = entries {
            self.entries = entries;
        }
        if let Some(list) = location_auto_tags {
            self.location_suggestions = list;
        }
        if let Some(list) = common_tags {
            self.common_suggestions = list;
        }
        if let Some(hint) = pin_hint {
            credential::write_hint(&mut self.store, Some(&hint))?;
        }
        self.persist()
    }

    /// Date-ranged, read-only projection of the entries.
    pub fn export(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        format: ExportFormat,
    ) -> Result<String> {
        self.require_unlocked()?;
        export::export_entries(&self.entries, from, to, format)
    }

    // --- Internals ---

    fn require_unlocked(&self) -> Result<()> {
        if self.session.is_some() {
            Ok(())
        } else {
            Err(JournalError::Locked)
        }
    }

    /// Decrypt and parse the persisted blob into the entry collection.
    /// Missing blob, decode failure, and parse failure all load as
    /// empty.
    fn load_entries(&mut self) {
        self.entries.clear();
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let token = match self.store.get(credential::DATA_SLOT) {
            Ok(Some(token)) => token,
            _ => return,
        };
        let plaintext = Zeroizing::new(crypto::open(&token, session.pin()));
        if plaintext.is_empty() {
            return;
        }
        self.entries = serde_json::from_str(&plaintext).unwrap_or_default();
    }

    /// Seal the full entry array under the session PIN and overwrite the
    /// persisted slot. Runs synchronously after every mutation.
    fn persist(&mut self) -> Result<()> {
        let pin = Zeroizing::new(
            self.session
                .as_ref()
                .ok_or(JournalError::Locked)?
                .pin()
                .to_string(),
        );
        let plaintext = serialize_entries(&self.entries)?;
        let sealed = crypto::seal(&plaintext, &pin);
        self.store.set(credential::DATA_SLOT, &sealed)
    }
}

fn serialize_entries(entries: &[Entry]) -> Result<String> {
    serde_json::to_string(entries)
        .map_err(|e| JournalError::Storage(format!("Failed to serialize entries: {}", e)))
}

fn push_unique(list: &mut Vec<String>, tag: String) {
    let tag = tag.trim().to_string();
    if tag.is_empty() || list.contains(&tag) {
        return;
    }
    list.push(tag);
}
