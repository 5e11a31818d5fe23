//! # Solace Core
//!
//! Core library for Solace - a PIN-gated, encrypted, offline personal journal.
//!
//! This crate provides the credential-gated storage subsystem independent
//! of any user interface:
//!
//! - **credential**: PIN digest storage, verification, rotation, hints
//! - **crypto**: PIN-keyed masking cipher for the persisted blob
//! - **session**: unlocked-session lifecycle and idle timeout
//! - **journal**: the controller owning entries and persistence
//! - **query**: date/keyword/tag filtering over entry snapshots
//! - **snapshot**: plaintext backup and restore
//! - **export**: JSON and CSV projections
//! - **entry**, **tags**: the entry data model and tag sets
//! - **storage**: slot store trait and implementations
//! - **location**: opaque geolocation boundary

pub mod credential;
pub mod crypto;
pub mod entry;
pub mod error;
pub mod export;
pub mod journal;
pub mod location;
pub mod query;
pub mod session;
pub mod snapshot;
pub mod storage;
pub mod tags;

pub use entry::Entry;
pub use error::{JournalError, Result};
pub use export::ExportFormat;
pub use journal::Journal;
pub use query::EntryFilter;
pub use session::{IdleWatcher, SessionMonitor, IDLE_LIMIT, IDLE_POLL_INTERVAL};
pub use snapshot::Snapshot;
pub use storage::{FileSlotStore, MemorySlotStore, SlotStore};
pub use tags::TagSet;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
