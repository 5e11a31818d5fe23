//! Slot store trait definition.
//!
//! The persisted state is a handful of named string slots (digest, hint,
//! sealed entry blob). The `SlotStore` trait is the seam that lets the
//! journal run over a file on disk, an in-memory map in tests, or any
//! other key/value backend without changing the core logic.

use crate::error::Result;

/// Key/value persistence for the journal's named slots.
///
/// All implementations must ensure:
/// - Slots are read and written as whole values, never patched in place
/// - A write that returns `Ok` is durable as far as the backend can tell
/// - Removing an absent slot is not an error
///
/// The trait requires `Send` so a background idle watcher can share the
/// journal across threads.
pub trait SlotStore: Send {
    /// Read a slot, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot.
    fn remove(&mut self, key: &str) -> Result<()>;
}
