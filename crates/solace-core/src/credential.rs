//! Credential record persistence.
//!
//! The slot names are the wire contract for the on-disk format; renaming
//! any of them orphans existing journals. A credential record exists iff
//! the digest slot is present, and its absence routes the caller to
//! first-run setup instead of login. There is deliberately no recovery
//! path for a forgotten PIN, only the plaintext hint.

use crate::crypto::pin_digest;
use crate::error::Result;
use crate::storage::SlotStore;

/// Slot holding the PIN digest.
pub const PIN_DIGEST_SLOT: &str = "journal_pin_hash";

/// Slot holding the optional plaintext hint.
pub const PIN_HINT_SLOT: &str = "journal_pin_hint";

/// Slot holding the sealed entry array.
pub const DATA_SLOT: &str = "secure_journal_data_v2";

/// Whether a credential record exists.
pub fn is_initialized<S: SlotStore>(store: &S) -> Result<bool> {
    Ok(store.get(PIN_DIGEST_SLOT)?.is_some())
}

/// Derive and persist the digest for a PIN, returning the digest.
pub fn write_digest<S: SlotStore>(store: &mut S, pin: &str) -> Result<String> {
    let digest = pin_digest(pin);
    store.set(PIN_DIGEST_SLOT, &digest)?;
    Ok(digest)
}

/// Check a PIN against the stored digest.
///
/// Never errors: a missing credential record or an unreadable store
/// verifies as `false` (fail closed).
pub fn verify<S: SlotStore>(store: &S, pin: &str) -> bool {
    match store.get(PIN_DIGEST_SLOT) {
        Ok(Some(stored)) => pin_digest(pin) == stored,
        _ => false,
    }
}

/// The persisted hint, if any. Readable without a session; the lock
/// screen shows it on request.
pub fn hint<S: SlotStore>(store: &S) -> Result<Option<String>> {
    store.get(PIN_HINT_SLOT)
}

/// Persist or clear the hint. `None` and the empty string both clear,
/// so a restore carrying `""` removes a stale hint.
pub fn write_hint<S: SlotStore>(store: &mut S, hint: Option<&str>) -> Result<()> {
    match hint {
        Some(value) if !value.is_empty() => store.set(PIN_HINT_SLOT, value),
        _ => store.remove(PIN_HINT_SLOT),
    }
}
