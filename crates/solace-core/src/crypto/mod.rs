//! Cipher engine for the persisted journal blob.
//!
//! The on-disk format pairs a deterministic PIN digest with a repeating
//! keystream XOR:
//! - **digest**: fixed-form derivation of the PIN, doubling as the
//!   stored verification fingerprint and as the keystream source
//! - **cipher**: plaintext bytes XORed against the cycled digest,
//!   wrapped in a base64 envelope
//!
//! ## Security Model
//!
//! This scheme is masking, not confidentiality. The digest is not a
//! cryptographic hash and the keystream repeats, so the ciphertext is
//! open to known-plaintext and frequency analysis. It keeps a casual
//! reader out of a local file; it does not resist an attacker with the
//! file and any cryptanalysis at all.
//!
//! A wrong PIN is indistinguishable from corrupted data at this layer:
//! both yield bytes that fail a structural parse downstream, and callers
//! must treat that exactly like missing data.

pub mod cipher;
pub mod digest;

pub use cipher::{open, seal};
pub use digest::pin_digest;
