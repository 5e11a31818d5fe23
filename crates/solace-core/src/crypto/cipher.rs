//! Keystream XOR transform with a base64 envelope.
//!
//! `open(seal(p, pin), pin) == p` for every plaintext and PIN. The
//! transform is byte-oriented over the plaintext's UTF-8 form; the
//! persisted payloads are JSON, so the bytes on the wire stay ASCII
//! unless an entry carries non-ASCII text, which masks and unmasks the
//! same way.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use super::digest::pin_digest;

/// Encode plaintext under a PIN-derived keystream.
///
/// Empty plaintext maps to the empty token.
pub fn seal(plaintext: &str, pin: &str) -> String {
    if plaintext.is_empty() {
        return String::new();
    }
    let keystream = Zeroizing::new(pin_digest(pin).into_bytes());
    let masked: Vec<u8> = plaintext
        .as_bytes()
        .iter()
        .enumerate()
        .map(|(i, &byte)| byte ^ keystream[i % keystream.len()])
        .collect();
    STANDARD.encode(masked)
}

/// Decode a token under a PIN-derived keystream.
///
/// Fails softly: an empty token, malformed base64, or unmasked bytes
/// that are not UTF-8 all yield the empty string. A wrong PIN instead
/// yields garbage text; callers detect it by failing to parse the
/// result, the same as for corrupted data.
pub fn open(token: &str, pin: &str) -> String {
    if token.is_empty() {
        return String::new();
    }
    let mut masked = match STANDARD.decode(token) {
        Ok(bytes) => bytes,
        Err(_) => return String::new(),
    };
    let keystream = Zeroizing::new(pin_digest(pin).into_bytes());
    for (i, byte) in masked.iter_mut().enumerate() {
        *byte ^= keystream[i % keystream.len()];
    }
    String::from_utf8(masked).unwrap_or_default()
}
