//! PIN digest derivation.
//!
//! The digest is a 32-bit shift/subtract accumulator over the PIN's
//! UTF-16 code units, rendered as lowercase hex and repeated to widen
//! the keystream. It is deterministic and salt-free on purpose: the
//! stream transform must reproduce the exact same keystream for the same
//! PIN across process restarts, or sealed data could never be opened
//! again.

/// Times the hex form is repeated to widen the keystream.
const REPEAT: usize = 5;

/// Derive the digest string for a PIN.
///
/// The same PIN always yields the same digest. Not a cryptographic hash;
/// see the module docs in [`crate::crypto`].
pub fn pin_digest(pin: &str) -> String {
    // The accumulator intentionally lives in an f64: only the shift
    // operand is truncated to 32 bits, while the subtraction and addition
    // run in floating point. Changing this changes every digest on disk.
    let mut acc: f64 = 0.0;
    for unit in pin.encode_utf16() {
        let shifted = to_int32(acc).wrapping_shl(5);
        acc = f64::from(shifted) - acc + f64::from(unit);
    }
    let hex = format!("{:x}", acc.abs() as u128);
    hex.repeat(REPEAT)
}

/// Truncate toward zero, reduce modulo 2^32, and reinterpret as signed.
fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(4_294_967_296.0);
    if wrapped >= 2_147_483_648.0 {
        (wrapped - 4_294_967_296.0) as i32
    } else {
        wrapped as i32
    }
}
