//! Constant-time equality for derived keys.
//!
//! Wraps `subtle::ConstantTimeEq` with an explicit length check: buffers of
//! unequal length are a non-match at fixed cost, and for equal lengths the
//! comparison time does not depend on where (or whether) the inputs differ.

use subtle::ConstantTimeEq;

/// Length-checked constant-time comparison. Fails closed — unequal lengths
/// are rejected immediately, without per-byte work.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
