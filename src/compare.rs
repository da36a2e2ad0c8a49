//! Constant-time byte comparison.
//!
//! Uses `subtle::ConstantTimeEq` to prevent timing attacks. Both the access
//! token MAC check and the refresh token hash check go through this helper.

use subtle::ConstantTimeEq;

/// Compares two byte slices in constant time.
///
/// Lengths are checked first: mismatched-length inputs return `false` without
/// attempting the byte compare (this leaks length but that's acceptable; MAC
/// and digest lengths are fixed and public anyway).
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}
