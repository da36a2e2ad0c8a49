//! Access token header.

use serde::{Deserialize, Serialize};

/// Timing claims carried by every access token.
///
/// Both fields are integer milliseconds since the Unix epoch, serialized on
/// the wire as `{"iat":…,"exp":…}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Issued-at, milliseconds since epoch.
    pub iat: i64,
    /// Expires-at, milliseconds since epoch.
    pub exp: i64,
}

impl TokenHeader {
    /// Build a header for a token issued at `now_ms` with the given lifetime.
    #[must_use]
    pub fn new(now_ms: i64, ttl_ms: i64) -> Self {
        TokenHeader {
            iat: now_ms,
            exp: now_ms + ttl_ms,
        }
    }

    /// Whether the token is expired at `now_ms`, given a skew tolerance.
    ///
    /// The tolerance is additive to the expiry check only: the token is
    /// expired iff `now_ms - skew_ms > exp`. Issuance time is never adjusted.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64, skew_ms: i64) -> bool {
        now_ms - skew_ms > self.exp
    }
}
