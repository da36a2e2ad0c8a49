//! Decoded access token.

use crate::access::header::TokenHeader;

/// The parts of a structurally valid access token.
///
/// Produced by [`crate::TokenService::decode_access_token`], consumed by
/// verification. Holding the still-encoded segments alongside the parsed
/// values lets the MAC be recomputed over exactly the bytes that were
/// received, not over a re-serialization.
///
/// A decoded token has *not* been authenticated or checked for expiry;
/// its header and payload are inspectable regardless.
#[derive(Debug, Clone)]
pub struct DecodedToken<T> {
    /// Parsed timing header.
    pub header: TokenHeader,
    /// Parsed application payload.
    pub payload: T,
    /// The base64url header segment as received.
    pub encoded_header: String,
    /// The base64url payload segment as received.
    pub encoded_payload: String,
    /// The MAC segment as received.
    pub received_mac: String,
}
