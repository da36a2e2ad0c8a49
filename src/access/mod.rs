//! Access token types and wire codec.
//!
//! An access token is the ASCII string `header.payload.mac`: three
//! dot-separated base64url segments (no padding). Header and payload decode
//! to JSON; the MAC is HMAC-SHA512 over the two still-encoded segments
//! joined by a dot.

pub mod decoded;
pub mod header;

pub(crate) mod codec;

pub use decoded::DecodedToken;
pub use header::TokenHeader;
