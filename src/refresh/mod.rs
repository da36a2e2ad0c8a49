//! Opaque refresh tokens, verified by hash rather than signature.
//!
//! A refresh token is 64 cryptographically random bytes, base64url-encoded.
//! Only its SHA-512 digest is meant to be persisted; the hash does not
//! involve the secret key, so it proves "same token I issued", not
//! authenticity against someone who can write to the hash store. Protect the
//! store as you would a password hash store.

pub mod generator;

pub use generator::{IssuedRefreshToken, RefreshTokenGenerator};
