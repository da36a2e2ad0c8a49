//! Refresh token generation and hash verification.

use crate::access::codec::{decode_segment, encode_segment};
use crate::compare::constant_time_eq;
use rand::RngCore;
use sha2::{Digest, Sha512};

/// Raw entropy per refresh token: 64 bytes (512 bits).
pub const REFRESH_TOKEN_LEN: usize = 64;

/// A freshly issued refresh token and its persistable hash.
///
/// The caller hands `token` to the client and stores only `hash`.
#[derive(Debug, Clone)]
pub struct IssuedRefreshToken {
    /// The bearer secret: base64url of 64 random bytes (86 characters).
    pub token: String,
    /// base64url(SHA-512(token)); safe to persist.
    pub hash: String,
}

/// Generates and verifies refresh tokens.
pub struct RefreshTokenGenerator;

impl RefreshTokenGenerator {
    /// Generate a refresh token together with its hash.
    #[must_use]
    pub fn generate() -> IssuedRefreshToken {
        let mut random_bytes = [0u8; REFRESH_TOKEN_LEN];
        rand::thread_rng().fill_bytes(&mut random_bytes);
        let token = encode_segment(&random_bytes);
        let hash = Self::hash(&token);
        IssuedRefreshToken { token, hash }
    }

    /// Hash a refresh token: base64url(SHA-512(token string)).
    #[must_use]
    pub fn hash(token: &str) -> String {
        let mut hasher = Sha512::new();
        hasher.update(token.as_bytes());
        encode_segment(hasher.finalize().as_slice())
    }

    /// Check a presented token against a stored hash.
    ///
    /// Recomputes the digest of the presented token and compares it against
    /// the decoded stored hash in constant time, after an explicit length
    /// check. A stored hash that is not valid base64url fails closed.
    #[must_use]
    pub fn verify(stored_hash: &str, presented_token: &str) -> bool {
        let Some(stored_digest) = decode_segment(stored_hash) else {
            return false;
        };

        let mut hasher = Sha512::new();
        hasher.update(presented_token.as_bytes());
        let presented_digest = hasher.finalize();

        constant_time_eq(presented_digest.as_slice(), &stored_digest)
    }
}
