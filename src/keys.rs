//! Secret key material for MAC computation.

use rand::RngCore;
use zeroize::Zeroizing;

/// Recommended length for generated secret keys.
pub const GENERATED_KEY_LEN: usize = 32;

/// Symmetric secret key owned by a [`crate::TokenService`] for its lifetime.
///
/// The bytes are held in zeroizing storage and wiped on drop (best-effort;
/// copies made by the allocator or OS are out of our hands). There is no
/// accessor that returns the key material, and the `Debug` output is
/// redacted.
pub struct SecretKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretKey {
    /// Create a key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        SecretKey {
            bytes: Zeroizing::new(bytes),
        }
    }

    /// Create a key from text, converted to bytes once.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes().to_vec())
    }

    /// Generate a random 32-byte key from the thread-local CSPRNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; GENERATED_KEY_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::from_bytes(bytes)
    }

    /// Key bytes for MAC computation. Crate-internal only.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(redacted)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_length() {
        let key = SecretKey::generate();
        assert_eq!(key.as_bytes().len(), GENERATED_KEY_LEN);
    }

    #[test]
    fn test_generated_keys_differ() {
        let k1 = SecretKey::generate();
        let k2 = SecretKey::generate();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_from_text_matches_bytes() {
        let key = SecretKey::from_text("hunter2");
        assert_eq!(key.as_bytes(), b"hunter2");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::from_text("super-secret");
        let rendered = format!("{:?}", key);
        assert_eq!(rendered, "SecretKey(redacted)");
        assert!(!rendered.contains("super-secret"));
    }
}
