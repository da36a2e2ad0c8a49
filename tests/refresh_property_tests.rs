//! Property-based tests for refresh tokens.
//!
//! Issued pairs verify, mutations are rejected, and verification is total
//! over arbitrary stored hashes.

use proptest::prelude::*;
use web_tokens::refresh::RefreshTokenGenerator;
use web_tokens::{SecretKey, TokenService};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A freshly issued pair always verifies; mutating any one character of
    /// the token breaks it.
    #[test]
    fn prop_issued_pair_verifies_and_mutation_fails(index in any::<prop::sample::Index>()) {
        let svc = TokenService::new(SecretKey::from_text("refresh-test-key"));
        let issued = svc.issue_refresh_token();

        prop_assert!(svc.verify_refresh_token(&issued.hash, &issued.token));

        let i = index.index(issued.token.len());
        let mut chars: Vec<char> = issued.token.chars().collect();
        chars[i] = if chars[i] == 'A' { 'B' } else { 'A' };
        let mutated: String = chars.into_iter().collect();

        prop_assert!(!svc.verify_refresh_token(&issued.hash, &mutated));
    }

    /// Verification never panics, whatever the stored hash looks like.
    #[test]
    fn prop_verify_is_total(stored_hash in ".{0,200}", token in ".{0,200}") {
        let svc = TokenService::new(SecretKey::from_text("refresh-test-key"));
        let verified = svc.verify_refresh_token(&stored_hash, &token);

        // The only way to verify is to present the preimage of the hash.
        if verified {
            prop_assert_eq!(RefreshTokenGenerator::hash(&token), stored_hash);
        }
    }

    /// Hashes of distinct tokens are distinct and key-independent.
    #[test]
    fn prop_hash_collision_free_in_practice(t1 in "[A-Za-z0-9_-]{86}", t2 in "[A-Za-z0-9_-]{86}") {
        prop_assume!(t1 != t2);
        prop_assert_ne!(RefreshTokenGenerator::hash(&t1), RefreshTokenGenerator::hash(&t2));

        // Same-length foreign hash never validates another token.
        let h2 = RefreshTokenGenerator::hash(&t2);
        prop_assert!(!RefreshTokenGenerator::verify(&h2, &t1));
    }
}

#[test]
fn test_generated_tokens_are_unique() {
    let svc = TokenService::new(SecretKey::from_text("refresh-test-key"));
    let a = svc.issue_refresh_token();
    let b = svc.issue_refresh_token();
    assert_ne!(a.token, b.token);
    assert_ne!(a.hash, b.hash);
}
