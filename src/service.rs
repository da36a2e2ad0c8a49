//! The token service facade.

use crate::access::codec::{compute_mac, decode_segment, encode_segment, split_token};
use crate::access::{DecodedToken, TokenHeader};
use crate::compare::constant_time_eq;
use crate::config::Config;
use crate::error::TokenError;
use crate::keys::SecretKey;
use crate::refresh::{IssuedRefreshToken, RefreshTokenGenerator};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Stateless issuer and verifier of access and refresh tokens.
///
/// Holds exactly one immutable secret key for its lifetime. Every operation
/// is a pure function of the key, the input, and the system clock, so a
/// service can be shared freely across threads without locking.
pub struct TokenService {
    secret_key: SecretKey,
    access_token_ttl_ms: i64,
    clock_skew_ms: i64,
}

impl TokenService {
    /// Create a service with the default 5-minute token lifetime and
    /// 60-second clock-skew tolerance.
    #[must_use]
    pub fn new(secret_key: SecretKey) -> Self {
        TokenService {
            secret_key,
            access_token_ttl_ms: crate::config::DEFAULT_ACCESS_TOKEN_TTL.as_millis() as i64,
            clock_skew_ms: crate::config::DEFAULT_CLOCK_SKEW.as_millis() as i64,
        }
    }

    /// Create a service from configuration.
    ///
    /// Generates a random 32-byte key when the config supplies none.
    pub fn from_config(config: &Config) -> Result<Self, TokenError> {
        config.validate()?;
        let secret_key = match config.secret_key {
            Some(ref text) => SecretKey::from_text(text),
            None => SecretKey::generate(),
        };
        Ok(TokenService {
            secret_key,
            access_token_ttl_ms: config.access_token_ttl.as_millis() as i64,
            clock_skew_ms: config.clock_skew.as_millis() as i64,
        })
    }

    /// Issue an access token with the service's default lifetime.
    pub fn issue_access_token<T: Serialize>(&self, payload: &T) -> Result<String, TokenError> {
        self.issue_access_token_with_ttl(payload, self.access_token_ttl_ms)
    }

    /// Issue an access token that expires `ttl_ms` milliseconds from now.
    ///
    /// Any JSON-serializable payload is accepted; oversized payloads are the
    /// caller's concern. The only error path is payload serialization.
    pub fn issue_access_token_with_ttl<T: Serialize>(
        &self,
        payload: &T,
        ttl_ms: i64,
    ) -> Result<String, TokenError> {
        self.issue_access_token_at(payload, ttl_ms, now_ms())
    }

    pub(crate) fn issue_access_token_at<T: Serialize>(
        &self,
        payload: &T,
        ttl_ms: i64,
        now_ms: i64,
    ) -> Result<String, TokenError> {
        let header = TokenHeader::new(now_ms, ttl_ms);

        let encoded_header = encode_segment(serde_json::to_vec(&header)?.as_slice());
        let encoded_payload = encode_segment(serde_json::to_vec(payload)?.as_slice());
        let mac = compute_mac(self.secret_key.as_bytes(), &encoded_header, &encoded_payload);

        Ok(format!("{}.{}.{}", encoded_header, encoded_payload, mac))
    }

    /// Decode a token without authenticating it.
    ///
    /// Returns `None` for wrong segment count, invalid base64url, or invalid
    /// JSON; malformed input is a normal outcome, never a panic. Expired
    /// tokens still decode, so their header and payload stay inspectable.
    #[must_use]
    pub fn decode_access_token<T: DeserializeOwned>(&self, token: &str) -> Option<DecodedToken<T>> {
        let (encoded_header, encoded_payload, received_mac) = split_token(token)?;

        let header_bytes = decode_segment(encoded_header)?;
        let payload_bytes = decode_segment(encoded_payload)?;

        let header: TokenHeader = serde_json::from_slice(&header_bytes).ok()?;
        let payload: T = serde_json::from_slice(&payload_bytes).ok()?;

        Some(DecodedToken {
            header,
            payload,
            encoded_header: encoded_header.to_string(),
            encoded_payload: encoded_payload.to_string(),
            received_mac: received_mac.to_string(),
        })
    }

    /// Verify an access token's authenticity and freshness.
    ///
    /// Returns `true` only if the token decodes, is not expired beyond the
    /// skew tolerance (or `allow_expired` is set), and its MAC matches a
    /// recomputation over the received segments, compared in constant time.
    /// No distinction between tampered, wrong-key, and forged is surfaced.
    #[must_use]
    pub fn verify_access_token(&self, token: &str, allow_expired: bool) -> bool {
        self.verify_access_token_at(token, allow_expired, now_ms())
    }

    pub(crate) fn verify_access_token_at(
        &self,
        token: &str,
        allow_expired: bool,
        now_ms: i64,
    ) -> bool {
        let Some(decoded) = self.decode_access_token::<serde_json::Value>(token) else {
            debug!("access token rejected: malformed");
            return false;
        };

        if decoded.header.is_expired_at(now_ms, self.clock_skew_ms) && !allow_expired {
            debug!("access token rejected: expired");
            return false;
        }

        let derived_mac = compute_mac(
            self.secret_key.as_bytes(),
            &decoded.encoded_header,
            &decoded.encoded_payload,
        );

        if !constant_time_eq(derived_mac.as_bytes(), decoded.received_mac.as_bytes()) {
            debug!("access token rejected: bad MAC");
            return false;
        }

        true
    }

    /// Issue a refresh token and its persistable hash.
    ///
    /// The caller hands the token to the client and stores only the hash.
    #[must_use]
    pub fn issue_refresh_token(&self) -> IssuedRefreshToken {
        RefreshTokenGenerator::generate()
    }

    /// Check a presented refresh token against its stored hash.
    ///
    /// Unlike the access-token MAC this does not involve the secret key;
    /// see [`crate::refresh`] for the trust model.
    #[must_use]
    pub fn verify_refresh_token(&self, stored_hash: &str, presented_token: &str) -> bool {
        RefreshTokenGenerator::verify(stored_hash, presented_token)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret_key", &self.secret_key)
            .field("access_token_ttl_ms", &self.access_token_ttl_ms)
            .field("clock_skew_ms", &self.clock_skew_ms)
            .finish()
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
