//! Web Tokens library.
//!
//! Provides stateless, self-contained HMAC-SHA512 signed access tokens and
//! opaque hashed refresh tokens. Every operation is a pure function of the
//! secret key, the input, and the system clock; there is no session storage,
//! revocation list, or key rotation here. Framework integration (header
//! extraction, route protection) lives with the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod access;
pub mod compare;
pub mod config;
pub mod error;
pub mod keys;
pub mod refresh;
pub mod service;

// Re-exports for convenience
pub use access::{DecodedToken, TokenHeader};
pub use config::Config;
pub use error::TokenError;
pub use keys::SecretKey;
pub use refresh::IssuedRefreshToken;
pub use service::TokenService;
