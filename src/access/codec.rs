//! Base64url segment codec and MAC computation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use ring::hmac;

/// Encode bytes as a base64url segment, no padding.
pub(crate) fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a base64url segment. `None` for anything that is not strict
/// unpadded base64url.
pub(crate) fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(segment).ok()
}

/// Split a token into its three segments. `None` unless splitting on `.`
/// yields exactly three parts.
pub(crate) fn split_token(token: &str) -> Option<(&str, &str, &str)> {
    let mut parts = token.split('.');
    let header = parts.next()?;
    let payload = parts.next()?;
    let mac = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((header, payload, mac))
}

/// MAC over the still-encoded segments: base64url(HMAC-SHA512(key, `H.P`)).
pub(crate) fn compute_mac(key: &[u8], encoded_header: &str, encoded_payload: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA512, key);
    let data = format!("{}.{}", encoded_header, encoded_payload);
    let tag = hmac::sign(&key, data.as_bytes());
    encode_segment(tag.as_ref())
}
