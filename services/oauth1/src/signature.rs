//! HMAC-SHA1 signing of the base string.
use oauthsign_core::hash::base64_hmac_sha1;

use crate::constants::percent_encode;

/// Build the signing key.
///
/// ```text
/// percent_encode(consumer_secret) + "&" + percent_encode(token_secret)
/// ```
///
/// An absent token secret leaves the second component empty; the `&` stays.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    let mut key = percent_encode(consumer_secret);
    key.push('&');
    if let Some(token_secret) = token_secret {
        key.push_str(&percent_encode(token_secret));
    }
    key
}

/// Sign the base string, returning the base64 encoded HMAC-SHA1 digest.
///
/// ## Reference
///
/// - [HMAC-SHA1](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.2)
pub fn sign(base_string: &str, consumer_secret: &str, token_secret: Option<&str>) -> String {
    let key = signing_key(consumer_secret, token_secret);
    base64_hmac_sha1(key.as_bytes(), base_string.as_bytes())
}
