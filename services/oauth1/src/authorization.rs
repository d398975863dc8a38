//! Rendering of the `Authorization` header.
use crate::constants::*;
use crate::header::HeaderCollection;

/// Render the full header line: `Authorization: OAuth k1="v1", k2="v2", ...`.
///
/// Headers follow [`HeaderCollection::sorted_view`] and are emitted as stored.
/// `oauth_signature` is appended last, percent encoded.
pub fn compose(headers: &HeaderCollection, signature: &str) -> String {
    format!("{AUTHORIZATION_PREFIX}{}", compose_value(headers, signature))
}

/// Render the header value only, without the `Authorization: ` prefix.
pub fn compose_value(headers: &HeaderCollection, signature: &str) -> String {
    let mut pairs = Vec::with_capacity(headers.len() + 1);
    for (name, values) in headers.sorted_view() {
        for value in values {
            pairs.push(format!("{name}=\"{value}\""));
        }
    }
    pairs.push(format!(
        "{OAUTH_SIGNATURE}=\"{}\"",
        percent_encode(signature)
    ));

    format!("OAuth {}", pairs.join(", "))
}
