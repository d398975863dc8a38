//! Signature base string construction.
use std::borrow::Cow;
use std::collections::BTreeMap;

use log::debug;

use crate::constants::*;
use crate::header::HeaderCollection;
use crate::method::RequestMethod;

/// Request parameters of the request being signed: form or query pairs.
pub type Parameters = BTreeMap<String, String>;

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// METHOD + "&" + percent_encode(base_uri) + "&" +
///     percent_encode(k1) + "%3D" + percent_encode(v1) + "%26" + ...
/// ```
///
/// Request parameter values are percent encoded once before merging with the
/// protocol headers and once more while emitting pairs. Pairs are ordered by
/// key, then by value for keys carrying several values. A request parameter
/// named like a protocol header joins that header's values.
///
/// ## Reference
///
/// - [Signature Base String](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)
pub fn base_string(
    method: RequestMethod,
    base_uri: &str,
    headers: &HeaderCollection,
    params: &Parameters,
) -> String {
    let mut combined: BTreeMap<&str, Vec<Cow<str>>> = BTreeMap::new();
    for (name, values) in headers.sorted_view() {
        combined
            .entry(name)
            .or_default()
            .extend(values.into_iter().map(Cow::Borrowed));
    }
    for (key, value) in params {
        combined
            .entry(key.as_str())
            .or_default()
            .push(Cow::Owned(percent_encode(value)));
    }

    let mut pairs = Vec::with_capacity(combined.len());
    for (key, mut values) in combined {
        values.sort_unstable();

        let key = percent_encode(key);
        for value in values {
            pairs.push(format!("{key}{ENCODED_EQUALS}{}", percent_encode(&value)));
        }
    }

    let s = format!(
        "{}&{}&{}",
        method,
        percent_encode(base_uri),
        pairs.join(ENCODED_AMPERSAND)
    );

    debug!("signature base string: {}", &s);
    s
}
