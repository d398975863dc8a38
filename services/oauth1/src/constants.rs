use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Protocol headers used in oauth 1.0.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";

pub const OAUTH_VERSION_1_0: &str = "1.0";
pub const HMAC_SHA1: &str = "HMAC-SHA1";

// Delimiters of the parameter block, emitted already percent encoded.
pub const ENCODED_EQUALS: &str = "%3D";
pub const ENCODED_AMPERSAND: &str = "%26";

pub const AUTHORIZATION_PREFIX: &str = "Authorization: ";
pub const FORMAT_PLACEHOLDER: &str = "%format%";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Env values used in oauth 1.0 signing.
pub const ENV_CONSUMER_KEY: &str = "OAUTH_CONSUMER_KEY";
pub const ENV_CONSUMER_SECRET: &str = "OAUTH_CONSUMER_SECRET";
pub const ENV_TOKEN: &str = "OAUTH_TOKEN";
pub const ENV_TOKEN_SECRET: &str = "OAUTH_TOKEN_SECRET";
pub const ENV_REQUEST_URL: &str = "OAUTH_REQUEST_URL";
pub const ENV_FORMAT: &str = "OAUTH_FORMAT";
pub const ENV_HTTP_METHOD: &str = "OAUTH_HTTP_METHOD";

/// AsciiSet for [RFC 3986 percent encoding](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent encode input with [`OAUTH_ENCODE_SET`].
pub fn percent_encode(input: &str) -> String {
    percent_encoding::utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}
