//! OAuth 1.0 request signing with HMAC-SHA1.
//!
//! ## Example
//!
//! ```
//! use oauthsign_oauth1::{Parameters, RequestMethod, RequestSigner, SigningContext};
//!
//! # fn main() -> oauthsign_core::Result<()> {
//! let ctx = SigningContext::builder()
//!     .consumer_key("dpf43f3p2l4k3l03")
//!     .consumer_secret("kd94hf93k423kf44")
//!     .token("nnch734d00sl2jdk")
//!     .token_secret("pfkkdhi9sl3r4s00")
//!     .build()?;
//!
//! let signer = RequestSigner::new(ctx);
//! let params = Parameters::from([("file".to_string(), "vacation.jpg".to_string())]);
//! let signed = signer.sign(RequestMethod::Get, "http://photos.example.net/photos", &params);
//! assert!(signed.authorization.starts_with("Authorization: OAuth "));
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{percent_encode, OAUTH_ENCODE_SET};

mod authorization;
pub use authorization::{compose, compose_value};

mod base_string;
pub use base_string::{base_string, Parameters};

mod client;
pub use client::{base_uri, resolve_url, Client};

mod clock;
pub use clock::{Clock, FixedClock, SystemClock};

mod config;
pub use config::Config;

mod context;
pub use context::{SigningContext, SigningContextBuilder};

mod credential;
pub use credential::{ConsumerCredential, TokenCredential};

mod header;
pub use header::{HeaderCollection, HeaderValue};

mod method;
pub use method::RequestMethod;

mod nonce;
pub use nonce::{FixedNonce, NonceGenerator, NonceSource, NONCE_LENGTH};

mod sign_request;
pub use sign_request::{RequestSigner, SignedRequest};

mod signature;
pub use signature::{sign, signing_key};
