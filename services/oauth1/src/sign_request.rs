//! Orchestration of one signing pass.
use std::sync::Arc;

use log::debug;
use oauthsign_core::time::format_unix_timestamp;
use oauthsign_core::Result;

use crate::authorization::compose;
use crate::base_string::{base_string, Parameters};
use crate::clock::{Clock, SystemClock};
use crate::constants::*;
use crate::context::SigningContext;
use crate::header::HeaderCollection;
use crate::method::RequestMethod;
use crate::nonce::{NonceGenerator, NonceSource};
use crate::signature::sign;

/// RequestSigner produces the `Authorization` header for outgoing requests.
///
/// Every call works on its own copy of the context's headers, so a signer
/// can be shared between requests without any locking.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    ctx: SigningContext,
    clock: Arc<dyn Clock>,
    nonce: Arc<dyn NonceSource>,
}

impl RequestSigner {
    /// Create a signer using the system clock and a CSPRNG nonce.
    pub fn new(ctx: SigningContext) -> Self {
        Self {
            ctx,
            clock: Arc::new(SystemClock),
            nonce: Arc::new(NonceGenerator),
        }
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the nonce source.
    pub fn with_nonce_source(mut self, nonce: impl NonceSource) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// The signing context.
    pub fn context(&self) -> &SigningContext {
        &self.ctx
    }

    /// Sign a request.
    ///
    /// `base_uri` is the request url without query string.
    pub fn sign(
        &self,
        method: RequestMethod,
        base_uri: &str,
        params: &Parameters,
    ) -> SignedRequest {
        let timestamp = format_unix_timestamp(self.clock.now());
        let nonce = self.nonce.generate();

        let mut headers = self.ctx.headers().clone();
        headers.set_header(OAUTH_TIMESTAMP, timestamp.as_str(), true);
        headers.set_header(OAUTH_NONCE, nonce.as_str(), true);

        let base_string = base_string(method, base_uri, &headers, params);
        let signature = sign(
            &base_string,
            &self.ctx.consumer().secret,
            self.ctx.token_secret(),
        );
        let authorization = compose(&headers, &signature);
        debug!("signed {method} {base_uri} at {timestamp}");

        SignedRequest {
            method,
            timestamp,
            nonce,
            headers,
            base_string,
            signature,
            authorization,
        }
    }

    /// Produce the full `Authorization: OAuth ...` header line.
    ///
    /// An unsupported method is rejected before any signing work.
    pub fn authorization_header(
        &self,
        method: &str,
        base_uri: &str,
        params: &Parameters,
    ) -> Result<String> {
        let method: RequestMethod = method.parse()?;
        Ok(self.sign(method, base_uri, params).authorization)
    }
}

/// SignedRequest is the outcome of one signing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP method the request was signed for.
    pub method: RequestMethod,
    /// `oauth_timestamp` used.
    pub timestamp: String,
    /// `oauth_nonce` used.
    pub nonce: String,
    /// Protocol headers including timestamp and nonce.
    pub headers: HeaderCollection,
    /// The signature base string.
    pub base_string: String,
    /// Base64 encoded HMAC-SHA1 signature, not percent encoded.
    pub signature: String,
    /// Full header line: `Authorization: OAuth ...`.
    pub authorization: String,
}

impl SignedRequest {
    /// The header value, without the `Authorization: ` prefix.
    pub fn authorization_value(&self) -> &str {
        self.authorization
            .strip_prefix(AUTHORIZATION_PREFIX)
            .unwrap_or(&self.authorization)
    }
}
