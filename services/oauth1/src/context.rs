use std::fmt::{Debug, Formatter};

use oauthsign_core::utils::Redact;
use oauthsign_core::{Error, Result};

use crate::config::Config;
use crate::constants::*;
use crate::credential::{ConsumerCredential, TokenCredential};
use crate::header::HeaderCollection;

/// SigningContext is the immutable configuration every request is signed with.
///
/// It holds the credentials and the static protocol headers. Per-request
/// values (`oauth_timestamp`, `oauth_nonce`) never land here.
#[derive(Debug, Clone)]
pub struct SigningContext {
    consumer: ConsumerCredential,
    token: Option<TokenCredential>,
    headers: HeaderCollection,
}

impl SigningContext {
    /// Create a builder.
    pub fn builder() -> SigningContextBuilder {
        SigningContextBuilder::default()
    }

    /// Build a signing context from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(v) = &config.consumer_key {
            builder = builder.consumer_key(v);
        }
        if let Some(v) = &config.consumer_secret {
            builder = builder.consumer_secret(v);
        }
        if let Some(v) = &config.token {
            builder = builder.token(v);
        }
        if let Some(v) = &config.token_secret {
            builder = builder.token_secret(v);
        }

        builder.build()
    }

    /// Consumer credential.
    pub fn consumer(&self) -> &ConsumerCredential {
        &self.consumer
    }

    /// Token credential, if any.
    pub fn token(&self) -> Option<&TokenCredential> {
        self.token.as_ref()
    }

    /// Token secret, if any.
    pub fn token_secret(&self) -> Option<&str> {
        self.token.as_ref().and_then(|t| t.secret.as_deref())
    }

    /// Static protocol headers.
    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }
}

/// SigningContextBuilder accumulates configuration for a [`SigningContext`].
#[derive(Clone, Default)]
pub struct SigningContextBuilder {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    token: Option<String>,
    token_secret: Option<String>,
    headers: Vec<(String, String, bool)>,
}

impl SigningContextBuilder {
    /// Set the consumer key, sent as `oauth_consumer_key`.
    pub fn consumer_key(mut self, key: impl Into<String>) -> Self {
        self.consumer_key = Some(key.into());
        self
    }

    /// Set the consumer secret.
    pub fn consumer_secret(mut self, secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(secret.into());
        self
    }

    /// Set the token, sent as `oauth_token`.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the token secret.
    pub fn token_secret(mut self, secret: impl Into<String>) -> Self {
        self.token_secret = Some(secret.into());
        self
    }

    /// Add an extra protocol header.
    ///
    /// Headers are applied in call order with the same semantics as
    /// [`HeaderCollection::set_header`].
    pub fn header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        overwrite: bool,
    ) -> Self {
        self.headers.push((name.into(), value.into(), overwrite));
        self
    }

    /// Build the signing context.
    ///
    /// Fails with [`oauthsign_core::ErrorKind::CredentialInvalid`] if the consumer
    /// key or secret is missing, or a token secret is set without a token.
    pub fn build(self) -> Result<SigningContext> {
        let key = self
            .consumer_key
            .ok_or_else(|| Error::credential_invalid("consumer key is required"))?;
        let secret = self
            .consumer_secret
            .ok_or_else(|| Error::credential_invalid("consumer secret is required for signing"))?;

        let token = match (self.token, self.token_secret) {
            (Some(token), secret) => Some(TokenCredential::new(token, secret)),
            (None, None) => None,
            (None, Some(_)) => {
                return Err(Error::credential_invalid(
                    "token secret is set without a token",
                ))
            }
        };

        let mut headers = HeaderCollection::new();
        headers.set_headers(
            [
                (OAUTH_VERSION, OAUTH_VERSION_1_0),
                (OAUTH_SIGNATURE_METHOD, HMAC_SHA1),
            ],
            true,
        );
        headers.set_header(OAUTH_CONSUMER_KEY, key.as_str(), true);
        if let Some(token) = &token {
            headers.set_header(OAUTH_TOKEN, token.token.as_str(), true);
        }
        for (name, value, overwrite) in self.headers {
            headers.set_header(name, value, overwrite);
        }

        Ok(SigningContext {
            consumer: ConsumerCredential::new(key, secret),
            token,
            headers,
        })
    }
}

impl Debug for SigningContextBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningContextBuilder")
            .field("consumer_key", &self.consumer_key.as_ref().map(Redact::from))
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field("token", &self.token.as_ref().map(Redact::from))
            .field("token_secret", &self.token_secret.as_ref().map(Redact::from))
            .field("headers", &self.headers)
            .finish()
    }
}
