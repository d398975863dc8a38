use std::fmt::{Debug, Formatter};

use oauthsign_core::utils::Redact;

/// Consumer credential identifying the registered application.
#[derive(Clone, PartialEq, Eq)]
pub struct ConsumerCredential {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub key: String,
    /// Consumer secret, only used to derive the signing key.
    pub secret: String,
}

impl ConsumerCredential {
    /// Create a new consumer credential.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for ConsumerCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsumerCredential")
            .field("key", &Redact::from(&self.key))
            .field("secret", &Redact::from(&self.secret))
            .finish()
    }
}

/// Token credential authorizing access on behalf of a resource owner.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenCredential {
    /// Token, sent as `oauth_token`.
    pub token: String,
    /// Token secret, absent for some flows.
    pub secret: Option<String>,
}

impl TokenCredential {
    /// Create a new token credential.
    pub fn new(token: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            token: token.into(),
            secret,
        }
    }
}

impl Debug for TokenCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCredential")
            .field("token", &Redact::from(&self.token))
            .field("secret", &self.secret.as_ref().map(Redact::from))
            .finish()
    }
}
