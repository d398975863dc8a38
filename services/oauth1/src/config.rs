use std::fmt::{Debug, Formatter};

use oauthsign_core::{utils::Redact, Context};

use crate::constants::*;

/// Config carries all the configuration for signing and sending oauth 1.0 requests.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_TOKEN`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_TOKEN_SECRET`]
    pub token_secret: Option<String>,
    /// `request_url` is the url template requests are sent to, it may
    /// contain a `%format%` placeholder.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_REQUEST_URL`]
    pub request_url: Option<String>,
    /// `format` replaces `%format%` in `request_url`, for example `json`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_FORMAT`]
    pub format: Option<String>,
    /// `method` is the http method, one of `GET`, `POST` or `PUT`.
    /// `GET` will be used if unset.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ENV_HTTP_METHOD`]
    pub method: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Set request_url
    pub fn with_request_url(mut self, request_url: impl Into<String>) -> Self {
        self.request_url = Some(request_url.into());
        self
    }

    /// Set format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set method
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ENV_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_REQUEST_URL) {
            self.request_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_FORMAT) {
            self.format.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_HTTP_METHOD) {
            self.method.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key.as_ref().map(Redact::from))
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field("token", &self.token.as_ref().map(Redact::from))
            .field("token_secret", &self.token_secret.as_ref().map(Redact::from))
            .field("request_url", &self.request_url)
            .field("format", &self.format)
            .field("method", &self.method)
            .finish()
    }
}
