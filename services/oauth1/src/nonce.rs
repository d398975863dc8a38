use std::fmt::Debug;

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Length of nonces produced by [`NonceGenerator`].
pub const NONCE_LENGTH: usize = 44;

/// NonceSource produces the `oauth_nonce` of every signed request.
pub trait NonceSource: Debug + Send + Sync + 'static {
    /// Produce a fresh nonce.
    fn generate(&self) -> String;
}

/// NonceGenerator draws [`NONCE_LENGTH`] characters uniformly from
/// `[A-Za-z0-9]` using the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonceGenerator;

impl NonceSource for NonceGenerator {
    fn generate(&self) -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// FixedNonce always returns the same nonce.
///
/// Only useful for tests and reproducing a known signature.
#[derive(Debug, Clone)]
pub struct FixedNonce(String);

impl FixedNonce {
    /// Create a new fixed nonce.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl NonceSource for FixedNonce {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
