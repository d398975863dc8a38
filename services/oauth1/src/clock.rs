use std::fmt::Debug;

use oauthsign_core::time::{now, DateTime};

/// Clock provides the `oauth_timestamp` of every signed request.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Current time.
    fn now(&self) -> DateTime;
}

/// SystemClock reads the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        now()
    }
}

/// FixedClock always returns the same time.
///
/// # Note
///
/// We should always take current time to sign requests.
/// Only use this for testing.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime);

impl FixedClock {
    /// Create a new fixed clock.
    pub fn new(time: DateTime) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
