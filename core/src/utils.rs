//! Utility functions and types.

use std::fmt;

/// Characters kept visible at each end of a redacted secret.
const VISIBLE: usize = 3;

/// Redact wraps a secret so that `Debug` output never prints it in full.
///
/// Secrets shorter than four times the visible window are masked
/// entirely. Longer ones keep three characters at each end, which is
/// enough to tell two consumer keys apart in a log line.
///
/// Counting is done on chars, not bytes.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl fmt::Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = self.0;
        if secret.is_empty() {
            return f.write_str("EMPTY");
        }
        if secret.chars().count() < VISIBLE * 4 {
            return f.write_str("***");
        }

        let head = secret
            .char_indices()
            .nth(VISIBLE)
            .map_or(secret.len(), |(i, _)| i);
        let tail = secret
            .char_indices()
            .nth_back(VISIBLE - 1)
            .map_or(0, |(i, _)| i);
        write!(f, "{}***{}", &secret[..head], &secret[tail..])
    }
}
