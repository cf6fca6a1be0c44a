//! # Domain Value Objects

use shared_crypto::Cipher;
use std::time::Duration;

/// Default per-call timeout, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Encrypted object client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectClientConfig {
    /// Bound applied to every transport call.
    pub timeout: Duration,
    /// Payload cipher for new envelopes.
    pub cipher: Cipher,
}

impl ObjectClientConfig {
    /// Config with `timeout_ms` and the default cipher.
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            ..Self::default()
        }
    }

    /// Timeout in whole milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ObjectClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            cipher: Cipher::default(),
        }
    }
}
