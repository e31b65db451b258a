use std::time::SystemTime;

use rand::{rngs::OsRng, RngCore as _};

use crate::{Error, RANDOM_LEN};

/// Source of the current time, in milliseconds since the Unix epoch.
///
/// No range validation happens here; the encoder rejects timestamps
/// beyond the 48-bit field.
pub trait TimestampSource {
    fn now(&mut self) -> u64;
}

/// Source of cryptographically secure random payloads.
///
/// Implementations must draw from a cryptographically secure generator,
/// not a statistical one seeded from time. Successive calls are
/// independent; no ordering is guaranteed between them.
pub trait RandomnessSource {
    /// Returns 10 fresh bytes of entropy.
    ///
    /// # Errors
    ///
    /// [`Error::EntropyUnavailable`] when the underlying source is exhausted
    /// or unavailable. The failure propagates; there is no fallback to a
    /// weaker source.
    fn next_payload(&mut self) -> Result<[u8; RANDOM_LEN], Error>;
}

/// The system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimestampSource for SystemClock {
    fn now(&mut self) -> u64 {
        // A clock before the epoch reports 0; a reading beyond u64 range
        // saturates and is caught by the encoder's range check.
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_or(0, |since| u64::try_from(since.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Operating-system entropy, via [`OsRng`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl RandomnessSource for OsEntropy {
    fn next_payload(&mut self) -> Result<[u8; RANDOM_LEN], Error> {
        let mut payload = [0; RANDOM_LEN];
        OsRng
            .try_fill_bytes(&mut payload)
            .map_err(|_| Error::EntropyUnavailable)?;
        Ok(payload)
    }
}
