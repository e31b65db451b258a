use crate::{encode, Error, OsEntropy, RandomnessSource, SystemClock, TimestampSource};

/// Produces fresh identifiers from a clock and an entropy source.
///
/// Both sources are injected capabilities, so tests can substitute
/// deterministic stand-ins. The default pairing is the system clock
/// and operating-system entropy:
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use account_ulid::Generator;
///
/// let mut generator = Generator::new();
///
/// let id = generator.generate()?;
///
/// assert_eq!(id.len(), 26);
/// # Ok(()) }
/// ```
///
/// Identifiers generated within the same millisecond are ordered only by
/// their randomness field, not by call order.
#[derive(Debug, Clone)]
pub struct Generator<C = SystemClock, R = OsEntropy> {
    clock: C,
    entropy: R,
}

impl Generator {
    /// Creates a generator backed by the system clock and OS entropy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clock: SystemClock,
            entropy: OsEntropy,
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TimestampSource, R: RandomnessSource> Generator<C, R> {
    /// Creates a generator from explicit clock and entropy sources.
    pub const fn with_sources(clock: C, entropy: R) -> Self {
        Self { clock, entropy }
    }

    /// Generates a fresh identifier string.
    ///
    /// Consumes one 10-byte payload of entropy per call.
    ///
    /// # Errors
    ///
    /// Encoder and entropy failures propagate unchanged. A healthy system
    /// never observes [`Error::TimestampOutOfRange`] here, because clock
    /// readings fit into 48 bits until the year 10889; its appearance
    /// indicates a misconfigured clock.
    pub fn generate(&mut self) -> Result<String, Error> {
        let timestamp = self.clock.now();
        let payload = self.entropy.next_payload()?;

        encode(timestamp, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate, RANDOM_LEN};

    struct FixedClock(u64);

    impl TimestampSource for FixedClock {
        fn now(&mut self) -> u64 {
            self.0
        }
    }

    struct FixedEntropy([u8; RANDOM_LEN]);

    impl RandomnessSource for FixedEntropy {
        fn next_payload(&mut self) -> Result<[u8; RANDOM_LEN], Error> {
            Ok(self.0)
        }
    }

    struct ExhaustedEntropy;

    impl RandomnessSource for ExhaustedEntropy {
        fn next_payload(&mut self) -> Result<[u8; RANDOM_LEN], Error> {
            Err(Error::EntropyUnavailable)
        }
    }

    #[test]
    fn generates_valid_identifiers() {
        let id = Generator::new().generate().unwrap();

        assert_eq!(id.len(), 26);
        assert!(validate(&id).is_ok());
    }

    #[test]
    fn deterministic_sources_give_deterministic_identifiers() {
        let mut generator = Generator::with_sources(FixedClock(0), FixedEntropy([0; RANDOM_LEN]));

        assert_eq!(generator.generate().unwrap(), "00000000000000000000000000");
        assert_eq!(generator.generate().unwrap(), "00000000000000000000000000");
    }

    #[test]
    fn later_clock_sorts_after_earlier_clock() {
        let payload = [0xFF; RANDOM_LEN];

        let earlier = Generator::with_sources(FixedClock(1), FixedEntropy(payload))
            .generate()
            .unwrap();
        let later = Generator::with_sources(FixedClock(2), FixedEntropy([0; RANDOM_LEN]))
            .generate()
            .unwrap();

        assert!(earlier < later);
    }

    #[test]
    fn misconfigured_clock_is_reported() {
        let mut generator = Generator::with_sources(FixedClock(u64::MAX), FixedEntropy([0; RANDOM_LEN]));

        assert_eq!(generator.generate(), Err(Error::TimestampOutOfRange));
    }

    #[test]
    fn entropy_failure_propagates() {
        let mut generator = Generator::with_sources(FixedClock(0), ExhaustedEntropy);

        assert_eq!(generator.generate(), Err(Error::EntropyUnavailable));
    }
}
