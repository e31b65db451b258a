/// Errors raised while encoding, generating, or accepting identifiers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The timestamp does not fit into the 48-bit field.
    #[error("timestamp is outside the 48-bit range")]
    TimestampOutOfRange,
    /// The random payload is not exactly 10 bytes long.
    #[error("random payload must be exactly 10 bytes, got {0}")]
    PayloadLength(usize),
    /// An externally supplied identifier fails the length or alphabet check.
    #[error("identifier must be a 26-character string restricted to the Crockford Base32 alphabet")]
    InvalidFormat,
    /// The operating system could not supply secure random bytes.
    #[error("secure randomness is unavailable")]
    EntropyUnavailable,
}
