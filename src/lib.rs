//! # Sortable Account Identifiers
//!
//! This crate generates and validates ULIDs (Universally Unique
//! Lexicographically Sortable Identifiers) and provides the value objects of
//! a bank-account domain built on top of them. A ULID combines a millisecond
//! timestamp with 80 bits of secure randomness into a fixed 26-character
//! string whose lexicographic order equals the chronological order of the
//! embedded timestamps.
//!
//! ## Generating identifiers
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let id = account_ulid::generate()?;
//!
//! assert_eq!(id.len(), 26);
//! # Ok(()) }
//! ```
//!
//! ## Validating identifiers from outside
//!
//! Any identifier entering the system from an external source (rather than
//! freshly generated) goes through [`validate`]:
//!
//! ```
//! assert!(account_ulid::validate("0123456789ABCDEFGHJKMNPQRS").is_ok());
//! assert!(account_ulid::validate("0123456789ABCDEFGHILOUPQRS").is_err());
//! ```
//!
//! ## Account domain
//!
//! [`AccountId`] stores a validated identifier and is the key under which an
//! account lives; [`BankCode`], [`BranchOfficeNumber`], [`AccountTypeCode`]
//! and [`AccountNumber`] wrap the fixed-digit codes a holder knows the
//! account by; [`Account`] ties them together.
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use account_ulid::{Account, AccountTypeCode, BankCode, BranchOfficeNumber};
//!
//! let mut account = Account::default();
//!
//! account.open(
//!     BankCode::new("0001")?,
//!     BranchOfficeNumber::new("123")?,
//!     AccountTypeCode::new("1")?,
//! )?;
//! # Ok(()) }
//! ```
//!
//! ## Ordering caveats
//!
//! Identifiers generated within the same millisecond are ordered only by
//! their randomness field, not by call order. The all-zero identifier used
//! as an unset default is indistinguishable from a ULID legitimately
//! generated at timestamp 0 with zero randomness; do not rely on it as a
//! sentinel without an explicit flag.
//!
//! ## Feature flags
//!
//! - **`serde`**: serialization and deserialization of [`AccountId`] via
//!   `Serde`, optional.
//!

mod account;
mod account_id;
mod base32;
mod error;
mod generator;
#[cfg(feature = "serde")]
mod serde;
mod source;

pub use account::{Account, AccountNumber, AccountTypeCode, BankCode, BranchOfficeNumber, FieldError};
pub use account_id::AccountId;
pub use error::Error;
pub use generator::Generator;
pub use source::{OsEntropy, RandomnessSource, SystemClock, TimestampSource};

/// Width of the timestamp field in bits.
pub const TIMESTAMP_BITS: u32 = 48;

/// Largest encodable timestamp in epoch milliseconds (the year 10889).
pub const TIMESTAMP_MAX: u64 = (1 << TIMESTAMP_BITS) - 1;

/// Length of the random payload in bytes.
pub const RANDOM_LEN: usize = 10;

/// Length of the textual identifier in characters.
pub const ULID_LEN: usize = 26;

/// Encodes a timestamp and a random payload into a 26-character identifier.
///
/// The first 10 characters carry the timestamp, the remaining 16 the
/// payload, so comparing two encoded strings compares their timestamps
/// first. Deterministic and pure; the same inputs always produce the same
/// output.
///
/// # Errors
///
/// - [`Error::TimestampOutOfRange`] if the timestamp exceeds 48 bits.
/// - [`Error::PayloadLength`] if the payload is not exactly 10 bytes.
///
/// # Example
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let id = account_ulid::encode(0, &[0; 10])?;
///
/// assert_eq!(id, "00000000000000000000000000");
/// # Ok(()) }
/// ```
pub fn encode(timestamp: u64, random: &[u8]) -> Result<String, Error> {
    if timestamp > TIMESTAMP_MAX {
        return Err(Error::TimestampOutOfRange);
    }

    let payload: &[u8; RANDOM_LEN] = random
        .try_into()
        .map_err(|_| Error::PayloadLength(random.len()))?;

    let mut buffer = [0; ULID_LEN];
    Ok(base32::encode(timestamp, payload, &mut buffer).to_string())
}

/// Checks that a candidate string is a well-formed identifier.
///
/// A candidate is valid iff it is exactly 26 characters long and every
/// character belongs to the Crockford Base32 alphabet
/// (`0`–`9` and uppercase letters excluding I, L, O and U).
///
/// # Errors
///
/// [`Error::InvalidFormat`] if either check fails.
///
/// # Example
///
/// ```
/// assert!(account_ulid::validate("00000000000000000000000000").is_ok());
/// assert!(account_ulid::validate("too short").is_err());
/// ```
pub fn validate(candidate: &str) -> Result<(), Error> {
    let bytes: &[u8; ULID_LEN] = candidate
        .as_bytes()
        .try_into()
        .map_err(|_| Error::InvalidFormat)?;

    base32::validate(bytes)
}

/// Generates a fresh identifier from the system clock and OS entropy.
///
/// Shorthand for [`Generator::new()`] followed by
/// [`generate()`](Generator::generate).
///
/// # Errors
///
/// Propagates any [`Generator::generate`] failure unchanged.
pub fn generate() -> Result<String, Error> {
    Generator::new().generate()
}
