use std::{fmt, str::FromStr};

use crate::{validate, Error};

/// Identifier that uniquely names an account within the system.
///
/// An `AccountId` is assigned when the account is opened and never changes
/// afterwards, not even when branches are moved or consolidated. It is also
/// the key under which the account is persisted. Holders never see it; they
/// know their account by bank code, branch, type and number.
///
/// The stored value is a ULID: 26 Crockford Base32 characters. Every string
/// accepted from outside is validated:
///
/// ```
/// use account_ulid::AccountId;
///
/// assert!(AccountId::new("0123456789ABCDEFGHJKMNPQRS").is_ok());
/// assert!(AccountId::new("not an identifier").is_err());
/// ```
///
/// Equality and ordering are defined purely by the character sequence, so
/// sorting `AccountId`s sorts them by creation time.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    /// The all-zero identifier used when no real identifier is assigned yet.
    ///
    /// Caution: this value is indistinguishable from a ULID legitimately
    /// generated at timestamp 0 with zero randomness. Callers needing a
    /// reliable "unset" notion should carry an explicit flag (or use
    /// `Option<AccountId>`) instead of testing against this constant.
    pub const UNSET: &'static str = "00000000000000000000000000";

    /// Creates an `AccountId` from an externally supplied string.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] unless the string is exactly 26 Crockford
    /// Base32 characters.
    pub fn new(id: &str) -> Result<Self, Error> {
        validate(id)?;
        Ok(Self(id.to_owned()))
    }

    /// Generates a fresh identifier.
    ///
    /// # Errors
    ///
    /// Propagates generator failures, see [`crate::generate`].
    pub fn generate() -> Result<Self, Error> {
        Self::new(&crate::generate()?)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountId {
    /// The all-zero identifier, see [`AccountId::UNSET`].
    fn default() -> Self {
        Self(Self::UNSET.to_owned())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        assert_eq!(AccountId::default().as_str(), AccountId::UNSET);
    }

    #[test]
    fn accepts_well_formed_identifiers() {
        let id = AccountId::new("0123456789ABCDEFGHJKMNPQRS").unwrap();
        assert_eq!(id.as_str(), "0123456789ABCDEFGHJKMNPQRS");
        assert_eq!(id.to_string(), "0123456789ABCDEFGHJKMNPQRS");
    }

    #[test]
    fn rejects_malformed_identifiers() {
        assert_eq!(AccountId::new(""), Err(Error::InvalidFormat));
        assert_eq!(AccountId::new("0123456789ABCDEFGHJKMNPQR"), Err(Error::InvalidFormat));
        assert_eq!(AccountId::new("0123456789ABCDEFGHJKMNPQRST"), Err(Error::InvalidFormat));
        assert_eq!(AccountId::new("0123456789ABCDEFGHILOUPQRS"), Err(Error::InvalidFormat));
        assert_eq!(
            "0123456789abcdefghjkmnpqrs".parse::<AccountId>(),
            Err(Error::InvalidFormat)
        );
    }

    #[test]
    fn generated_identifiers_sort_after_the_default() {
        let unset = AccountId::default();
        let generated = AccountId::generate().unwrap();

        assert_ne!(unset, generated);
        assert!(unset < generated);
    }

    #[test]
    fn generated_identifiers_are_valid() {
        let id = AccountId::generate().unwrap();
        assert!(crate::validate(id.as_str()).is_ok());
    }
}
