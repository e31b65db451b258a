//! Value objects of the bank-account domain.
//!
//! Japanese banking identifies an account by four fixed-digit codes: a
//! 4-digit bank code, a 3-digit branch office number, a 1-digit account
//! type code, and a 7-digit account number. The codes a holder sees can
//! change when branches are moved or consolidated; the [`AccountId`]
//! assigned at opening time never does.

use std::{fmt, str::FromStr};

use crate::{AccountId, Error};

/// Rejection of a fixed-digit code.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("bank code must be a 4-digit string")]
    BankCode,
    #[error("branch office number must be a 3-digit string")]
    BranchOfficeNumber,
    #[error("account type code must be a 1-digit string")]
    AccountTypeCode,
    #[error("account number must be a 7-digit string")]
    AccountNumber,
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// 4-digit code identifying a financial institution.
///
/// The default is `"0000"`, which no real institution carries.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BankCode(String);

impl BankCode {
    /// # Errors
    ///
    /// [`FieldError::BankCode`] unless the string is exactly 4 ASCII digits.
    pub fn new(code: &str) -> Result<Self, FieldError> {
        if is_digits(code, 4) {
            Ok(Self(code.to_owned()))
        } else {
            Err(FieldError::BankCode)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BankCode {
    fn default() -> Self {
        Self("0000".to_owned())
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BankCode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// 3-digit number of the branch office keeping the account.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BranchOfficeNumber(String);

impl BranchOfficeNumber {
    /// # Errors
    ///
    /// [`FieldError::BranchOfficeNumber`] unless the string is exactly
    /// 3 ASCII digits.
    pub fn new(number: &str) -> Result<Self, FieldError> {
        if is_digits(number, 3) {
            Ok(Self(number.to_owned()))
        } else {
            Err(FieldError::BranchOfficeNumber)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BranchOfficeNumber {
    fn default() -> Self {
        Self("000".to_owned())
    }
}

impl fmt::Display for BranchOfficeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BranchOfficeNumber {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// 1-digit code for the kind of deposit (ordinary, current, ...).
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountTypeCode(String);

impl AccountTypeCode {
    /// # Errors
    ///
    /// [`FieldError::AccountTypeCode`] unless the string is exactly
    /// 1 ASCII digit.
    pub fn new(code: &str) -> Result<Self, FieldError> {
        if is_digits(code, 1) {
            Ok(Self(code.to_owned()))
        } else {
            Err(FieldError::AccountTypeCode)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountTypeCode {
    fn default() -> Self {
        Self("0".to_owned())
    }
}

impl fmt::Display for AccountTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountTypeCode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// 7-digit account number the holder knows the account by.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// # Errors
    ///
    /// [`FieldError::AccountNumber`] unless the string is exactly
    /// 7 ASCII digits.
    pub fn new(number: &str) -> Result<Self, FieldError> {
        if is_digits(number, 7) {
            Ok(Self(number.to_owned()))
        } else {
            Err(FieldError::AccountNumber)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccountNumber {
    fn default() -> Self {
        Self("0000000".to_owned())
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A bank account.
///
/// Holders recognize the account by bank code, branch office number,
/// account type and account number; the system tracks it by its
/// [`AccountId`], which is assigned when the account is opened and
/// survives branch transfers and consolidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    bank_code: BankCode,
    branch_office_number: BranchOfficeNumber,
    account_type_code: AccountTypeCode,
    account_number: AccountNumber,
    account_id: AccountId,
    balance: i64,
}

impl Account {
    /// Reconstructs an account from its already-assigned parts.
    #[must_use]
    pub const fn new(
        bank_code: BankCode,
        branch_office_number: BranchOfficeNumber,
        account_type_code: AccountTypeCode,
        account_number: AccountNumber,
        account_id: AccountId,
    ) -> Self {
        Self {
            bank_code,
            branch_office_number,
            account_type_code,
            account_number,
            account_id,
            balance: 0,
        }
    }

    /// Opens the account at the given institution, branch and type,
    /// assigning a freshly generated [`AccountId`].
    ///
    /// # Errors
    ///
    /// Propagates identifier-generation failures, see [`crate::generate`].
    pub fn open(
        &mut self,
        bank_code: BankCode,
        branch_office_number: BranchOfficeNumber,
        account_type_code: AccountTypeCode,
    ) -> Result<(), Error> {
        self.bank_code = bank_code;
        self.branch_office_number = branch_office_number;
        self.account_type_code = account_type_code;
        self.account_id = AccountId::generate()?;
        Ok(())
    }

    #[must_use]
    pub const fn bank_code(&self) -> &BankCode {
        &self.bank_code
    }

    #[must_use]
    pub const fn branch_office_number(&self) -> &BranchOfficeNumber {
        &self.branch_office_number
    }

    #[must_use]
    pub const fn account_type_code(&self) -> &AccountTypeCode {
        &self.account_type_code
    }

    #[must_use]
    pub const fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Current balance in the account's minor currency unit.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.bank_code,
            self.branch_office_number,
            self.account_type_code,
            self.account_number,
            self.account_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_codes_validate_length_and_content() {
        assert!(BankCode::new("0001").is_ok());
        assert_eq!(BankCode::new("001"), Err(FieldError::BankCode));
        assert_eq!(BankCode::new("00011"), Err(FieldError::BankCode));
        assert_eq!(BankCode::new("00a1"), Err(FieldError::BankCode));

        assert!(BranchOfficeNumber::new("123").is_ok());
        assert_eq!(BranchOfficeNumber::new("1234"), Err(FieldError::BranchOfficeNumber));

        assert!(AccountTypeCode::new("1").is_ok());
        assert_eq!(AccountTypeCode::new("12"), Err(FieldError::AccountTypeCode));
        assert_eq!(AccountTypeCode::new(""), Err(FieldError::AccountTypeCode));

        assert!(AccountNumber::new("7654321").is_ok());
        assert_eq!(AccountNumber::new("765432"), Err(FieldError::AccountNumber));
        assert_eq!(AccountNumber::new("76543210"), Err(FieldError::AccountNumber));
    }

    #[test]
    fn digit_codes_reject_non_ascii_digits() {
        // Full-width digits are not ASCII digits
        assert_eq!(BankCode::new("０００１"), Err(FieldError::BankCode));
    }

    #[test]
    fn defaults_are_all_zero() {
        assert_eq!(BankCode::default().as_str(), "0000");
        assert_eq!(BranchOfficeNumber::default().as_str(), "000");
        assert_eq!(AccountTypeCode::default().as_str(), "0");
        assert_eq!(AccountNumber::default().as_str(), "0000000");
    }

    #[test]
    fn codes_order_by_content() {
        let low = BankCode::new("0001").unwrap();
        let high = BankCode::new("0010").unwrap();

        assert!(low < high);
        assert_eq!(low, low.clone());
    }

    #[test]
    fn fresh_account_displays_all_zero() {
        let account = Account::default();

        assert_eq!(
            account.to_string(),
            "0000-000-0-0000000-00000000000000000000000000"
        );
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn open_assigns_a_fresh_identifier() {
        let mut account = Account::default();

        account
            .open(
                BankCode::new("0001").unwrap(),
                BranchOfficeNumber::new("123").unwrap(),
                AccountTypeCode::new("1").unwrap(),
            )
            .unwrap();

        assert_eq!(account.bank_code().as_str(), "0001");
        assert_eq!(account.branch_office_number().as_str(), "123");
        assert_eq!(account.account_type_code().as_str(), "1");
        assert_ne!(account.account_id(), &AccountId::default());
        assert!(crate::validate(account.account_id().as_str()).is_ok());
    }
}
