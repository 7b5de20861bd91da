//! Strongly-typed account numbers and phone numbers
//!
//! Both are plain decimal integers on disk; the newtypes keep them from being
//! mixed up with balances and amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest numeric input accepted for account numbers and phone numbers
pub const MAX_NUMBER_DIGITS: usize = 10;

/// Errors from parsing user-entered numbers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    #[error("only digits are allowed")]
    NotNumeric,
    #[error("must not exceed 10 digits")]
    TooLong,
    #[error("number is out of range")]
    OutOfRange,
}

fn parse_digits(s: &str) -> Result<u64, NumberParseError> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(NumberParseError::NotNumeric);
    }
    if s.len() > MAX_NUMBER_DIGITS {
        return Err(NumberParseError::TooLong);
    }
    s.parse::<u64>().map_err(|_| NumberParseError::OutOfRange)
}

/// An account number
///
/// Allocated numbers live in the 8-digit range `10000001..=99999999`, but any
/// `u32` can be looked up (it simply won't exist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u32);

impl AccountId {
    /// The first number handed out to a new account
    pub const FIRST: AccountId = AccountId(10_000_001);

    /// The last 8-digit account number
    pub const LAST: AccountId = AccountId(99_999_999);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The following account number, or `None` past the 8-digit range
    pub fn next(&self) -> Option<Self> {
        if *self >= Self::LAST {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AccountId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for AccountId {
    type Err = NumberParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_digits(s.trim())?;
        u32::try_from(value)
            .map(Self)
            .map_err(|_| NumberParseError::OutOfRange)
    }
}

/// A phone number stored as an integer of at most ten digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    /// Create a phone number, rejecting values wider than ten digits
    pub fn new(value: u64) -> Result<Self, NumberParseError> {
        if value > 9_999_999_999 {
            return Err(NumberParseError::TooLong);
        }
        Ok(Self(value))
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Zero-padded ten digit form used on screen
    pub fn padded(&self) -> String {
        format!("{:010}", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = NumberParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s.trim()).and_then(Self::new)
    }
}
