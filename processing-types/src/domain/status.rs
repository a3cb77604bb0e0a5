//! Transaction lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// Status of a transaction, carried on the wire as a two-digit code.
///
/// A transaction enters processing as `Active` and leaves it as either
/// `Approved` or `Declined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Active,
    Approved,
    Declined,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Active,
        TransactionStatus::Approved,
        TransactionStatus::Declined,
    ];

    /// Returns the status code ("00", "01", "02").
    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Active => "00",
            TransactionStatus::Approved => "01",
            TransactionStatus::Declined => "02",
        }
    }

    /// Finds the status for a code, if there is one.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Returns true for the two statuses processing can end in.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Approved | TransactionStatus::Declined
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TransactionStatus {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| LookupError::Status(s.to_string()))
    }
}
