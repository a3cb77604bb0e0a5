//! Transaction domain model.

use serde::{Deserialize, Serialize};

use super::status::TransactionStatus;

/// A transaction submitted for processing.
///
/// Fields hold the raw codes the caller supplied; nothing is validated at
/// construction. Processing overwrites `status` and leaves every other
/// field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Primary Account Number, expected to be 16 digits
    #[serde(default)]
    pub pan: Option<String>,
    /// Transaction type name ("APP", "BRW", "TRI")
    #[serde(rename = "type")]
    pub kind: String,
    /// Amount in minor units (1.00 EUR = 100)
    pub amount: i64,
    /// Numeric currency code ("978", "840")
    pub currency: String,
    /// Status code ("00" = active, "01" = approved, "02" = declined)
    pub status: String,
}

impl Transaction {
    /// Creates a transaction from raw field values.
    pub fn new(
        pan: impl Into<String>,
        kind: impl Into<String>,
        amount: i64,
        currency: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            pan: Some(pan.into()),
            kind: kind.into(),
            amount,
            currency: currency.into(),
            status: status.into(),
        }
    }

    /// Returns the PAN, if one was supplied.
    pub fn pan(&self) -> Option<&str> {
        self.pan.as_deref()
    }

    /// Overwrites the status code.
    pub fn set_status(&mut self, status: TransactionStatus) {
        self.status = status.code().to_string();
    }

    /// Resolves the status code, if it is a known one.
    pub fn resolved_status(&self) -> Option<TransactionStatus> {
        TransactionStatus::from_code(&self.status)
    }
}
