//! Structured audit payload.
//!
//! Other systems parse this out of the audit log, so the shape is fixed:
//! `{"data":{"transaction":{"pan":..,"type":..,"amount":..,"currency":..,"status":..}}}`.

use serde::{Deserialize, Serialize};

/// Top-level audit payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub data: TransactionData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    pub transaction: TransactionRecord,
}

/// The transaction as recorded: masked PAN, numeric type code, raw amount,
/// numeric currency code and status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub pan: Option<String>,
    #[serde(rename = "type")]
    pub type_code: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
}

impl TransactionDetails {
    pub fn new(record: TransactionRecord) -> Self {
        Self {
            data: TransactionData {
                transaction: record,
            },
        }
    }

    /// Compact JSON encoding; falls back to `{}` if serialization fails.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
