//! Transaction types and their per-type limits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::LookupError;

/// The kind of a transaction.
///
/// Each type carries its own numeric code, a ceiling on the amount
/// (in minor units) and the range of PANs it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    APP,
    BRW,
    /// Three-domain-secure initiated.
    TRI,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::APP,
        TransactionType::BRW,
        TransactionType::TRI,
    ];

    /// Returns the variant name, which is what transactions carry.
    pub fn name(&self) -> &'static str {
        match self {
            TransactionType::APP => "APP",
            TransactionType::BRW => "BRW",
            TransactionType::TRI => "TRI",
        }
    }

    /// Returns the numeric code used in the audit payload.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::APP => "01",
            TransactionType::BRW => "02",
            TransactionType::TRI => "03",
        }
    }

    /// Maximum permitted amount in minor units, inclusive.
    pub fn max_amount(&self) -> i64 {
        match self {
            TransactionType::APP => 5_000,
            TransactionType::BRW => 10_000,
            TransactionType::TRI => 2_000,
        }
    }

    /// Inclusive range of PANs accepted for this type.
    pub fn pan_range(&self) -> RangeInclusive<u64> {
        match self {
            TransactionType::APP => 1_000_000_000_000_000..=1_000_005_999_999_999,
            TransactionType::BRW => 2_000_000_000_000_000..=2_000_001_234_567_890,
            TransactionType::TRI => 3_000_000_000_000_000..=3_000_000_000_000_100,
        }
    }

    /// Finds the type by its name ("APP", "BRW", "TRI").
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Finds the type by its numeric code ("01", "02", "03").
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransactionType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LookupError::TransactionType(s.to_string()))
    }
}
