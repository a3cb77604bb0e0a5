//! Supported currencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// Currencies accepted by the processor, keyed by ISO 4217 numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    EUR,
    USD,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 2] = [CurrencyCode::EUR, CurrencyCode::USD];

    /// Returns the numeric code (978 = EUR, 840 = USD).
    pub fn numeric_code(&self) -> &'static str {
        match self {
            CurrencyCode::EUR => "978",
            CurrencyCode::USD => "840",
        }
    }

    /// Returns the lowercase alpha code, used for display only.
    pub fn alpha_code(&self) -> &'static str {
        match self {
            CurrencyCode::EUR => "eur",
            CurrencyCode::USD => "usd",
        }
    }

    /// Finds the currency for a numeric code.
    pub fn from_numeric_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.numeric_code() == code)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for CurrencyCode {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_numeric_code(s).ok_or_else(|| LookupError::Currency(s.to_string()))
    }
}
