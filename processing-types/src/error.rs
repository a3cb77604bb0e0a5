//! Error types for transaction processing.

use std::fmt;

/// Failure to resolve a code to one of the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid transaction status code: {0}")]
    Status(String),

    #[error("Invalid transaction type code: {0}")]
    TransactionType(String),

    #[error("Invalid currency code: {0}")]
    Currency(String),
}

/// The five checks of the validation pipeline, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationStep {
    Status,
    Type,
    Currency,
    Pan,
    Amount,
}

impl fmt::Display for ValidationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationStep::Status => write!(f, "status"),
            ValidationStep::Type => write!(f, "type"),
            ValidationStep::Currency => write!(f, "currency"),
            ValidationStep::Pan => write!(f, "pan"),
            ValidationStep::Amount => write!(f, "amount"),
        }
    }
}

/// Business rule violations. Each one declines the transaction.
///
/// The display text is the cause line written to the audit log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("Transaction status is not active: {0}")]
    InactiveStatus(String),

    #[error("Invalid transaction type: {0}")]
    UnknownType(String),

    #[error("Invalid currency code: {0}")]
    UnknownCurrency(String),

    /// Carries the PAN already masked.
    #[error("Invalid PAN for type: {0}")]
    InvalidPan(String),

    #[error("Transaction amount exceeds limit: {0}")]
    AmountExceedsLimit(i64),
}

impl RuleViolation {
    /// Returns the pipeline step that raised this violation.
    pub fn step(&self) -> ValidationStep {
        match self {
            RuleViolation::InactiveStatus(_) => ValidationStep::Status,
            RuleViolation::UnknownType(_) => ValidationStep::Type,
            RuleViolation::UnknownCurrency(_) => ValidationStep::Currency,
            RuleViolation::InvalidPan(_) => ValidationStep::Pan,
            RuleViolation::AmountExceedsLimit(_) => ValidationStep::Amount,
        }
    }
}

/// Failures while building an audit record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Failures of an audit sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write to log file: {0}")]
    Io(#[from] std::io::Error),
}
