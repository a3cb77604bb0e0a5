//! # Processing Types
//!
//! Domain types, business rules and port traits for transaction processing.
//! This crate has no IO dependencies: only data structures, the PAN rules
//! and the sink contract.
//!
//! ## Architecture
//!
//! - `domain/` - Transaction, its code tables and PAN rules
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - The structured audit payload
//! - `error/` - Rule violations and adapter errors

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CurrencyCode, PAN_LENGTH, Transaction, TransactionStatus, TransactionType,
    is_valid_pan_for_type, mask_pan,
};
pub use dto::{TransactionData, TransactionDetails, TransactionRecord};
pub use error::{FormatError, LookupError, RuleViolation, SinkError, ValidationStep};
pub use ports::AuditSink;
