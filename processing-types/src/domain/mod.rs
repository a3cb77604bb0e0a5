//! Domain models for transaction processing.

pub mod currency;
pub mod pan;
pub mod status;
pub mod transaction;
pub mod transaction_type;

pub use currency::CurrencyCode;
pub use pan::{PAN_LENGTH, is_valid_pan_for_type, mask_pan};
pub use status::TransactionStatus;
pub use transaction::Transaction;
pub use transaction_type::TransactionType;
