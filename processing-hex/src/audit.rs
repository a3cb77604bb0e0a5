//! Audit log formatting.
//!
//! Every line written to the audit sink has the shape
//! `HH:MM:SS.mmm LEVEL: message`. Two kinds of message exist:
//! - a cause line for each failed check (`ERROR`)
//! - one transaction record per processing attempt (`INFO`)

use chrono::{Local, NaiveDateTime, NaiveTime};
use std::fmt;

use processing_types::{
    AuditSink, CurrencyCode, FormatError, LookupError, Transaction, TransactionDetails,
    TransactionRecord, TransactionStatus, TransactionType, mask_pan,
};

const LINE_TIME_FORMAT: &str = "%H:%M:%S%.3f";
const RECORD_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Severity tag of an audit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Writes leveled audit lines to a sink.
///
/// Sink failures never reach the caller; they are reported through
/// `tracing` and the line is dropped.
pub struct AuditLogger<S: AuditSink> {
    sink: S,
}

impl<S: AuditSink> AuditLogger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Writes the INFO record for a transaction in its current state.
    ///
    /// If the record cannot be built, an ERROR line describing why is
    /// written instead.
    pub fn log_transaction(&self, transaction: &Transaction) {
        match format_transaction(transaction, Local::now().naive_local()) {
            Ok(message) => self.log(LogLevel::Info, &message),
            Err(e) => self.log_error(&format!("Error during logging transaction: {}", e)),
        }
    }

    /// Writes an ERROR line.
    pub fn log_error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        let line = log_line(Local::now().time(), level, message);
        if let Err(e) = self.sink.append(&line) {
            tracing::error!(level = %level, "{}", e);
        }
    }
}

/// Prefixes a message with time of day and level.
pub fn log_line(time: NaiveTime, level: LogLevel, message: &str) -> String {
    format!("{} {}: {}", time.format(LINE_TIME_FORMAT), level, message)
}

/// Formats minor units as major units with two decimals (1000 -> "10.00").
pub fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Display label for a status code. Anything but approved reads "Declined".
pub fn status_label(status: &str) -> &'static str {
    if status == TransactionStatus::Approved.code() {
        "Approved"
    } else {
        "Declined"
    }
}

/// Builds the structured payload for a transaction.
///
/// Currency and type are resolved again here, independently of the
/// pipeline; either failing to resolve is a `FormatError`.
pub fn transaction_details(transaction: &Transaction) -> Result<TransactionDetails, FormatError> {
    let currency = resolve_currency(transaction)?;
    let kind = TransactionType::from_name(&transaction.kind)
        .ok_or_else(|| LookupError::TransactionType(transaction.kind.clone()))?;

    Ok(TransactionDetails::new(TransactionRecord {
        pan: mask_pan(transaction.pan()),
        type_code: kind.code().to_string(),
        amount: transaction.amount,
        currency: currency.numeric_code().to_string(),
        status: transaction.status.clone(),
    }))
}

/// Formats the human-readable audit record, stamped with `at`.
pub fn format_transaction(
    transaction: &Transaction,
    at: NaiveDateTime,
) -> Result<String, FormatError> {
    let masked_pan = mask_pan(transaction.pan());
    let currency = resolve_currency(transaction)?;
    let details = transaction_details(transaction)?;

    Ok(format!(
        "Processed transaction with card number {} on {}, amount {} {}, status {}. Return transaction details: {}",
        masked_pan.as_deref().unwrap_or("null"),
        at.format(RECORD_TIME_FORMAT),
        format_amount(transaction.amount),
        currency.alpha_code(),
        status_label(&transaction.status),
        details.to_json(),
    ))
}

fn resolve_currency(transaction: &Transaction) -> Result<CurrencyCode, LookupError> {
    CurrencyCode::from_numeric_code(&transaction.currency)
        .ok_or_else(|| LookupError::Currency(transaction.currency.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::MemorySink;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(hour, min, 15)
            .unwrap()
    }

    fn approved() -> Transaction {
        Transaction::new("1000000000000000", "APP", 1000, "978", "01")
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1000), "10.00");
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(123456), "1234.56");
        assert_eq!(format_amount(-50), "-0.50");
    }

    #[test]
    fn test_status_label_is_binary() {
        assert_eq!(status_label("01"), "Approved");
        assert_eq!(status_label("02"), "Declined");
        assert_eq!(status_label("00"), "Declined");
        assert_eq!(status_label("garbage"), "Declined");
    }

    #[test]
    fn test_log_line_prefix() {
        let time = NaiveTime::from_hms_milli_opt(9, 5, 3, 42).unwrap();
        assert_eq!(
            log_line(time, LogLevel::Error, "Test error message"),
            "09:05:03.042 ERROR: Test error message"
        );
    }

    #[test]
    fn test_format_transaction() {
        let message = format_transaction(&approved(), at(14, 30)).unwrap();
        assert_eq!(
            message,
            "Processed transaction with card number 100000******0000 on 07.03.2024 14:30, \
             amount 10.00 eur, status Approved. Return transaction details: \
             {\"data\":{\"transaction\":{\"pan\":\"100000******0000\",\"type\":\"01\",\
             \"amount\":1000,\"currency\":\"978\",\"status\":\"01\"}}}"
        );
    }

    #[test]
    fn test_format_is_idempotent_apart_from_timestamp() {
        let tx = approved();
        let first = format_transaction(&tx, at(14, 30)).unwrap();
        let second = format_transaction(&tx, at(14, 30)).unwrap();
        assert_eq!(first, second);

        let later = format_transaction(&tx, at(16, 45)).unwrap();
        assert_eq!(
            first.replace("07.03.2024 14:30", "<ts>"),
            later.replace("07.03.2024 16:45", "<ts>")
        );
    }

    #[test]
    fn test_format_masks_structurally_invalid_pan() {
        let tx = Transaction::new("abcdefghijklmnop", "APP", 1, "840", "02");
        let message = format_transaction(&tx, at(0, 0)).unwrap();
        assert!(message.contains("card number abcdef******mnop"));
        assert!(message.contains("amount 0.01 usd, status Declined"));
    }

    #[test]
    fn test_short_pan_not_masked() {
        let tx = Transaction::new("100000", "APP", 1, "978", "02");
        let details = transaction_details(&tx).unwrap();
        assert_eq!(details.data.transaction.pan.as_deref(), Some("100000"));
    }

    #[test]
    fn test_payload_parses_back() {
        let message = format_transaction(&approved(), at(8, 0)).unwrap();
        let json = message
            .split("Return transaction details: ")
            .nth(1)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["data"]["transaction"]["type"], "01");
        assert_eq!(value["data"]["transaction"]["amount"], 1000);
    }

    #[test]
    fn test_unknown_currency_fails_formatting() {
        let tx = Transaction::new("1000000000000000", "APP", 1000, "999", "02");
        let result = format_transaction(&tx, at(8, 0));
        assert!(matches!(
            result,
            Err(FormatError::Lookup(LookupError::Currency(code))) if code == "999"
        ));
    }

    #[test]
    fn test_unknown_type_fails_formatting() {
        let tx = Transaction::new("1000000000000000", "UNKNOWN", 1000, "978", "02");
        let result = transaction_details(&tx);
        assert!(matches!(
            result,
            Err(FormatError::Lookup(LookupError::TransactionType(_)))
        ));
    }

    #[test]
    fn test_logger_writes_error_when_record_cannot_be_built() {
        let logger = AuditLogger::new(MemorySink::new());
        let tx = Transaction::new("1000000000000000", "UNKNOWN", 1000, "978", "02");

        logger.log_transaction(&tx);

        let lines = logger.sink().lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(
            "ERROR: Error during logging transaction: Invalid transaction type code: UNKNOWN"
        ));
    }

    #[test]
    fn test_logger_writes_info_record() {
        let logger = AuditLogger::new(MemorySink::new());

        logger.log_transaction(&approved());

        let lines = logger.sink().lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" INFO: Processed transaction with card number 100000******0000"));
        assert!(lines[0].contains("amount 10.00 eur"));
        assert!(lines[0].contains("status Approved"));
    }
}
