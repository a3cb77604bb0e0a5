//! Payment Processing Service
//!
//! Runs the validation pipeline over a transaction and records the outcome
//! in the audit log. Contains no IO of its own: all writes go through the
//! `AuditSink` port.

use processing_types::{
    AuditSink, CurrencyCode, RuleViolation, Transaction, TransactionStatus, TransactionType,
    is_valid_pan_for_type, mask_pan,
};

use crate::audit::AuditLogger;

/// Runs the five checks in order and returns the first violation.
///
/// 1. status must be active
/// 2. type must be known
/// 3. currency must be known
/// 4. PAN must be valid for the type
/// 5. amount must not exceed the type's ceiling
///
/// There is no lower bound on the amount.
pub fn validate(transaction: &Transaction) -> Result<(), RuleViolation> {
    if transaction.status != TransactionStatus::Active.code() {
        return Err(RuleViolation::InactiveStatus(transaction.status.clone()));
    }

    let kind = TransactionType::from_name(&transaction.kind)
        .ok_or_else(|| RuleViolation::UnknownType(transaction.kind.clone()))?;

    CurrencyCode::from_numeric_code(&transaction.currency)
        .ok_or_else(|| RuleViolation::UnknownCurrency(transaction.currency.clone()))?;

    if !is_valid_pan_for_type(transaction.pan(), kind) {
        let masked = mask_pan(transaction.pan()).unwrap_or_else(|| "null".to_string());
        return Err(RuleViolation::InvalidPan(masked));
    }

    if transaction.amount > kind.max_amount() {
        return Err(RuleViolation::AmountExceedsLimit(transaction.amount));
    }

    Ok(())
}

/// Application service for transaction processing.
///
/// Generic over `S: AuditSink` - the sink is injected by the caller.
/// `process` never fails: every outcome is expressed through the
/// transaction's status.
pub struct PaymentService<S: AuditSink> {
    logger: AuditLogger<S>,
}

impl<S: AuditSink> PaymentService<S> {
    /// Creates a new service writing its audit log to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            logger: AuditLogger::new(sink),
        }
    }

    /// Returns the audit logger.
    pub fn logger(&self) -> &AuditLogger<S> {
        &self.logger
    }

    /// Decides the transaction and returns it with status Approved or
    /// Declined.
    ///
    /// A declined check writes one ERROR cause line. Exactly one record
    /// for the final state is written on every path (an ERROR line in
    /// place of the INFO record if the record cannot be formatted).
    #[tracing::instrument(skip_all, fields(kind = %transaction.kind, amount = transaction.amount))]
    pub fn process(&self, mut transaction: Transaction) -> Transaction {
        {
            let mut finalizer = Finalizer::new(&self.logger, &mut transaction);

            let status = match validate(finalizer.transaction()) {
                Ok(()) => TransactionStatus::Approved,
                Err(violation) => {
                    tracing::debug!(step = %violation.step(), "check failed");
                    self.logger.log_error(&violation.to_string());
                    TransactionStatus::Declined
                }
            };

            finalizer.decide(status);
        }

        debug_assert!(
            transaction
                .resolved_status()
                .is_some_and(|status| status.is_terminal())
        );
        tracing::info!(status = %transaction.status, "transaction processed");
        transaction
    }
}

/// Writes the audit record when dropped.
///
/// Dropping it without a decision (a panic mid-pipeline) declines the
/// transaction first, so the record never shows an undecided state.
struct Finalizer<'a, S: AuditSink> {
    logger: &'a AuditLogger<S>,
    transaction: &'a mut Transaction,
    decided: bool,
}

impl<'a, S: AuditSink> Finalizer<'a, S> {
    fn new(logger: &'a AuditLogger<S>, transaction: &'a mut Transaction) -> Self {
        Self {
            logger,
            transaction,
            decided: false,
        }
    }

    fn transaction(&self) -> &Transaction {
        &*self.transaction
    }

    fn decide(&mut self, status: TransactionStatus) {
        self.transaction.set_status(status);
        self.decided = true;
    }
}

impl<S: AuditSink> Drop for Finalizer<'_, S> {
    fn drop(&mut self) {
        if !self.decided {
            self.transaction.set_status(TransactionStatus::Declined);
        }
        self.logger.log_transaction(&*self.transaction);
    }
}
