//! Audit sink port.
//!
//! The audit log is an append-only stream of text lines. Adapters decide
//! where the lines end up (a daily file, memory, ...).

use std::sync::Arc;

use crate::error::SinkError;

/// Append-only destination for audit log lines.
///
/// Implementations must serialize concurrent appends so that every call
/// lands as exactly one complete line.
pub trait AuditSink: Send + Sync {
    /// Appends a single line. `line` carries no trailing newline.
    fn append(&self, line: &str) -> Result<(), SinkError>;
}

impl<S: AuditSink + ?Sized> AuditSink for Arc<S> {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        (**self).append(line)
    }
}

impl<S: AuditSink + ?Sized> AuditSink for Box<S> {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        (**self).append(line)
    }
}
