//! # Processing Hex
//!
//! Application service and adapters for transaction processing.
//!
//! ## Architecture
//!
//! - `service/` - Validation pipeline (decides Approved / Declined)
//! - `audit/` - Audit record formatting and leveled log lines
//! - `outbound/` - Sink adapters (daily file, in-memory)
//!
//! The service is generic over `S: AuditSink`, so tests and embedding
//! hosts can substitute their own sink.

pub mod audit;
pub mod outbound;
pub mod service;


pub use audit::{AuditLogger, LogLevel};
pub use outbound::{DailyFileSink, MemorySink};
pub use service::{PaymentService, validate};
