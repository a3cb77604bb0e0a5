//! Port traits (interfaces for adapters).
//!
//! The processing service writes through these traits and never touches a
//! concrete sink.

mod audit_sink;

pub use audit_sink::AuditSink;
