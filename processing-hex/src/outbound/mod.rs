//! Outbound adapters implementing the `AuditSink` port.

mod file;
mod memory;

pub use file::{DailyFileSink, log_file_name};
pub use memory::MemorySink;
