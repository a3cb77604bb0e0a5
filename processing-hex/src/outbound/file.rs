//! Daily log file sink.

use chrono::{Local, NaiveDate};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use processing_types::{AuditSink, SinkError};

/// Builds the log file name for a program and day: `<program>_<yyMMdd>.log`.
pub fn log_file_name(program_name: &str, date: NaiveDate) -> String {
    format!("{}_{}.log", program_name, date.format("%y%m%d"))
}

/// Appends audit lines to `<dir>/<program>_<yyMMdd>.log`.
///
/// The file name is fixed when the sink is created, so a long-running
/// process keeps writing to the file of the day it started. The file is
/// opened per append; a mutex keeps concurrent lines from interleaving.
#[derive(Debug)]
pub struct DailyFileSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DailyFileSink {
    pub const DEFAULT_PROGRAM_NAME: &'static str = "TransactionProcessing";

    /// Creates a sink for today's file in `dir`.
    pub fn new(dir: impl AsRef<Path>, program_name: &str) -> Self {
        Self::for_date(dir, program_name, Local::now().date_naive())
    }

    /// Creates a sink for the file of a given day.
    pub fn for_date(dir: impl AsRef<Path>, program_name: &str, date: NaiveDate) -> Self {
        Self {
            path: dir.as_ref().join(log_file_name(program_name, date)),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path lines are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for DailyFileSink {
    fn append(&self, line: &str) -> Result<(), SinkError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}
