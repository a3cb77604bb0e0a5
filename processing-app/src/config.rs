//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;

use processing_hex::DailyFileSink;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    /// Directory the daily audit log is written to.
    pub audit_log_dir: PathBuf,
    /// Prefix of the audit log file name.
    pub program_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let audit_log_dir = env::var("AUDIT_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let program_name = env::var("PROGRAM_NAME")
            .unwrap_or_else(|_| DailyFileSink::DEFAULT_PROGRAM_NAME.to_string());

        if program_name.trim().is_empty() {
            anyhow::bail!("PROGRAM_NAME cannot be empty");
        }
        if !audit_log_dir.is_dir() {
            anyhow::bail!(
                "AUDIT_LOG_DIR is not a directory: {}",
                audit_log_dir.display()
            );
        }

        Ok(Self {
            audit_log_dir,
            program_name,
        })
    }
}
