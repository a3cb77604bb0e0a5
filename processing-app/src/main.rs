//! # Transaction Processing
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the transaction from flags or a JSON file
//! - Open today's audit log file
//! - Run the transaction through the payment service

mod config;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use processing_hex::{DailyFileSink, PaymentService};
use processing_types::{Transaction, mask_pan};

#[derive(Parser)]
#[command(name = "transaction-processing")]
#[command(author, version, about = "Validate a transaction and record it in the audit log", long_about = None)]
struct Cli {
    /// Read the transaction from a JSON file instead of the flags below
    #[arg(long, conflicts_with_all = ["pan", "kind", "amount", "currency", "status"])]
    input: Option<PathBuf>,

    /// Primary Account Number (16 digits)
    #[arg(long, default_value = "1000000000000000")]
    pan: String,

    /// Transaction type (APP, BRW, TRI)
    #[arg(long = "type", default_value = "APP")]
    kind: String,

    /// Amount in minor units (1.00 EUR = 100)
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    amount: i64,

    /// Numeric currency code (978 = EUR, 840 = USD)
    #[arg(long, default_value = "978")]
    currency: String,

    /// Initial status code (00 = active)
    #[arg(long, default_value = "00")]
    status: String,

    /// Emit diagnostics as JSON
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,processing_hex=info".into());

    let fmt_layer = if json {
        fmt::layer().json().with_writer(io::stderr).boxed()
    } else {
        fmt::layer().with_writer(io::stderr).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn read_transaction(path: &Path) -> Result<Transaction> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid transaction in {}", path.display()))
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = config::Config::from_env()?;

    let transaction = match &cli.input {
        Some(path) => read_transaction(path)?,
        None => Transaction::new(cli.pan, cli.kind, cli.amount, cli.currency, cli.status),
    };

    let sink = DailyFileSink::new(&config.audit_log_dir, &config.program_name);
    tracing::info!("Writing audit log to {}", sink.path().display());

    let service = PaymentService::new(sink);
    let mut result = service.process(transaction);

    println!("Transaction status: {}", result.status);

    result.pan = mask_pan(result.pan());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
