//! CLI argument definitions for volspan.
//!
//! Two subcommands share the same period window flags:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Full comparison; writes the HTML artifacts |
//! | `summary` | Period and monthly aggregates on stdout only |
//!
//! # Examples
//!
//! ```bash
//! volspan analyze AAPL \
//!   --first-period-start 2023-01-01 --first-period-end 2023-12-31 \
//!   --second-period-start 2024-01-01 --second-period-end 2024-12-31
//!
//! volspan summary AAPL --first-period-start 2023-01-01 \
//!   --first-period-end 2023-06-30 --second-period-start 2023-07-01 \
//!   --second-period-end 2023-12-31 --format table
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Compare one equity symbol's trading activity across two date periods.
#[derive(Debug, Parser)]
#[command(
    name = "volspan",
    author,
    version,
    about = "Two-period trading activity comparison",
    long_about = "volspan fetches daily close/volume history for a symbol, restricts it to two \
date periods, and produces comparative charts plus per-period and per-month aggregates of \
volume, price, and dollar volume."
)]
pub struct Cli {
    /// Output format for the stdout report.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings (e.g. a period with no trading data) as failures.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Use the deterministic offline data source instead of Yahoo Finance.
    #[arg(long, global = true, default_value_t = false)]
    pub offline: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full comparison and write the HTML artifacts.
    Analyze(AnalyzeArgs),
    /// Print period and monthly summaries without writing artifacts.
    Summary(SummaryArgs),
}

/// The two date windows of a comparison run.
#[derive(Debug, Args)]
pub struct PeriodWindowArgs {
    /// Start date for the first period (YYYY-MM-DD).
    #[arg(long)]
    pub first_period_start: String,

    /// End date for the first period (YYYY-MM-DD).
    #[arg(long)]
    pub first_period_end: String,

    /// Start date for the second period (YYYY-MM-DD).
    #[arg(long)]
    pub second_period_start: String,

    /// End date for the second period (YYYY-MM-DD).
    #[arg(long)]
    pub second_period_end: String,

    /// Label override for the first period.
    #[arg(long)]
    pub first_label: Option<String>,

    /// Label override for the second period.
    #[arg(long)]
    pub second_label: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Stock symbol (e.g., AAPL).
    pub symbol: String,

    #[command(flatten)]
    pub window: PeriodWindowArgs,

    /// Directory the HTML artifacts are written into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Stock symbol (e.g., AAPL).
    pub symbol: String,

    #[command(flatten)]
    pub window: PeriodWindowArgs,
}
