//! CLI argument definitions for fiscalview.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `show` | Fetch once, apply filters and sorts, print one page |
//! | `browse` | Interactive session driven by line commands on stdin |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--symbol` | `AAPL` | Ticker whose income statements are fetched |
//! | `--timeout-ms` | `3000` | Request timeout in ms |
//! | `--input` | none | Read statements from a JSON file instead of the API |
//!
//! # Examples
//!
//! ```bash
//! # Latest five fiscal years
//! fiscalview show
//!
//! # Revenue above 300B, highest net income first
//! fiscalview show --min-revenue 300000000000 --sort net-income --sort net-income
//!
//! # Offline, as JSON
//! fiscalview --input statements.json --format json --pretty show --page 2
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Browse annual income statements with filters, sorting and paging.
#[derive(Debug, Parser)]
#[command(
    name = "fiscalview",
    author,
    version,
    about = "Filter, sort and page through annual income statements"
)]
pub struct Cli {
    /// Output format for rendered pages.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Ticker symbol to fetch.
    #[arg(long, global = true, default_value = "AAPL")]
    pub symbol: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Read statements from a local JSON array instead of the remote API.
    #[arg(long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table for terminal display.
    Table,
    /// The page view as a single JSON object.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch once and print a single page.
    Show(ShowArgs),
    /// Start an interactive session.
    Browse,
}

/// Filter bounds stay raw strings: unparseable input means "no bound",
/// exactly as if the box were left empty.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Earliest fiscal date to keep (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// Latest fiscal date to keep (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<String>,

    #[arg(long)]
    pub min_revenue: Option<String>,

    #[arg(long)]
    pub max_revenue: Option<String>,

    #[arg(long)]
    pub min_net_income: Option<String>,

    #[arg(long)]
    pub max_net_income: Option<String>,

    /// Column header click: date, revenue or net-income. Repeat to toggle.
    #[arg(long = "sort", value_name = "FIELD")]
    pub sorts: Vec<String>,

    /// 1-based page to print; clamped to the available range.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}
