//! Command implementations for the DFP CLI.
//!
//! Provides subcommands for querying daily fare prices and for inspecting
//! the request body that would be sent.

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod query;
pub mod render;

/// How query results are printed.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Grid of date/amount cards
    #[default]
    Cards,
    /// Pretty-printed JSON records
    Json,
    /// CSV with a header row
    Csv,
}

/// Inputs shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Upstream session id (empty uses the configured placeholder)
    #[arg(short = 's', long, default_value = "")]
    pub session_id: String,

    /// Origin airport code (empty uses the configured placeholder)
    #[arg(short = 'a', long, default_value = "")]
    pub airport: String,

    /// First day, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last day, YYYY-MM-DD (defaults to a week after --since)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// JSON file overriding endpoint and payload constants
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Override the configured hostname, e.g. http://localhost:8082
    #[arg(long)]
    pub hostname: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Query daily prices and print them
    Query {
        #[command(flatten)]
        search: SearchArgs,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Cards)]
        format: OutputFormat,

        /// Cards per row when printing cards
        #[arg(long, default_value_t = 6)]
        columns: usize,
    },

    /// Print the request body without sending it
    Payload {
        #[command(flatten)]
        search: SearchArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            search,
            format,
            columns,
        } => query::run_query(&search, format, columns).await,
        Command::Payload { search } => query::run_payload(&search),
    }
}
