//! `dfp-cli`: query the daily lowest-fare calendar from a terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dfp-cli",
    version,
    about = "Query daily lowest fares from an origin airport over a date range",
    long_about = "Posts the daily-prices GraphQL query and prints one entry per day. \
Days without a fare show as \"-\". Set RUST_LOG to change log verbosity (default: info)."
)]
struct Cli {
    #[command(subcommand)]
    command: dfp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    dfp_cmd::run(cli.command).await
}
