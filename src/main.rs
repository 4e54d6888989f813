//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_inspect` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the JSON result to stdout
//!
//! All analysis is implemented in the library crate. Logs go to stderr so
//! stdout carries only JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_inspect::initialization::init_logger_with;
use seo_inspect::tools::{list_tools, Dispatcher, ToolOutput};
use seo_inspect::{Cli, Command, Fetcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let pretty = !cli.compact;
    let fetch_config = cli.fetch_config();

    if let Command::ListTools = cli.command {
        let listing = serde_json::to_value(list_tools()).context("Failed to list tools")?;
        println!("{}", ToolOutput::Report(listing).render(pretty));
        return Ok(());
    }

    let (tool, args) = cli.command.into_call(std::io::stdin().lock())?;
    let fetcher = Fetcher::new(&fetch_config).context("Failed to initialize HTTP client")?;
    let output = Dispatcher::new(fetcher).call(tool, &args).await;

    println!("{}", output.render(pretty));
    if output.is_error() {
        process::exit(1);
    }
    Ok(())
}
