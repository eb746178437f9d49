//! Bondopt CLI - corporate bond portfolio optimizer.
//!
//! # Usage
//!
//! ```bash
//! # Summarize the latest date of a universe
//! bondopt summary --universe universe.csv
//!
//! # Maximize OAS for A/BBB industrials and utilities at 6 years duration
//! bondopt optimize -u universe.csv --rating A,BBB --duration-target 6
//!
//! # Maximize YTM with a 2% cap per bond, as JSON
//! bondopt optimize -u universe.csv --metric ytm --security-bound 0.02 -f json
//!
//! # Write a default configuration file
//! bondopt config init
//! ```
//!
//! An infeasible request exits with status 2.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::BondoptConfig;

const DEFAULT_LOG_FILTER: &str = "warn,bondopt=info";

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        1 => "warn,bondopt=debug".into(),
        _ => "debug,bondopt=trace".into(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let explicit = cli.config.as_deref();

    // Execute command
    match cli.command {
        Commands::Config(args) => {
            commands::config::execute(args, cli.format, explicit)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Summary(args) => {
            let config = BondoptConfig::load(explicit)?;
            let format = cli.format.unwrap_or(config.output.format);
            commands::summary::execute(args, format, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Optimize(args) => {
            let config = BondoptConfig::load(explicit)?;
            let format = cli.format.unwrap_or(config.output.format);
            commands::optimize::execute(args, format, &config)
        }
    }
}
