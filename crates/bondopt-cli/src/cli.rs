//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{ConfigArgs, OptimizeArgs, SummaryArgs};

/// Bondopt - corporate bond portfolio optimizer
#[derive(Parser)]
#[command(name = "bondopt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format. Defaults to `[output] format` from the config file
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, global = true, env = "BONDOPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a universe selection (bond count, market value, OAS/YTM/duration)
    Summary(SummaryArgs),

    /// Compute the optimal allocation for a universe selection
    Optimize(OptimizeArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// JSON
    Json,
    /// CSV
    Csv,
}

impl OutputFormat {
    /// Name as written in flags and the config file.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}
