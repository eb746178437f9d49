//! Config command implementation.
//!
//! Shows, locates and initializes the TOML configuration file.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::config::{resolve_config_path, BondoptConfig};
use crate::error::CliError;
use crate::output::{
    print_header, print_info, print_json_value, print_output, print_success, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with the default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
///
/// Only `show` reads the file; `path` and `init` work before it exists.
pub fn execute(
    args: ConfigArgs,
    format: Option<OutputFormat>,
    explicit: Option<&Path>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = BondoptConfig::load(explicit)?;
            execute_show(&config, format.unwrap_or(config.output.format))
        }
        ConfigCommand::Path => execute_path(explicit),
        ConfigCommand::Init(init_args) => execute_init(&init_args, explicit),
    }
}

fn config_entries(config: &BondoptConfig) -> Vec<KeyValue> {
    let opt = &config.optimization;
    vec![
        KeyValue::new("optimization.metric", opt.metric),
        KeyValue::new("optimization.security_bound", opt.security_bound),
        KeyValue::new("optimization.duration_target", opt.duration_target),
        KeyValue::new("optimization.sector_bound", opt.sector_bound),
        KeyValue::new(
            "universe.path",
            config
                .universe
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        ),
        KeyValue::new("output.format", config.output.format.name()),
        KeyValue::new("output.precision", config.output.precision),
    ]
}

fn execute_show(config: &BondoptConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_output(&config_entries(config), format)?;
        }
        OutputFormat::Json => print_json_value(config)?,
        OutputFormat::Csv => print_output(&config_entries(config), format)?,
    }
    Ok(())
}

fn execute_path(explicit: Option<&Path>) -> Result<()> {
    let path = resolve_config_path(explicit)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn execute_init(args: &InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = resolve_config_path(explicit)?;
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path).into());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(CliError::from)?;
    }
    std::fs::write(&path, BondoptConfig::default().to_toml()?).map_err(CliError::from)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
