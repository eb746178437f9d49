//! Configuration file.
//!
//! ```toml
//! [optimization]
//! metric = "oas"
//! security_bound = 0.01
//! duration_target = 5.0
//! sector_bound = 0.35
//!
//! [universe]
//! path = "data/universe.csv"
//!
//! [output]
//! format = "table"
//! precision = 4
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use bondopt_core::{Metric, OptimizationParameters};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondoptConfig {
    /// Optimizer defaults.
    #[serde(default)]
    pub optimization: OptimizationConfig,

    /// Universe defaults.
    #[serde(default)]
    pub universe: UniverseConfig,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[optimization]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizationConfig {
    /// Metric to maximize
    #[serde(default)]
    pub metric: Metric,

    /// Maximum weight per bond
    #[serde(default = "default_security_bound")]
    pub security_bound: f64,

    /// Required portfolio duration
    #[serde(default = "default_duration_target")]
    pub duration_target: f64,

    /// Maximum weight per sector
    #[serde(default = "default_sector_bound")]
    pub sector_bound: f64,
}

/// `[universe]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniverseConfig {
    /// Universe CSV used when --universe is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format used when --format is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in tables
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_security_bound() -> f64 {
    OptimizationParameters::default().security_bound
}

fn default_duration_target() -> f64 {
    OptimizationParameters::default().duration_target
}

fn default_sector_bound() -> f64 {
    OptimizationParameters::default().sector_bound
}

fn default_precision() -> usize {
    4
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            security_bound: default_security_bound(),
            duration_target: default_duration_target(),
            sector_bound: default_sector_bound(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

impl OptimizationConfig {
    /// Optimizer parameters from this section.
    pub fn parameters(&self) -> OptimizationParameters {
        OptimizationParameters::new(
            self.security_bound,
            self.duration_target,
            self.sector_bound,
            self.metric,
        )
    }
}

impl BondoptConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::config(path, e))?;
        Self::from_toml(&content).map_err(|e| CliError::config(path, e))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads the effective configuration.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to built-in defaults when absent.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading configuration");
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `<config_dir>/bondopt/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("bondopt").join("config.toml"))
}

/// Explicit path if given, otherwise the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path().ok_or(CliError::NoConfigDir),
    }
}
