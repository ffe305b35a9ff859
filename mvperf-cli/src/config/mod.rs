//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use mvperf_core::charts::{self, ChartSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Chart output configuration
    #[serde(default)]
    pub charts: ChartsConfig,

    /// Report configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Chart-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChartsConfig {
    /// Directory the PNG files are written to
    pub output_dir: PathBuf,

    /// Output resolution in dots per inch
    pub dpi: u32,

    /// File name of the four-panel figure
    pub performance_file: String,

    /// File name of the log-log figure
    pub scalability_file: String,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dpi: charts::DEFAULT_DPI,
            performance_file: charts::PERFORMANCE_FILE.to_string(),
            scalability_file: charts::SCALABILITY_FILE.to_string(),
        }
    }
}

/// Report-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Format used when `--format` is not given
    pub default_format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
        }
    }
}

/// Command-line values that take precedence over the settings file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub output_dir: Option<PathBuf>,
    pub dpi: Option<u32>,
}

impl CliConfig {
    /// Parse a TOML settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid settings file: {}", path.display()))
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading settings from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Chart settings with command-line overrides applied
    pub fn chart_settings(&self, overrides: &Overrides) -> ChartSettings {
        ChartSettings {
            output_dir: overrides
                .output_dir
                .clone()
                .unwrap_or_else(|| self.charts.output_dir.clone()),
            dpi: overrides.dpi.unwrap_or(self.charts.dpi),
            performance_file: self.charts.performance_file.clone(),
            scalability_file: self.charts.scalability_file.clone(),
        }
    }
}
