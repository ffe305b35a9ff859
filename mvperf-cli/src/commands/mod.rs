//! CLI command implementations

use crate::output::OutputFormat;
use clap::Subcommand;
use mvperf_core::ChartSettings;

pub mod charts;
pub mod generate_config;
pub mod list;
pub mod report;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render both charts and print the summary report (default)
    Run,

    /// Print the summary report only
    Report(report::ReportArgs),

    /// Render the charts only
    Charts,

    /// List compiled-in data and supported formats
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Write a settings file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// Settings resolved from the settings file and global options
#[derive(Debug, Clone)]
pub struct RunContext {
    pub charts: ChartSettings,
    pub report_format: OutputFormat,
    pub quiet: bool,
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            charts: ChartSettings::default(),
            report_format: OutputFormat::Text,
            quiet: false,
        }
    }
}
