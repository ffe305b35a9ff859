//! mvperf CLI library
//!
//! This library provides the command-line interface that renders the
//! matrix-vector benchmark charts and prints the summary report.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

use clap::{Args, Parser};
use commands::{Commands, RunContext};
use config::{CliConfig, Overrides};
use std::path::PathBuf;

/// Charts and summary report for matrix-vector benchmark results
#[derive(Debug, Parser)]
#[command(name = "mvperf", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options accepted by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Directory for the chart files (default: current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Chart resolution in dots per inch (default: 300)
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub dpi: Option<u32>,

    /// Settings file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the selected command, `run` when none is given
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        match &self.command {
            Some(Commands::GenerateConfig(args)) => args.execute(),
            Some(Commands::List { subcommand }) => subcommand.execute(),
            command => {
                let ctx = self.context()?;
                match command {
                    Some(Commands::Report(args)) => args.execute(&ctx),
                    Some(Commands::Charts) => commands::charts::execute(&ctx),
                    _ => commands::run::execute(&ctx),
                }
            }
        }
    }

    /// Resolve the settings file and global options
    pub fn context(&self) -> CliResult<RunContext> {
        let config = CliConfig::load(self.global.config.as_deref())?;
        let overrides = Overrides {
            output_dir: self.global.output_dir.clone(),
            dpi: self.global.dpi,
        };

        Ok(RunContext {
            charts: config.chart_settings(&overrides),
            report_format: config.report.default_format,
            quiet: self.global.quiet,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.global.quiet {
            return;
        }

        let log_level = match self.global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running from tests
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
