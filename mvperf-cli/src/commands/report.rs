//! Report command implementation

use super::RunContext;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use mvperf_core::{derive_metrics, CONFIGURATIONS};
use std::io;

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output format (default: from settings, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let format = self.format.unwrap_or(ctx.report_format);
        print_report(format)
    }
}

/// Derive the metrics and print them to stdout in `format`
pub fn print_report(format: OutputFormat) -> Result<()> {
    log::info!("Writing {} report", format.as_str());
    let metrics = derive_metrics(&CONFIGURATIONS);
    let mut formatter = format.formatter(io::stdout());
    output::write_all(formatter.as_mut(), &metrics)
}
