//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use mvperf_core::dataset::{MATRIX_DIMENSION, MATRIX_SIZES};
use mvperf_core::{CONFIGURATIONS, SCALABILITY};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the benchmarked configurations
    Configurations,

    /// List the scalability series
    Series,

    /// List available report formats
    Formats,
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Configurations => {
                let mut lines = vec![format!(
                    "Configurations ({0}×{0} matrix):",
                    MATRIX_DIMENSION
                )];
                lines.extend(CONFIGURATIONS.iter().map(|c| {
                    format!(
                        "  {:<12} workers={:<2} time={:.3} ms  gflops={:.3}",
                        c.display_name(),
                        c.workers,
                        c.time_ms,
                        c.gflops
                    )
                }));
                lines
            }
            ListCommands::Series => {
                let sizes: Vec<String> = MATRIX_SIZES.iter().map(|n| n.to_string()).collect();
                let mut lines = vec![format!(
                    "Scalability series over sizes {}{}:",
                    sizes.join(", "),
                    if SCALABILITY.estimated {
                        " (estimated)"
                    } else {
                        ""
                    }
                )];
                lines.extend(SCALABILITY.series.iter().map(|s| {
                    let times: Vec<String> =
                        s.times_ms.iter().map(|t| format!("{t:.3}")).collect();
                    format!(
                        "  {:<16} workers={:<2} {} ms",
                        s.name,
                        s.workers,
                        times.join(" / ")
                    )
                }));
                lines
            }
            ListCommands::Formats => {
                let mut lines = vec!["Available report formats:".to_string()];
                lines.extend(
                    OutputFormat::ALL
                        .iter()
                        .map(|f| format!("  {:<9} {}", f.as_str(), f.description())),
                );
                lines
            }
        }
    }
}
