//! Report output formatting module

use anyhow::Result;
use mvperf_core::ConfigurationMetrics;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for report formatters
pub trait ReportFormatter: Send + Sync {
    /// Format and output a single configuration row
    fn format_row(&mut self, metrics: &ConfigurationMetrics) -> Result<()>;

    /// Finalize output (closing rule, best configuration, JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width table with a best-configuration summary
    Text,
    /// JSON document with rows and the best configuration
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name accepted by `--format` and the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Fixed-width summary table (default)",
            OutputFormat::Json => "Pretty-printed JSON with rows and best configuration",
            OutputFormat::Markdown => "Markdown table with best configuration",
        }
    }

    /// Build a formatter of this kind writing to `writer`
    pub fn formatter<W>(&self, writer: W) -> Box<dyn ReportFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Feed every row through `formatter` and finish it
pub fn write_all(
    formatter: &mut dyn ReportFormatter,
    metrics: &[ConfigurationMetrics],
) -> Result<()> {
    for m in metrics {
        formatter.format_row(m)?;
    }
    formatter.finish()
}
