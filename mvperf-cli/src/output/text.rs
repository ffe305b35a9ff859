//! Fixed-width text output formatter

use super::ReportFormatter;
use anyhow::Result;
use mvperf_core::ConfigurationMetrics;
use std::io::Write;

/// Text formatter - the terminal summary table
pub struct TextFormatter<W: Write> {
    writer: W,
    rows: Vec<ConfigurationMetrics>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> ReportFormatter for TextFormatter<W> {
    fn format_row(&mut self, metrics: &ConfigurationMetrics) -> Result<()> {
        self.rows.push(metrics.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        mvperf_core::write_report(&mut self.writer, &self.rows)?;
        self.writer.flush()?;
        Ok(())
    }
}
