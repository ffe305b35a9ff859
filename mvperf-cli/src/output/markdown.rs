//! Markdown output formatter

use super::ReportFormatter;
use anyhow::Result;
use mvperf_core::{best_by_speedup, ConfigurationMetrics};
use std::io::Write;

/// Markdown formatter - outputs the report as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    rows: Vec<ConfigurationMetrics>,
    header_written: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
            header_written: false,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(
                self.writer,
                "| Configuration | Time (ms) | GFLOPS | Speedup | Efficiency |"
            )?;
            writeln!(self.writer, "|---|---:|---:|---:|---:|")?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> ReportFormatter for MarkdownFormatter<W> {
    fn format_row(&mut self, metrics: &ConfigurationMetrics) -> Result<()> {
        self.write_header()?;
        let c = &metrics.configuration;
        writeln!(
            self.writer,
            "| {} | {:.3} | {:.3} | {:.2}x | {:.1}% |",
            c.display_name(),
            c.time_ms,
            c.gflops,
            metrics.speedup,
            metrics.efficiency_pct
        )?;
        self.rows.push(metrics.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        if let Some(best) = best_by_speedup(&self.rows) {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "**Best configuration:** {} ({:.2}x speedup, {:.2} GFLOPS, {:.1}% efficiency)",
                best.configuration.display_name(),
                best.speedup,
                best.configuration.gflops,
                best.efficiency_pct
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_all;
    use mvperf_core::{derive_metrics, CONFIGURATIONS};

    #[test]
    fn test_markdown_table() {
        let metrics = derive_metrics(&CONFIGURATIONS);
        let mut formatter = MarkdownFormatter::new(Vec::new());
        write_all(&mut formatter, &metrics).unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let table_rows = output.lines().filter(|l| l.starts_with("| ")).count();

        // header plus one row per configuration
        assert_eq!(table_rows, 8);
        assert!(output.contains("| MPI 4p | 2.230 | 3.587 | 1.94x | 48.5% |"));
        assert!(output.contains("**Best configuration:** MPI 4p (1.94x speedup"));
    }

    #[test]
    fn test_markdown_header_written_once() {
        let metrics = derive_metrics(&CONFIGURATIONS);
        let mut formatter = MarkdownFormatter::new(Vec::new());
        write_all(&mut formatter, &metrics[..2]).unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output.matches("| Configuration |").count(), 1);
    }
}
