//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use mvperf_core::dataset::MATRIX_DIMENSION;
use mvperf_core::{best_by_speedup, ConfigurationMetrics};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs the report as one JSON document
pub struct JsonFormatter<W: Write> {
    writer: W,
    rows: Vec<ConfigurationMetrics>,
}

/// Top-level JSON document
#[derive(Debug, Serialize)]
pub struct ReportData<'a> {
    /// N of the N×N matrix the timings were taken on
    pub matrix_dimension: u32,
    pub configurations: &'a [ConfigurationMetrics],
    pub best: Option<&'a ConfigurationMetrics>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
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

impl<W: Write + Send + Sync> ReportFormatter for JsonFormatter<W> {
    fn format_row(&mut self, metrics: &ConfigurationMetrics) -> Result<()> {
        self.rows.push(metrics.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let report = ReportData {
            matrix_dimension: MATRIX_DIMENSION,
            configurations: &self.rows,
            best: best_by_speedup(&self.rows),
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
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
    fn test_json_document() {
        let metrics = derive_metrics(&CONFIGURATIONS);
        let mut formatter = JsonFormatter::new(Vec::new());
        write_all(&mut formatter, &metrics).unwrap();

        let report: serde_json::Value =
            serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(report["matrix_dimension"], 2000);

        let rows = report["configurations"].as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[4]["configuration"], "Hybrid 2×2");
        assert_eq!(rows[0]["speedup"], 1.0);
        assert!(rows.iter().all(|r| r.get("color").is_none()));

        let best = &report["best"];
        assert_eq!(best["configuration"], "MPI 4p");
        assert_eq!(best["workers"], 4);
        assert_eq!(best["time_ms"], 2.230);
    }

    #[test]
    fn test_json_without_rows_has_null_best() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert!(value["best"].is_null());
        assert_eq!(value["configurations"].as_array().unwrap().len(), 0);
    }
}
