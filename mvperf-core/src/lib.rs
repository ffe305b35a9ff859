//! Benchmark report generation for matrix-vector multiplication runs
//!
//! This crate holds the hand-recorded timings of sequential, MPI and hybrid
//! MPI+OpenMP matrix-vector kernels, derives speedup and parallel efficiency
//! from them, and renders both a fixed-width terminal summary and PNG charts.
//!
//! # Example
//!
//! ```rust
//! use mvperf_core::{best_by_speedup, derive_metrics, render_report, CONFIGURATIONS};
//!
//! let metrics = derive_metrics(&CONFIGURATIONS);
//! let best = best_by_speedup(&metrics).unwrap();
//! assert_eq!(best.configuration.label, "MPI 4p");
//!
//! let report = render_report(&metrics);
//! assert!(report.contains("Best configuration: MPI 4p"));
//! ```

pub mod charts;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod report;

pub use charts::{render_all, ChartSettings};
pub use dataset::{Configuration, ScalabilityDataset, CONFIGURATIONS, SCALABILITY};
pub use error::{Error, Result};
pub use metrics::{best_by_speedup, derive_metrics, ConfigurationMetrics};
pub use report::{render_report, write_report};
