//! PNG chart rendering
//!
//! Figure sizes are given in inches and fonts in points, then scaled by the
//! configured DPI, so a 14×10 in figure at 300 DPI is a 4200×3000 px bitmap.

mod performance;
mod scalability;

use crate::dataset::ScalabilityDataset;
use crate::error::{Error, Result};
use crate::metrics::ConfigurationMetrics;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub use performance::render_performance;
pub use scalability::render_scalability;

/// Default output resolution
pub const DEFAULT_DPI: u32 = 300;

/// Default file name of the four-panel figure
pub const PERFORMANCE_FILE: &str = "performance_analysis.png";

/// Default file name of the log-log figure
pub const SCALABILITY_FILE: &str = "scalability_analysis.png";

/// Four-panel figure size in inches
pub const PERFORMANCE_FIGURE_IN: (f64, f64) = (14.0, 10.0);

/// Scalability figure size in inches
pub const SCALABILITY_FIGURE_IN: (f64, f64) = (10.0, 6.0);

/// Where and at which resolution charts are written
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub output_dir: PathBuf,
    pub dpi: u32,
    pub performance_file: String,
    pub scalability_file: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            dpi: DEFAULT_DPI,
            performance_file: PERFORMANCE_FILE.to_string(),
            scalability_file: SCALABILITY_FILE.to_string(),
        }
    }
}

impl ChartSettings {
    /// Reject settings that cannot produce an image
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(Error::InvalidSetting("dpi must be positive".to_string()));
        }
        for name in [&self.performance_file, &self.scalability_file] {
            if name.trim().is_empty() {
                return Err(Error::InvalidSetting(
                    "chart file name must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn performance_path(&self) -> PathBuf {
        self.output_dir.join(&self.performance_file)
    }

    pub fn scalability_path(&self) -> PathBuf {
        self.output_dir.join(&self.scalability_file)
    }

    pub fn scale(&self) -> Scale {
        Scale { dpi: self.dpi }
    }
}

/// Converts inches and points into pixels at a given DPI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    dpi: u32,
}

impl Scale {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Pixel size of a figure given in inches
    pub fn figure(&self, (width_in, height_in): (f64, f64)) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        ((width_in * dpi).round() as u32, (height_in * dpi).round() as u32)
    }

    /// Pixel length of `pt` points, at least one pixel
    pub fn px(&self, pt: f64) -> u32 {
        (self.font(pt).round() as u32).max(1)
    }

    /// Font size in pixels for `pt` points
    pub fn font(&self, pt: f64) -> f64 {
        pt * f64::from(self.dpi) / 72.0
    }

    fn regular(&self, pt: f64) -> FontDesc<'static> {
        ("sans-serif", self.font(pt)).into_font()
    }

    fn bold(&self, pt: f64) -> FontDesc<'static> {
        self.regular(pt).style(FontStyle::Bold)
    }
}

/// Render both figures, returning the written paths in order
pub fn render_all(
    settings: &ChartSettings,
    metrics: &[ConfigurationMetrics],
    scalability: &ScalabilityDataset,
) -> Result<Vec<PathBuf>> {
    Ok(vec![
        render_performance_chart(settings, metrics)?,
        render_scalability_chart(settings, scalability)?,
    ])
}

/// Render the four-panel performance figure into the configured directory
pub fn render_performance_chart(
    settings: &ChartSettings,
    metrics: &[ConfigurationMetrics],
) -> Result<PathBuf> {
    settings.validate()?;
    let path = settings.performance_path();
    prepare_parent(&path)?;
    render_performance(&path, metrics, settings.scale())?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

/// Render the log-log scalability figure into the configured directory
pub fn render_scalability_chart(
    settings: &ChartSettings,
    dataset: &ScalabilityDataset,
) -> Result<PathBuf> {
    settings.validate()?;
    let path = settings.scalability_path();
    prepare_parent(&path)?;
    render_scalability(&path, dataset, settings.scale())?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

fn prepare_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir)?;
            Ok(())
        }
        _ => Ok(()),
    }
}
