//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// A chart file written during the run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub path: PathBuf,
    pub elapsed: Duration,
}

/// Progress reporter for chart rendering
///
/// The bar is only drawn when not quiet; rendered charts and their timings
/// are recorded either way.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    started: Option<Instant>,
    rendered: Vec<RenderedChart>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            started: None,
            rendered: Vec::new(),
        }
    }

    /// Initialize progress bar for the figures to render
    pub fn init_charts(&mut self, total_charts: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_charts);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} charts {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Announce the chart file being rendered
    pub fn chart_started(&mut self, path: &Path) {
        self.started = Some(Instant::now());
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Rendering: {}", display_name(path)));
        }
    }

    /// Record a written chart file
    pub fn chart_completed(&mut self, path: &Path) {
        let elapsed = self
            .started
            .take()
            .map(|start| start.elapsed())
            .unwrap_or_default();
        log::info!("Rendered {} in {:.2?}", path.display(), elapsed);

        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Rendered: {}", display_name(path)));
            pb.inc(1);
        }
        self.rendered.push(RenderedChart {
            path: path.to_path_buf(),
            elapsed,
        });
    }

    /// Clear the bar and hand back the charts written so far
    pub fn finish(self) -> Vec<RenderedChart> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
        self.rendered
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_still_records_charts() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_charts(2);
        assert!(reporter.progress_bar.is_none());

        let path = Path::new("out/performance_analysis.png");
        reporter.chart_started(path);
        reporter.chart_completed(path);

        let rendered = reporter.finish();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].path, path);
    }

    #[test]
    fn test_reporter_tracks_completed_charts() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_charts(2);

        for name in ["performance_analysis.png", "scalability_analysis.png"] {
            let path = Path::new(name);
            reporter.chart_started(path);
            reporter.chart_completed(path);
        }
        assert_eq!(reporter.progress_bar.as_ref().unwrap().position(), 2);

        let paths: Vec<PathBuf> = reporter.finish().into_iter().map(|c| c.path).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("performance_analysis.png"),
                PathBuf::from("scalability_analysis.png")
            ]
        );
    }

    #[test]
    fn test_completion_without_start_has_zero_elapsed() {
        let mut reporter = ProgressReporter::new(true);
        reporter.chart_completed(Path::new("scalability_analysis.png"));
        assert_eq!(reporter.finish()[0].elapsed, Duration::ZERO);
    }

    #[test]
    fn test_display_name_is_file_name() {
        assert_eq!(
            display_name(Path::new("figures/scalability_analysis.png")),
            "scalability_analysis.png"
        );
        assert_eq!(display_name(Path::new("..")), "..");
    }
}
