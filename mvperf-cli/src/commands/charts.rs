//! Charts command implementation

use super::RunContext;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use mvperf_core::charts::{render_performance_chart, render_scalability_chart};
use mvperf_core::{derive_metrics, CONFIGURATIONS, SCALABILITY};
use std::path::PathBuf;

/// Number of figures written per run
const CHART_COUNT: u64 = 2;

/// Render both figures and print where they were saved
pub fn execute(ctx: &RunContext) -> Result<()> {
    render_charts(ctx).map(|_| ())
}

/// Render both figures, returning their paths
pub fn render_charts(ctx: &RunContext) -> Result<Vec<PathBuf>> {
    let mut progress = ProgressReporter::new(ctx.quiet);
    progress.init_charts(CHART_COUNT);

    let outcome = render_with_progress(ctx, &mut progress);
    let rendered = progress.finish();
    outcome?;

    for chart in &rendered {
        println!("✓ Saved chart: {}", chart.path.display());
    }
    log::info!(
        "Rendered {} charts at {} dpi into {}",
        rendered.len(),
        ctx.charts.dpi,
        ctx.charts.output_dir.display()
    );
    Ok(rendered.into_iter().map(|chart| chart.path).collect())
}

fn render_with_progress(ctx: &RunContext, progress: &mut ProgressReporter) -> Result<()> {
    let settings = &ctx.charts;
    let metrics = derive_metrics(&CONFIGURATIONS);

    let path = settings.performance_path();
    progress.chart_started(&path);
    render_performance_chart(settings, &metrics)
        .with_context(|| format!("Failed to render {}", path.display()))?;
    progress.chart_completed(&path);

    if SCALABILITY.estimated {
        log::warn!("Scalability chart uses estimated timings, not measured ones");
    }
    let path = settings.scalability_path();
    progress.chart_started(&path);
    render_scalability_chart(settings, &SCALABILITY)
        .with_context(|| format!("Failed to render {}", path.display()))?;
    progress.chart_completed(&path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet_context(dir: &TempDir) -> RunContext {
        let mut ctx = RunContext {
            quiet: true,
            ..RunContext::default()
        };
        ctx.charts.output_dir = dir.path().join("figures");
        ctx.charts.dpi = 30;
        ctx
    }

    #[test]
    fn test_render_charts_returns_written_paths() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = quiet_context(&temp_dir);

        let paths = render_charts(&ctx).unwrap();
        assert_eq!(
            paths,
            vec![ctx.charts.performance_path(), ctx.charts.scalability_path()]
        );
        assert!(paths.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_render_failure_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = quiet_context(&temp_dir);
        std::fs::write(&ctx.charts.output_dir, "not a directory").unwrap();
        ctx.charts.performance_file = "perf.png".to_string();

        let err = render_charts(&ctx).unwrap_err();
        assert!(err.to_string().contains("perf.png"));
    }
}
