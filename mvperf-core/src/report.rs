//! Fixed-width terminal summary of the derived metrics

use crate::dataset::MATRIX_DIMENSION;
use crate::metrics::{best_by_speedup, ConfigurationMetrics};
use std::io::{self, Write};

/// Width of the `=` and `-` rules around the table
pub const RULE_WIDTH: usize = 80;

/// Table title line
pub fn title() -> String {
    format!(
        "SUMMARY TABLE - Matrix-Vector Performance {0}×{0}",
        MATRIX_DIMENSION
    )
}

/// Column header line
pub fn header() -> String {
    format!(
        "{:<15} {:<12} {:<10} {:<10} {:<12}",
        "Configuration", "Time (ms)", "GFLOPS", "Speedup", "Efficiency"
    )
}

/// One table row: time and GFLOPS to 3 decimals, speedup to 2 with a
/// trailing `x`, efficiency to 1 with a trailing `%`.
pub fn format_row(metrics: &ConfigurationMetrics) -> String {
    let c = &metrics.configuration;
    let speedup = format!("{:.2}x", metrics.speedup);
    format!(
        "{:<15} {:<12.3} {:<10.3} {:<10} {:<12.1}%",
        c.display_name(),
        c.time_ms,
        c.gflops,
        speedup,
        metrics.efficiency_pct
    )
}

/// Lines of the best-configuration summary
pub fn best_summary(best: &ConfigurationMetrics) -> [String; 4] {
    [
        format!("Best configuration: {}", best.configuration.display_name()),
        format!("   Speedup: {:.2}x", best.speedup),
        format!("   Performance: {:.2} GFLOPS", best.configuration.gflops),
        format!("   Efficiency: {:.1}%", best.efficiency_pct),
    ]
}

/// Write the table followed by the best-configuration summary.
///
/// The summary is omitted when `metrics` is empty.
pub fn write_report<W: Write>(writer: &mut W, metrics: &[ConfigurationMetrics]) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);

    writeln!(writer)?;
    writeln!(writer, "{heavy}")?;
    writeln!(writer, "{}", title())?;
    writeln!(writer, "{heavy}")?;
    writeln!(writer, "{}", header())?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    for m in metrics {
        writeln!(writer, "{}", format_row(m))?;
    }
    writeln!(writer, "{heavy}")?;

    if let Some(best) = best_by_speedup(metrics) {
        writeln!(writer)?;
        for line in best_summary(best) {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(())
}

/// Render the full report into a `String`
pub fn render_report(metrics: &[ConfigurationMetrics]) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = write_report(&mut buf, metrics);
    String::from_utf8_lossy(&buf).into_owned()
}
