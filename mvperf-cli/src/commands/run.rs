//! Run command implementation: charts first, then the summary report

use super::{charts, report, RunContext};
use anyhow::Result;

/// Execute the full pipeline
pub fn execute(ctx: &RunContext) -> Result<()> {
    log::info!("Starting report generation");
    log::debug!("Context: {:?}", ctx);

    charts::render_charts(ctx)?;
    report::print_report(ctx.report_format)
}
