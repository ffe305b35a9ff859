//! Four-panel figure: time, GFLOPS, speedup and efficiency per configuration

use super::{Scale, PERFORMANCE_FIGURE_IN};
use crate::dataset::MATRIX_DIMENSION;
use crate::error::{Error, Result};
use crate::metrics::ConfigurationMetrics;
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const ORANGE: RGBColor = RGBColor(0xFF, 0xA5, 0x00);
const DARK_GREEN: RGBColor = RGBColor(0x00, 0x80, 0x00);

/// Room above the tallest bar for its value label and the legend box
const HEADROOM: f64 = 1.35;

/// Horizontal line drawn across a panel
struct Reference {
    y: f64,
    label: &'static str,
    color: RGBColor,
    /// Short dashes instead of long ones
    dotted: bool,
}

/// One bar panel of the figure
struct BarPanel {
    caption: &'static str,
    y_desc: &'static str,
    values: Vec<f64>,
    value_label: fn(f64) -> String,
    /// Gap between bar top and its value label, in data units
    label_offset: f64,
    y_max: f64,
    references: Vec<Reference>,
    /// Ideal-speedup curve drawn over the bars
    ideal: Option<Vec<f64>>,
    /// Corner of the legend box, clear of the tallest bars and markers
    legend: SeriesLabelPosition,
}

/// Render the performance figure to `path`
pub fn render_performance(
    path: &Path,
    metrics: &[ConfigurationMetrics],
    scale: Scale,
) -> Result<()> {
    if metrics.is_empty() {
        return Err(Error::InvalidSetting("no configurations to plot".to_string()));
    }

    let root =
        BitMapBackend::new(path, scale.figure(PERFORMANCE_FIGURE_IN)).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!(
        "Performance Analysis - Matrix-Vector Multiplication ({0}×{0})",
        MATRIX_DIMENSION
    );
    let body = root.titled(&title, scale.bold(16.0))?;
    let areas = body.split_evenly((2, 2));

    for (area, panel) in areas.iter().zip(panels(metrics)) {
        draw_panel(area, metrics, &panel, scale)?;
    }

    root.present()?;
    Ok(())
}

fn panels(metrics: &[ConfigurationMetrics]) -> [BarPanel; 4] {
    let baseline = &metrics[0].configuration;
    let times: Vec<f64> = metrics.iter().map(|m| m.configuration.time_ms).collect();
    let gflops: Vec<f64> = metrics.iter().map(|m| m.configuration.gflops).collect();
    let speedups: Vec<f64> = metrics.iter().map(|m| m.speedup).collect();
    let efficiencies: Vec<f64> = metrics.iter().map(|m| m.efficiency_pct).collect();
    let ideal: Vec<f64> = metrics
        .iter()
        .map(|m| m.configuration.ideal_speedup())
        .collect();

    let ideal_max = ideal.iter().copied().fold(0.0, f64::max);

    [
        BarPanel {
            caption: "Execution time",
            y_desc: "Time (ms)",
            y_max: headroom(&times),
            values: times,
            value_label: |v| format!("{v:.2}"),
            label_offset: 0.1,
            references: vec![Reference {
                y: baseline.time_ms,
                label: "Sequential baseline",
                color: RED,
                dotted: false,
            }],
            ideal: None,
            legend: SeriesLabelPosition::UpperRight,
        },
        BarPanel {
            caption: "Performance (GFLOPS)",
            y_desc: "GFLOPS",
            y_max: headroom(&gflops),
            values: gflops,
            value_label: |v| format!("{v:.2}"),
            label_offset: 0.05,
            references: vec![Reference {
                y: baseline.gflops,
                label: "Sequential baseline",
                color: RED,
                dotted: false,
            }],
            ideal: None,
            legend: SeriesLabelPosition::UpperRight,
        },
        BarPanel {
            caption: "Speedup vs Sequential",
            y_desc: "Speedup",
            y_max: ideal_max + 1.0,
            values: speedups,
            value_label: |v| format!("{v:.2}x"),
            label_offset: 0.05,
            references: Vec::new(),
            ideal: Some(ideal),
            legend: SeriesLabelPosition::UpperLeft,
        },
        BarPanel {
            caption: "Parallel Efficiency",
            y_desc: "Efficiency (%)",
            y_max: 120.0,
            values: efficiencies,
            value_label: |v| format!("{v:.1}%"),
            label_offset: 2.0,
            references: vec![
                Reference {
                    y: 100.0,
                    label: "Ideal efficiency (100%)",
                    color: DARK_GREEN,
                    dotted: false,
                },
                Reference {
                    y: 50.0,
                    label: "Acceptable threshold (50%)",
                    color: ORANGE,
                    dotted: true,
                },
            ],
            ideal: None,
            legend: SeriesLabelPosition::UpperRight,
        },
    ]
}

/// Upper y bound leaving room for the value labels
fn headroom(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        max * HEADROOM
    } else {
        1.0
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    metrics: &[ConfigurationMetrics],
    panel: &BarPanel,
    scale: Scale,
) -> Result<()> {
    let n = metrics.len();
    let labels: Vec<String> = metrics
        .iter()
        .map(|m| m.configuration.display_name())
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(panel.caption, scale.bold(12.0))
        .margin(scale.px(8.0))
        .x_label_area_size(scale.px(36.0))
        .y_label_area_size(scale.px(40.0))
        .build_cartesian_2d((0..n - 1).into_segmented(), 0.0..panel.y_max)?;

    let x_label = |v: &SegmentValue<usize>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            labels.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(TRANSPARENT)
        .x_labels(n)
        .x_label_formatter(&x_label)
        .x_desc("Configuration")
        .y_desc(panel.y_desc)
        .axis_desc_style(scale.bold(10.0))
        .label_style(scale.regular(9.0))
        .draw()?;

    let gap = scale.px(10.0);
    let bar_corners = |i: usize, v: f64| {
        let right = if i + 1 == n {
            SegmentValue::Last
        } else {
            SegmentValue::Exact(i + 1)
        };
        [(SegmentValue::Exact(i), 0.0), (right, v)]
    };

    chart.draw_series(metrics.iter().zip(&panel.values).enumerate().map(
        |(i, (m, &v))| {
            let fill = m.configuration.color.mix(0.8).filled();
            let mut bar = Rectangle::new(bar_corners(i, v), fill);
            bar.set_margin(0, 0, gap, gap);
            bar
        },
    ))?;
    chart.draw_series(panel.values.iter().enumerate().map(|(i, &v)| {
        let mut outline = Rectangle::new(bar_corners(i, v), BLACK.stroke_width(scale.px(0.5)));
        outline.set_margin(0, 0, gap, gap);
        outline
    }))?;

    let value_style =
        TextStyle::from(scale.bold(8.0)).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(panel.values.iter().enumerate().map(|(i, &v)| {
        Text::new(
            (panel.value_label)(v),
            (SegmentValue::CenterOf(i), v + panel.label_offset),
            value_style.clone(),
        )
    }))?;

    let legend_len = scale.px(20.0) as i32;

    for reference in &panel.references {
        let style = reference.color.mix(0.5).stroke_width(scale.px(1.0));
        let (dash, spacing) = if reference.dotted {
            (scale.px(1.0), scale.px(2.0))
        } else {
            (scale.px(4.0), scale.px(2.0))
        };
        chart
            .draw_series(DashedLineSeries::new(
                [
                    (SegmentValue::Exact(0), reference.y),
                    (SegmentValue::Last, reference.y),
                ],
                dash,
                spacing,
                style,
            ))?
            .label(reference.label)
            .legend(move |(x, y)| {
                DashedPathElement::new(vec![(x, y), (x + legend_len, y)], dash, spacing, style)
            });
    }

    if let Some(ideal) = &panel.ideal {
        let style = RED.mix(0.6).stroke_width(scale.px(2.0));
        let (dash, spacing) = (scale.px(4.0), scale.px(2.0));
        let ideal_points = || {
            ideal
                .iter()
                .enumerate()
                .map(|(i, &y)| (SegmentValue::CenterOf(i), y))
        };
        chart
            .draw_series(DashedLineSeries::new(ideal_points(), dash, spacing, style))?
            .label("Ideal speedup")
            .legend(move |(x, y)| {
                DashedPathElement::new(vec![(x, y), (x + legend_len, y)], dash, spacing, style)
            });
        chart.draw_series(
            ideal_points().map(|p| Circle::new(p, scale.px(2.0), RED.mix(0.6).filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(panel.legend.clone())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(scale.regular(8.0))
        .draw()?;

    Ok(())
}
