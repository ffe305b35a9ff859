//! Log-log figure of execution time against matrix size

use super::{Scale, SCALABILITY_FIGURE_IN};
use crate::dataset::{ScalabilityDataset, MATRIX_SIZES};
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Point marker of a series, assigned in series order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Circle,
    Square,
    Triangle,
}

const MARKERS: [Marker; 3] = [Marker::Circle, Marker::Square, Marker::Triangle];

/// Chart caption, flagged when the data is not measured
pub fn caption(dataset: &ScalabilityDataset) -> String {
    let base = "Scalability: Execution time vs Matrix size";
    if dataset.estimated {
        format!("{base} (estimated)")
    } else {
        base.to_string()
    }
}

/// Log-axis bounds `((x_min, x_max), (y_min, y_max))` with some padding
/// around the data
fn axis_bounds(dataset: &ScalabilityDataset) -> ((f64, f64), (f64, f64)) {
    let points = || {
        dataset
            .series
            .iter()
            .flat_map(|s| s.points())
            .map(|(n, t)| (f64::from(n), t))
    };
    let (x_min, x_max) = points().fold((f64::INFINITY, 0.0_f64), |(lo, hi), (x, _)| {
        (lo.min(x), hi.max(x))
    });
    let (y_min, y_max) = points().fold((f64::INFINITY, 0.0_f64), |(lo, hi), (_, y)| {
        (lo.min(y), hi.max(y))
    });

    ((x_min * 0.7, x_max * 1.4), (y_min * 0.6, y_max * 1.8))
}

/// X-axis ticks, one per benchmarked matrix size
fn size_ticks() -> Vec<f64> {
    MATRIX_SIZES.iter().copied().map(f64::from).collect()
}

/// Tick label without trailing float noise: whole numbers from 1 up,
/// at most two decimals below
fn tick_label(value: f64) -> String {
    if value >= 1.0 {
        format!("{value:.0}")
    } else {
        let label = format!("{value:.2}");
        label.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Render the scalability figure to `path`
pub fn render_scalability(path: &Path, dataset: &ScalabilityDataset, scale: Scale) -> Result<()> {
    let root =
        BitMapBackend::new(path, scale.figure(SCALABILITY_FIGURE_IN)).into_drawing_area();
    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = axis_bounds(dataset);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption(dataset), scale.bold(14.0))
        .margin(scale.px(10.0))
        .x_label_area_size(scale.px(30.0))
        .y_label_area_size(scale.px(40.0))
        .build_cartesian_2d(
            (x_min..x_max).log_scale().with_key_points(size_ticks()),
            (y_min..y_max).log_scale(),
        )?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(BLACK.mix(0.08))
        .x_label_formatter(&|x| tick_label(*x))
        .y_label_formatter(&|y| tick_label(*y))
        .x_desc("Matrix size (N×N)")
        .y_desc("Execution time (ms)")
        .axis_desc_style(scale.bold(12.0))
        .label_style(scale.regular(10.0))
        .draw()?;

    let marker_size = scale.px(4.0) as i32;
    let legend_len = scale.px(20.0) as i32;

    for (series, marker) in dataset.series.iter().zip(MARKERS) {
        let points: Vec<(f64, f64)> = series.points().map(|(n, t)| (f64::from(n), t)).collect();
        let line = series.color.stroke_width(scale.px(2.0));
        let fill = series.color.filled();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line))?
            .label(series.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], line));

        match marker {
            Marker::Circle => chart.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, marker_size, fill)),
            )?,
            Marker::Square => chart.draw_series(points.iter().map(|&p| {
                EmptyElement::at(p)
                    + Rectangle::new(
                        [(-marker_size, -marker_size), (marker_size, marker_size)],
                        fill,
                    )
            }))?,
            Marker::Triangle => chart.draw_series(
                points
                    .iter()
                    .map(|&p| TriangleMarker::new(p, marker_size, fill)),
            )?,
        };
    }

    // Size labels on every other point of the first series
    if let Some(first) = dataset.series.first() {
        let offset = scale.px(10.0) as i32;
        let grey = BLACK.mix(0.7);
        let label_style = TextStyle::from(scale.regular(8.0))
            .color(&grey)
            .pos(Pos::new(HPos::Left, VPos::Bottom));

        chart.draw_series(
            first
                .points()
                .enumerate()
                .filter(|(i, _)| i % 2 == 0)
                .map(|(_, (n, t))| {
                    EmptyElement::at((f64::from(n), t))
                        + Text::new(format!("{n}×{n}"), (offset, -offset), label_style.clone())
                }),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(scale.regular(10.0))
        .draw()?;

    root.present()?;
    Ok(())
}
