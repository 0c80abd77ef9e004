//! Chart Layout Module
//! Resolves everything the renderer draws: labels, forced ticks, series and axis ranges.

use crate::charts::ChartSpec;
use std::ops::Range;

/// X ticks forced onto every chart, independent of the data range.
pub const X_TICKS: [f64; 10] = [
    2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0,
];

pub const X_LABEL: &str = "Data Size (log scale)";

/// Fraction of the axis span added on each side of the data.
const AXIS_MARGIN: f64 = 0.05;

/// Plain decimal label for an X tick.
pub fn tick_label(value: f64) -> String {
    format!("{value}")
}

/// A fully resolved throughput chart. Building one does no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One `(data size, throughput)` point per row, in file order.
    pub series: Vec<(f64, f64)>,
    pub x_ticks: Vec<f64>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl ChartLayout {
    pub fn new(spec: &ChartSpec, series: Vec<(f64, f64)>) -> Self {
        let x_range = log_axis_range(&series);
        let y_range = linear_axis_range(&series);

        Self {
            title: spec.chart_title(),
            x_label: X_LABEL.to_string(),
            y_label: spec.y_label(),
            series,
            x_ticks: X_TICKS.to_vec(),
            x_range,
            y_range,
        }
    }

    pub fn x_tick_labels(&self) -> Vec<String> {
        self.x_ticks.iter().copied().map(tick_label).collect()
    }

    /// Points that can be placed on a log X axis.
    pub fn drawable_points(&self) -> Vec<(f64, f64)> {
        self.series
            .iter()
            .copied()
            .filter(|&(x, y)| is_drawable(x, y))
            .collect()
    }

    pub fn skipped_points(&self) -> usize {
        self.series
            .iter()
            .filter(|&&(x, y)| !is_drawable(x, y))
            .count()
    }
}

fn is_drawable(x: f64, y: f64) -> bool {
    x.is_finite() && x > 0.0 && y.is_finite()
}

/// Log X range covering the data and every forced tick, padded in log space.
fn log_axis_range(series: &[(f64, f64)]) -> Range<f64> {
    let mut lo = X_TICKS[0];
    let mut hi = X_TICKS[X_TICKS.len() - 1];
    for &(x, y) in series {
        if is_drawable(x, y) {
            lo = lo.min(x);
            hi = hi.max(x);
        }
    }

    let (lo_log, hi_log) = (lo.ln(), hi.ln());
    let pad = (hi_log - lo_log) * AXIS_MARGIN;
    (lo_log - pad).exp()..(hi_log + pad).exp()
}

fn linear_axis_range(series: &[(f64, f64)]) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(x, y) in series {
        if is_drawable(x, y) {
            min = min.min(y);
            max = max.max(y);
        }
    }
    if min.is_infinite() {
        return 0.0..1.0;
    }

    let span = if max > min {
        max - min
    } else if max != 0.0 {
        max.abs()
    } else {
        1.0
    };
    let pad = span * AXIS_MARGIN;
    (min - pad)..(max + pad)
}
