//! Static Chart Renderer
//! Draws throughput-vs-data-size charts with plotters and saves them as images.
//!
//! Layout (800x800):
//! 1. Title: "{title} Throughput vs Data Size (Log Scale)" centered on top
//! 2. Log-scale X axis with fixed power-of-two ticks 2..1024
//! 3. One line series with circular markers
//!
//! The chart is drawn into an in-memory RGB buffer first so that nothing is
//! written to the destination unless drawing succeeded.

use crate::charts::{tick_label, ChartLayout, ChartSpec};
use crate::data::{LoaderError, ThroughputLoader, DATA_SIZE_COLUMN};
use image::{ImageError, RgbImage};
use log::{info, warn};
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Figure size in pixels (8x8 inches at 100 dpi).
pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 800;

const FONT: &str = "sans-serif";
const TITLE_FONT_SIZE: u32 = 20;
const AXIS_DESC_FONT_SIZE: u32 = 17;
const TICK_FONT_SIZE: u32 = 14;

// Series style
pub const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const LINE_WIDTH: u32 = 3;
const MARKER_RADIUS: i32 = 4;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to encode image: {0}")]
    Encode(ImageError),
    #[error("Pixel buffer does not match a {0}x{1} image")]
    Buffer(u32, u32),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(e.to_string())
    }
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Load `spec.source`, build the chart and write it to `spec.destination`.
    ///
    /// Returns the layout that was drawn. The destination is overwritten if it exists.
    pub fn render(spec: &ChartSpec) -> Result<ChartLayout, RenderError> {
        let loader = ThroughputLoader::load_csv(&spec.source)?;
        let series = loader.xy_points(DATA_SIZE_COLUMN, &spec.throughput_column())?;
        let layout = ChartLayout::new(spec, series);

        let skipped = layout.skipped_points();
        if skipped > 0 {
            warn!(
                "{}: {} of {} points cannot be drawn on a log axis and were skipped",
                spec.source.display(),
                skipped,
                layout.series.len()
            );
        }

        Self::save(&layout, &spec.destination)?;
        info!(
            "Chart saved: {} ({} points from {})",
            spec.destination.display(),
            layout.series.len(),
            spec.source.display()
        );
        Ok(layout)
    }

    /// Encode a layout to `path`; the format follows the file extension.
    pub fn save(layout: &ChartLayout, path: &Path) -> Result<(), RenderError> {
        let buffer = Self::render_to_rgb(layout, CHART_WIDTH, CHART_HEIGHT)?;
        let img = RgbImage::from_raw(CHART_WIDTH, CHART_HEIGHT, buffer)
            .ok_or(RenderError::Buffer(CHART_WIDTH, CHART_HEIGHT))?;

        img.save(path).map_err(|e| match e {
            ImageError::IoError(source) => RenderError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => RenderError::Encode(other),
        })
    }

    /// Draw a layout into a packed RGB buffer of `width * height * 3` bytes.
    pub fn render_to_rgb(
        layout: &ChartLayout,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;

            let x_coord = layout
                .x_range
                .clone()
                .log_scale()
                .with_key_points(layout.x_ticks.clone());

            let mut chart = ChartBuilder::on(&root)
                .caption(&layout.title, (FONT, TITLE_FONT_SIZE))
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(90)
                .build_cartesian_2d(x_coord, layout.y_range.clone())?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(layout.x_ticks.len())
                .x_label_formatter(&|x: &f64| tick_label(*x))
                .label_style((FONT, TICK_FONT_SIZE))
                .axis_desc_style((FONT, AXIS_DESC_FONT_SIZE))
                .x_desc(layout.x_label.as_str())
                .y_desc(layout.y_label.as_str())
                .draw()?;

            let points = layout.drawable_points();

            chart.draw_series(LineSeries::new(
                points.iter().copied(),
                LINE_COLOR.stroke_width(LINE_WIDTH),
            ))?;
            chart.draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_RADIUS, LINE_COLOR.filled())),
            )?;

            root.present()?;
        }
        Ok(buffer)
    }
}
