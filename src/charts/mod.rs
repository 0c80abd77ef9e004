//! Charts module - Chart layout and rendering

mod layout;
mod renderer;
mod spec;

pub use layout::{tick_label, ChartLayout, X_LABEL, X_TICKS};
pub use renderer::{ChartRenderer, RenderError, CHART_HEIGHT, CHART_WIDTH};
pub use spec::{throughput_column, ChartSpec, COLUMN_OVERRIDES};
