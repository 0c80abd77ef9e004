//! Throughput Plot - benchmark CSVs to log-scale line charts
//!
//! Reads the throughput results written by the storage benchmarks and renders
//! one throughput-vs-data-size chart per operation.

pub mod charts;
pub mod cli;
pub mod data;
pub mod display;
pub mod driver;
