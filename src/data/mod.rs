//! Data module - CSV loading

mod loader;

pub use loader::{LoaderError, ThroughputLoader, DATA_SIZE_COLUMN};
