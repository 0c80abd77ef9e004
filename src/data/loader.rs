//! CSV Data Loader Module
//! Loads benchmark result files with Polars and extracts numeric columns.

use log::debug;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// X-axis column shared by every benchmark file.
pub const DATA_SIZE_COLUMN: &str = "Data Size";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Column \"{column}\" not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },
}

/// A loaded benchmark table.
pub struct ThroughputLoader {
    df: DataFrame,
    file_path: PathBuf,
}

impl ThroughputLoader {
    /// Load a CSV file with a header row using Polars.
    pub fn load_csv(file_path: &Path) -> Result<Self, LoaderError> {
        if !file_path.exists() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        debug!(
            "loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            file_path.display()
        );

        Ok(Self {
            df,
            file_path: file_path.to_path_buf(),
        })
    }

    /// Get list of column names from the loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.height()
    }

    pub fn get_file_path(&self) -> &Path {
        &self.file_path
    }

    /// Values of a column as `f64`, one per row in file order.
    /// Null cells come back as NaN so the length always matches the row count.
    pub fn column_values(&self, column: &str) -> Result<Vec<f64>, LoaderError> {
        if !self.get_columns().iter().any(|c| c == column) {
            return Err(LoaderError::MissingColumn {
                column: column.to_string(),
                path: self.file_path.clone(),
            });
        }

        let values = self.df.column(column)?.cast(&DataType::Float64)?;
        let values = values.f64()?;

        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Pair two columns row by row.
    pub fn xy_points(&self, x_column: &str, y_column: &str) -> Result<Vec<(f64, f64)>, LoaderError> {
        let xs = self.column_values(x_column)?;
        let ys = self.column_values(y_column)?;
        Ok(xs.into_iter().zip(ys).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_columns_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "put.csv",
            "Data Size,Put Throughput\n8,300.5\n2,100\n1024,900\n",
        );

        let loader = ThroughputLoader::load_csv(&path).unwrap();
        assert_eq!(loader.get_row_count(), 3);
        assert_eq!(loader.get_columns(), vec!["Data Size", "Put Throughput"]);

        let points = loader.xy_points(DATA_SIZE_COLUMN, "Put Throughput").unwrap();
        assert_eq!(points, vec![(8.0, 300.5), (2.0, 100.0), (1024.0, 900.0)]);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");

        match ThroughputLoader::load_csv(&path) {
            Err(LoaderError::FileNotFound(p)) => assert_eq!(p, path),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("expected FileNotFound"),
        }
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "scan.csv", "Size,Scan Throughput\n2,10\n");

        let loader = ThroughputLoader::load_csv(&path).unwrap();
        let err = loader.column_values(DATA_SIZE_COLUMN).unwrap_err();
        match err {
            LoaderError::MissingColumn { column, .. } => assert_eq!(column, "Data Size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_cells_become_nan() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "get.csv",
            "Data Size,Binary Search Throughput\n2,5.5\n4,\n8,7.25\n",
        );

        let loader = ThroughputLoader::load_csv(&path).unwrap();
        let ys = loader.column_values("Binary Search Throughput").unwrap();
        assert_eq!(ys.len(), 3);
        assert_eq!(ys[0], 5.5);
        assert!(ys[1].is_nan());
        assert_eq!(ys[2], 7.25);
    }
}
