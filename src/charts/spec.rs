//! Chart requests and throughput column naming.

use std::path::{Path, PathBuf};

/// Suffix appended to a title to get its throughput column.
pub const THROUGHPUT_SUFFIX: &str = " Throughput";

/// Titles whose throughput column does not follow `"<title> Throughput"`.
/// The Get benchmark records its results under the binary search header.
pub const COLUMN_OVERRIDES: &[(&str, &str)] = &[("Get", "Binary Search Throughput")];

/// Name of the column holding the throughput values for `title`.
pub fn throughput_column(title: &str) -> String {
    COLUMN_OVERRIDES
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, column)| column.to_string())
        .unwrap_or_else(|| format!("{title}{THROUGHPUT_SUFFIX}"))
}

/// One rendering request: where to read, where to write, and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub title: String,
}

impl ChartSpec {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            title: title.into(),
        }
    }

    /// Same request with both paths resolved against the given directories.
    pub fn relocated(&self, data_dir: &Path, out_dir: &Path) -> Self {
        Self {
            source: data_dir.join(&self.source),
            destination: out_dir.join(&self.destination),
            title: self.title.clone(),
        }
    }

    pub fn throughput_column(&self) -> String {
        throughput_column(&self.title)
    }

    pub fn chart_title(&self) -> String {
        format!("{} Throughput vs Data Size (Log Scale)", self.title)
    }

    /// Y-axis label. Always derived from the title, even for overridden columns.
    pub fn y_label(&self) -> String {
        format!("{}{THROUGHPUT_SUFFIX}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_reads_binary_search_column() {
        assert_eq!(throughput_column("Get"), "Binary Search Throughput");
    }

    #[test]
    fn other_titles_use_suffix() {
        assert_eq!(throughput_column("Put"), "Put Throughput");
        assert_eq!(throughput_column("Scan"), "Scan Throughput");
        assert_eq!(throughput_column("Delete"), "Delete Throughput");
        // Lookup is exact; case variants are not overridden.
        assert_eq!(throughput_column("get"), "get Throughput");
    }

    #[test]
    fn labels_follow_title() {
        let spec = ChartSpec::new("experiment3_Get.csv", "get_plot.png", "Get");
        assert_eq!(spec.throughput_column(), "Binary Search Throughput");
        assert_eq!(spec.chart_title(), "Get Throughput vs Data Size (Log Scale)");
        assert_eq!(spec.y_label(), "Get Throughput");
    }

    #[test]
    fn relocated_joins_directories() {
        let spec = ChartSpec::new("experiment3_Put.csv", "put_plot.png", "Put");
        let moved = spec.relocated(Path::new("results"), Path::new("plots"));
        assert_eq!(moved.source, Path::new("results/experiment3_Put.csv"));
        assert_eq!(moved.destination, Path::new("plots/put_plot.png"));
        assert_eq!(moved.title, "Put");
    }
}
