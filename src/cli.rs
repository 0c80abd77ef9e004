//! Command line options.
//!
//! With no arguments the three benchmark charts are rendered from and to the
//! current directory and each one is shown after it is saved.

use crate::charts::ChartSpec;
use crate::display::Viewer;
use clap::Parser;
use std::path::PathBuf;

/// (source CSV, output image, title) for every chart produced by a run.
pub const DEFAULT_JOBS: [(&str, &str, &str); 3] = [
    ("experiment3_Put.csv", "put_plot.png", "Put"),
    ("experiment3_Get.csv", "get_plot.png", "Get"),
    ("experiment3_Scan.csv", "scan_plot.png", "Scan"),
];

#[derive(Parser, Debug)]
#[command(
    name = "throughput_plot",
    version,
    about = "Plot benchmark throughput against data size on a log scale"
)]
pub struct Cli {
    /// Directory containing the experiment CSV files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory the chart images are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Do not open the charts after saving them
    #[arg(long)]
    pub no_show: bool,

    /// Keep rendering the remaining charts when one fails
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    pub fn jobs(&self) -> Vec<ChartSpec> {
        DEFAULT_JOBS
            .iter()
            .map(|&(source, destination, title)| {
                ChartSpec::new(source, destination, title).relocated(&self.data_dir, &self.out_dir)
            })
            .collect()
    }

    pub fn viewer(&self) -> Viewer {
        if self.no_show {
            Viewer::Disabled
        } else {
            Viewer::System
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn no_arguments_reproduce_default_run() {
        let cli = Cli::try_parse_from(["throughput_plot"]).unwrap();
        assert_eq!(cli.viewer(), Viewer::System);
        assert!(!cli.keep_going);

        let jobs = cli.jobs();
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Put", "Get", "Scan"]);
        assert_eq!(jobs[1].source, Path::new("./experiment3_Get.csv"));
        assert_eq!(jobs[1].destination, Path::new("./get_plot.png"));
        assert_eq!(jobs[2].source, Path::new("./experiment3_Scan.csv"));
        assert_eq!(jobs[2].destination, Path::new("./scan_plot.png"));
    }

    #[test]
    fn directories_and_flags() {
        let cli = Cli::try_parse_from([
            "throughput_plot",
            "--data-dir",
            "results",
            "--out-dir",
            "plots",
            "--no-show",
            "--keep-going",
        ])
        .unwrap();

        assert_eq!(cli.viewer(), Viewer::Disabled);
        assert!(cli.keep_going);
        let jobs = cli.jobs();
        assert_eq!(jobs[0].source, Path::new("results/experiment3_Put.csv"));
        assert_eq!(jobs[0].destination, Path::new("plots/put_plot.png"));
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["throughput_plot", "extra.csv"]).is_err());
    }
}
