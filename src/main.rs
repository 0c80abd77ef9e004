//! Throughput Plot
//!
//! Renders the Put, Get and Scan throughput charts.

use clap::Parser;
use throughput_plot::cli::Cli;
use throughput_plot::driver::run_jobs;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run_jobs(&cli.jobs(), cli.viewer(), cli.keep_going)
}
