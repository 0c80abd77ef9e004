//! Runs a list of chart jobs in order.

use crate::charts::{ChartRenderer, ChartSpec};
use crate::display::Viewer;
use anyhow::{bail, Context, Result};
use log::{error, warn};

/// Render every job, showing each image right after it is saved.
///
/// Without `keep_going` the first failure is returned and later jobs are not
/// attempted. With it, failures are logged and reported together at the end.
pub fn run_jobs(jobs: &[ChartSpec], viewer: Viewer, keep_going: bool) -> Result<()> {
    let mut failed: Vec<&str> = Vec::new();

    for spec in jobs {
        let rendered = ChartRenderer::render(spec).with_context(|| {
            format!(
                "rendering {} chart from {}",
                spec.title,
                spec.source.display()
            )
        });

        match rendered {
            Ok(_) => {
                if let Err(e) = viewer.show(&spec.destination) {
                    warn!("{e}");
                }
            }
            Err(e) if keep_going => {
                error!("{e:#}");
                failed.push(&spec.title);
            }
            Err(e) => return Err(e),
        }
    }

    if !failed.is_empty() {
        bail!(
            "{} of {} charts failed: {}",
            failed.len(),
            jobs.len(),
            failed.join(", ")
        );
    }
    Ok(())
}
