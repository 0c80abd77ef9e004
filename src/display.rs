//! Shows saved charts in the system's default image viewer.
//!
//! Display always happens after the image is on disk and is best effort:
//! a missing viewer or a headless session only produces a warning.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Cannot display {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    /// Hand the file to the desktop's default application.
    #[default]
    System,
    Disabled,
}

impl Viewer {
    pub fn show(self, path: &Path) -> Result<(), DisplayError> {
        match self {
            Viewer::System => open::that(path).map_err(|source| DisplayError::Unavailable {
                path: path.to_path_buf(),
                source,
            }),
            Viewer::Disabled => Ok(()),
        }
    }
}
