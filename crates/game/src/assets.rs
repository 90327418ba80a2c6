//! Optional visual asset discovery.
//!
//! Model and texture *loading* belongs to the presentation layer. The core
//! only records which optional assets exist on disk so a missing file
//! degrades to an invisible entity, never a failure: probes keep orbiting
//! (and jamming) whether or not their model can be drawn.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an optional asset could not be located.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    Missing(PathBuf),
}

/// Paths of the optional models the presentation layer may draw.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    pub probe_model: Option<PathBuf>,
    pub wreck_model: Option<PathBuf>,
}

impl AssetCatalog {
    /// Probe the filesystem under `root` for known optional assets. Missing
    /// files are logged and left as `None`.
    pub fn discover(root: &Path) -> Self {
        Self {
            probe_model: report(locate(root, "assets/models/probe/probe.obj")),
            wreck_model: report(locate(root, "assets/models/probe/probe_wreck.obj")),
        }
    }

    /// How many of the known optional assets were found.
    pub fn available_count(&self) -> usize {
        [&self.probe_model, &self.wreck_model]
            .iter()
            .filter(|p| p.is_some())
            .count()
    }
}

fn locate(root: &Path, relative: &str) -> Result<PathBuf, AssetError> {
    let path = root.join(relative);
    if path.is_file() {
        Ok(path)
    } else {
        Err(AssetError::Missing(path))
    }
}

fn report(result: Result<PathBuf, AssetError>) -> Option<PathBuf> {
    match result {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("{} (entity will not be drawn)", e);
            None
        }
    }
}
