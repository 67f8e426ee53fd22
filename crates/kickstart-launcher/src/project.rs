//! Project directory checks.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LaunchError;

/// A directory that existed, and held its manifest, when it was located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    root: PathBuf,
    manifest: PathBuf,
}

impl ProjectDir {
    /// Check that `path` exists and contains `manifest`.
    ///
    /// The manifest is only tested for presence; its contents are not read.
    pub fn locate(path: impl AsRef<Path>, manifest: &str) -> Result<Self, LaunchError> {
        let root = path.as_ref().to_path_buf();
        if !root.exists() {
            return Err(LaunchError::PathNotFound { path: root });
        }

        let manifest_path = root.join(manifest);
        if !manifest_path.exists() {
            return Err(LaunchError::ManifestMissing {
                path: root,
                manifest: manifest.to_string(),
            });
        }

        debug!(root = %root.display(), manifest = %manifest_path.display(), "project located");
        Ok(Self {
            root,
            manifest: manifest_path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest
    }
}

/// Last component of `path`, if it has one.
pub(crate) fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}
