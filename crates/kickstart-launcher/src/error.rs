//! Launch errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a launch stopped. Every variant ends the run without spawning again.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("{manifest} not found in {}", path.display())]
    ManifestMissing { path: PathBuf, manifest: String },

    #[error("{context}: {source}")]
    SpawnFailure {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Create a spawn failure for `program`.
    pub fn spawn(program: impl AsRef<str>, source: io::Error) -> Self {
        Self::SpawnFailure {
            context: format!("failed to run {}", program.as_ref()),
            source,
        }
    }

    /// Follow-up line telling the user what to fix.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::PathNotFound { .. } => {
                Some("Please update the project path in your kickstart configuration.")
            }
            Self::ManifestMissing { .. } => Some("Make sure this is the correct project folder."),
            Self::SpawnFailure { .. } => None,
        }
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PathNotFound { .. } => 6,
            Self::ManifestMissing { .. } => 5,
            Self::SpawnFailure { .. } => 8,
        }
    }
}
