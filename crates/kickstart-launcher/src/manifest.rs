//! `package.json` inspection used to pick the start command.

use std::collections::BTreeMap;
use std::path::Path;

use kickstart_common_config::CommandSource;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Scripts tried, in order, when the command comes from the manifest.
const SCRIPT_PREFERENCE: [&str; 2] = ["start", "dev"];

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The parts of a `package.json` the launcher cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// `npm run <script>` for the first preferred script the manifest declares.
    pub fn start_command(&self) -> Option<String> {
        SCRIPT_PREFERENCE
            .iter()
            .find(|script| self.scripts.contains_key(**script))
            .map(|script| format!("npm run {script}"))
    }
}

/// Start command and display name chosen for a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPlan {
    pub command: String,
    /// Package name, when the manifest was read and declares one.
    pub package_name: Option<String>,
}

/// Pick the start command for a project.
///
/// With [`CommandSource::Manifest`] a readable manifest that declares a known
/// script wins; any manifest problem falls back to `configured`.
pub fn resolve_start(source: CommandSource, configured: &str, manifest_path: &Path) -> StartPlan {
    let fixed = StartPlan {
        command: configured.to_string(),
        package_name: None,
    };

    if source == CommandSource::Fixed {
        return fixed;
    }

    let manifest = match PackageManifest::read(manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => {
            warn!(manifest = %manifest_path.display(), error = %err, "using configured start command");
            return fixed;
        }
    };

    match manifest.start_command() {
        Some(command) => {
            debug!(%command, "start command taken from manifest");
            StartPlan {
                command,
                package_name: manifest.name,
            }
        }
        None => {
            warn!(
                manifest = %manifest_path.display(),
                "manifest declares no start or dev script; using configured start command"
            );
            StartPlan {
                package_name: manifest.name,
                ..fixed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_manifest() {
        let manifest = PackageManifest::parse(
            r#"{"name": "document-organiser", "version": "1.0.0", "scripts": {"start": "node document_organiser.cjs"}}"#,
        )
        .unwrap();
        assert_eq!(manifest.name.as_deref(), Some("document-organiser"));
        assert_eq!(manifest.start_command().as_deref(), Some("npm run start"));
    }

    #[test]
    fn test_script_preference() {
        let manifest = PackageManifest::parse(r#"{"scripts": {"dev": "vite", "build": "vite build"}}"#)
            .unwrap();
        assert_eq!(manifest.start_command().as_deref(), Some("npm run dev"));

        let manifest =
            PackageManifest::parse(r#"{"scripts": {"dev": "vite", "start": "node ."}}"#).unwrap();
        assert_eq!(manifest.start_command().as_deref(), Some("npm run start"));

        let manifest = PackageManifest::parse("{}").unwrap();
        assert!(manifest.start_command().is_none());
    }

    #[test]
    fn test_fixed_source_ignores_manifest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"scripts": {"dev": "vite"}}"#).unwrap();

        let plan = resolve_start(CommandSource::Fixed, "npm run start", &path);
        assert_eq!(plan.command, "npm run start");
        assert!(plan.package_name.is_none());
    }

    #[test]
    fn test_manifest_source_uses_declared_script() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "organiser", "scripts": {"dev": "vite"}}"#).unwrap();

        let plan = resolve_start(CommandSource::Manifest, "npm run start", &path);
        assert_eq!(plan.command, "npm run dev");
        assert_eq!(plan.package_name.as_deref(), Some("organiser"));
    }

    #[test]
    fn test_manifest_source_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");

        fs::write(&path, "not json").unwrap();
        let plan = resolve_start(CommandSource::Manifest, "yarn start", &path);
        assert_eq!(plan.command, "yarn start");

        fs::write(&path, r#"{"name": "organiser", "scripts": {"test": "jest"}}"#).unwrap();
        let plan = resolve_start(CommandSource::Manifest, "yarn start", &path);
        assert_eq!(plan.command, "yarn start");
        assert_eq!(plan.package_name.as_deref(), Some("organiser"));
    }
}
