//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with temporary directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("kickstart.yaml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Create a config file
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(&self.config_path, config).expect("Failed to write config");
        self
    }

    /// Create a config that never pauses
    pub fn with_default_config(self) -> Self {
        self.with_config("on_failure: return\n")
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a project directory, with a `package.json` when `manifest` is given
    pub fn project(&self, name: &str, manifest: Option<&str>) -> PathBuf {
        let root = self.path().join(name);
        std::fs::create_dir_all(&root).expect("Failed to create project dir");
        if let Some(contents) = manifest {
            std::fs::write(root.join("package.json"), contents).expect("Failed to write manifest");
        }
        root
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("kickstart").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("KICKSTART_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .env_remove("KICKSTART_LOG_LEVEL")
            .env("NO_COLOR", "1"); // Disable colors for predictable output
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
