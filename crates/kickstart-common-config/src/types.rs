//! Configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickstartConfig {
    /// Target project.
    pub project: ProjectConfig,
    /// Start command selection.
    pub start: StartConfig,
    /// Terminal window settings.
    pub terminal: TerminalConfig,
    /// What to do after a failed launch has been reported.
    pub on_failure: FailurePolicy,
}

/// Target project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project root directory.
    pub path: PathBuf,
    /// File whose presence marks `path` as a project root.
    pub manifest: String,
    /// Display name used in status messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            manifest: "package.json".to_string(),
            name: None,
        }
    }
}

/// Start command configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Command run inside the new terminal window.
    pub command: String,
    /// Where the command comes from.
    pub source: CommandSource,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            command: "npm run start".to_string(),
            source: CommandSource::default(),
        }
    }
}

/// Where the start command is taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandSource {
    /// Always use `start.command`.
    #[default]
    Fixed,
    /// Prefer a script declared by the project manifest.
    Manifest,
}

/// Terminal window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Forced strategy. Detected from the host platform when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<TerminalStrategy>,
    /// Terminal emulator used by the POSIX strategy.
    pub posix_program: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            strategy: None,
            posix_program: "gnome-terminal".to_string(),
        }
    }
}

impl TerminalConfig {
    /// The configured strategy, or the one matching the host platform.
    pub fn resolved_strategy(&self) -> TerminalStrategy {
        self.strategy.unwrap_or_else(TerminalStrategy::detect)
    }
}

/// Platform mechanism used to open a window running a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalStrategy {
    /// New console window through `cmd`.
    Windows,
    /// Terminal emulator running an interactive shell.
    Posix,
}

impl TerminalStrategy {
    /// Strategy for the platform this binary runs on.
    pub fn detect() -> Self {
        Self::for_family(std::env::consts::FAMILY)
    }

    /// Strategy for an OS family name as reported by `std::env::consts::FAMILY`.
    pub fn for_family(family: &str) -> Self {
        if family.eq_ignore_ascii_case("windows") {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Lowercase name, as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Posix => "posix",
        }
    }
}

impl fmt::Display for TerminalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior after a failure message has been printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Wait for the user to press Enter.
    #[default]
    Pause,
    /// Exit straight away.
    Return,
}
