//! CLI error handling and formatting.

use std::io::{self, Write};
use std::process::ExitCode;

use console::style;
use kickstart_common_config::ConfigError;
use kickstart_launcher::LaunchError;
use thiserror::Error;

/// CLI error type with rich context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<ConfigError>,
        hint: Option<String>,
    },

    /// A launch failure. `reported` is set once the launcher has already
    /// printed it for the user.
    #[error("{source}")]
    Launch {
        #[source]
        source: LaunchError,
        reported: bool,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    User {
        message: String,
        hint: Option<String>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Numeric exit status for this error
    pub fn code(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::Launch { source, .. } => source.exit_code(),
            Self::User { .. } => 1,
            Self::Other(_) => 1,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::User { hint, .. } => hint.as_deref(),
            Self::Launch { source, .. } => source.hint(),
            _ => None,
        }
    }

    /// Whether the user has already seen this error.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Launch { reported: true, .. })
    }

    /// Create a user error with hint
    pub fn user_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Write the message and hint for the user.
    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} {self}", style("Error:").red().bold())?;
        if let Some(hint) = self.hint() {
            writeln!(out, "{} {hint}", style("hint:").cyan())?;
        }
        Ok(())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::NotFound { .. } => {
                "Create one with `kickstart config init` or drop --config"
            }
            _ => "Check your kickstart configuration file",
        };
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(err),
            hint: Some(hint.to_string()),
        }
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        Self::Launch {
            source: err,
            reported: false,
        }
    }
}
