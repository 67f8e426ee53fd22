//! Configuration file loading and parsing.

use crate::types::KickstartConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
}

impl ConfigLoader {
    /// Loader for an explicitly named file. A missing file is an error.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    /// Loader for `explicit` when given, else for the default location.
    ///
    /// A missing file at the default location yields the default config.
    pub fn discover(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::new(path),
            None => Self {
                path: Self::default_path(),
                required: false,
            },
        }
    }

    /// `<user config dir>/kickstart/config.yaml`, or `.kickstart/config.yaml`
    /// when the platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("kickstart").join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from(".kickstart").join("config.yaml"))
    }

    /// Path this loader reads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the configuration.
    pub fn load(&self) -> Result<KickstartConfig, ConfigError> {
        if !self.path.exists() {
            if self.required {
                return Err(ConfigError::NotFound {
                    path: self.path.clone(),
                });
            }
            return Ok(KickstartConfig::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let config = Self::parse(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML text, expanding environment variables first.
    pub fn parse(contents: &str) -> Result<KickstartConfig, ConfigError> {
        let expanded = expand_env_vars(contents)?;

        // An empty or comment-only file is an empty mapping.
        if expanded.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(KickstartConfig::default());
        }

        serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })
    }

    /// Save configuration to file.
    pub fn save(&self, config: &KickstartConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, config.to_yaml()?)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::discover(None)
    }
}

impl KickstartConfig {
    /// Render as YAML, in the format [`ConfigLoader::load`] reads.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })
    }

    /// Validate configuration values that never depend on command-line overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start.command.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "start.command must not be empty".to_string(),
            });
        }

        let manifest = self.project.manifest.trim();
        if manifest.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "project.manifest must not be empty".to_string(),
            });
        }
        if manifest.contains('/') || manifest.contains('\\') {
            return Err(ConfigError::ValidationError {
                message: "project.manifest must be a file name, not a path".to_string(),
            });
        }

        if self.terminal.posix_program.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "terminal.posix_program must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// The project path, which must be set before a launch.
    pub fn require_project_path(&self) -> Result<&Path, ConfigError> {
        if self.project.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "project.path must be set (config file or PATH argument)".to_string(),
            });
        }
        Ok(&self.project.path)
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").expect("env var pattern is a valid regex")
    })
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
pub fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let mut result = content.to_string();

    for cap in env_var_pattern().captures_iter(content) {
        let full_match = &cap[0];
        let var_name = &cap[1];
        let default = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match default {
                Some(d) => d.to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result = result.replace(full_match, &value);
    }

    Ok(result)
}
