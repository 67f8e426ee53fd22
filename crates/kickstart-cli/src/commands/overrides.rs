//! Command-line overrides for the project section of the configuration.

use std::path::PathBuf;

use clap::{Args, ValueEnum, ValueHint};
use kickstart_common_config::{CommandSource, KickstartConfig, TerminalStrategy};

/// Terminal strategy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TerminalArg {
    /// New console window through cmd
    Windows,
    /// Terminal emulator running bash
    Posix,
}

impl From<TerminalArg> for TerminalStrategy {
    fn from(arg: TerminalArg) -> Self {
        match arg {
            TerminalArg::Windows => Self::Windows,
            TerminalArg::Posix => Self::Posix,
        }
    }
}

/// Flags shared by `launch` and `check`. Each one overrides the config file.
#[derive(Debug, Default, PartialEq, Eq, Args)]
pub struct ProjectOverrides {
    /// Project directory
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,

    /// File that marks the directory as a project
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<String>,

    /// Command to run in the new terminal
    #[arg(long = "command", value_name = "CMD")]
    pub start_command: Option<String>,

    /// Prefer the start script declared in the manifest
    #[arg(long, conflicts_with = "start_command")]
    pub from_manifest: bool,

    /// Force a terminal strategy instead of detecting it
    #[arg(long, value_enum)]
    pub terminal: Option<TerminalArg>,

    /// Terminal emulator used by the posix strategy
    #[arg(long, value_name = "PROGRAM")]
    pub terminal_program: Option<String>,
}

impl ProjectOverrides {
    pub fn apply(&self, config: &mut KickstartConfig) {
        if let Some(path) = &self.path {
            config.project.path = path.clone();
        }
        if let Some(manifest) = &self.manifest {
            config.project.manifest = manifest.clone();
        }
        if let Some(command) = &self.start_command {
            config.start.command = command.clone();
            config.start.source = CommandSource::Fixed;
        }
        if self.from_manifest {
            config.start.source = CommandSource::Manifest;
        }
        if let Some(terminal) = self.terminal {
            config.terminal.strategy = Some(terminal.into());
        }
        if let Some(program) = &self.terminal_program {
            config.terminal.posix_program = program.clone();
        }
    }
}
