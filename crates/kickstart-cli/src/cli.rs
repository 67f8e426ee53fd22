//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use kickstart_common_config::{ConfigLoader, KickstartConfig};

use crate::commands::{CheckCommand, ConfigCommand, LaunchCommand};
use crate::error::CliError;

/// Kickstart - open a project's start command in a new terminal window
///
/// Checks that the configured project folder exists and contains its
/// manifest, then starts the project in a window of its own.
#[derive(Debug, Parser)]
#[command(
    name = "kickstart",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    help_template = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error log output"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "KICKSTART_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    // `launch` arguments for a run without a subcommand.
    #[command(flatten)]
    pub launch: LaunchCommand,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the project and open it in a new terminal (default)
    Launch(LaunchCommand),

    /// Check the project without starting anything
    Check(CheckCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Execute the selected command, defaulting to `launch`.
    pub fn execute(self) -> Result<(), CliError> {
        if self.command.is_some() && self.launch != LaunchCommand::default() {
            return Err(CliError::user_with_hint(
                "Launch options must follow the subcommand they belong to",
                "Write them after the subcommand, e.g. `kickstart check <PATH>`",
            ));
        }

        let ctx = CommandContext {
            loader: ConfigLoader::discover(self.config.as_deref()),
            verbose: self.verbose,
        };

        match self.command {
            Some(Command::Launch(cmd)) => cmd.execute(&ctx),
            Some(Command::Check(cmd)) => cmd.execute(&ctx),
            Some(Command::Config(cmd)) => cmd.execute(&ctx),
            None => self.launch.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub loader: ConfigLoader,
    pub verbose: u8,
}

impl CommandContext {
    /// Load the configuration file this run points at.
    pub fn load_config(&self) -> Result<KickstartConfig, CliError> {
        Ok(self.loader.load()?)
    }
}
