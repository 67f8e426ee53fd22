//! Config command implementation.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand, ValueHint};
use kickstart_common_config::KickstartConfig;

use crate::cli::CommandContext;
use crate::error::CliError;

/// Manage configuration
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file location
    Path,

    /// Print the effective configuration as YAML
    Show,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for `config init`
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory to record in the new file
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub project: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl ConfigCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        match self {
            Self::Path => {
                println!("{}", ctx.loader.path().display());
                Ok(())
            }
            Self::Show => {
                let config = ctx.load_config()?;
                print!("{}", config.to_yaml()?);
                Ok(())
            }
            Self::Init(args) => args.execute(ctx),
        }
    }
}

impl InitArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let path = ctx.loader.path();
        if path.exists() && !self.force {
            return Err(CliError::user_with_hint(
                format!("config file already exists: {}", path.display()),
                "Pass --force to overwrite it",
            ));
        }

        let mut config = KickstartConfig::default();
        if let Some(project) = &self.project {
            config.project.path = absolute(project)?;
        }

        ctx.loader.save(&config)?;
        println!("Wrote {}", path.display());
        Ok(())
    }
}

fn absolute(path: &std::path::Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;
    Ok(cwd.join(path))
}
