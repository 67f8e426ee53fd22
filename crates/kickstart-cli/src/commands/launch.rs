//! Launch command implementation.

use std::io::{self, IsTerminal};

use clap::Args;
use kickstart_common_config::{FailurePolicy, KickstartConfig};
use kickstart_launcher::{LaunchOutcome, Launcher};
use tracing::debug;

use super::ProjectOverrides;
use crate::cli::CommandContext;
use crate::error::CliError;

/// Check the project and open it in a new terminal
#[derive(Debug, Default, PartialEq, Eq, Args)]
pub struct LaunchCommand {
    #[command(flatten)]
    pub project: ProjectOverrides,

    /// Exit straight after an error instead of waiting for Enter
    #[arg(long)]
    pub no_pause: bool,
}

impl LaunchCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let config = self.effective_config(ctx.load_config()?, io::stdin().is_terminal())?;

        let mut launcher = Launcher::from_config(&config);
        let mut stdout = io::stdout().lock();
        match launcher.launch(&mut stdout) {
            LaunchOutcome::Started(started) => {
                debug!(command = %started.command, strategy = %started.strategy, "launch complete");
                Ok(())
            }
            LaunchOutcome::Failed(source) => Err(CliError::Launch {
                source,
                reported: true,
            }),
        }
    }

    /// Apply flags and validate. Pausing needs someone at the keyboard.
    fn effective_config(
        &self,
        mut config: KickstartConfig,
        interactive: bool,
    ) -> Result<KickstartConfig, CliError> {
        self.project.apply(&mut config);
        if self.no_pause || !interactive {
            config.on_failure = FailurePolicy::Return;
        }
        config.validate()?;
        config.require_project_path()?;
        Ok(config)
    }
}
