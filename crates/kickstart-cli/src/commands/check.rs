//! Check command implementation.

use std::io::{self, Write};

use clap::Args;
use console::style;
use kickstart_common_config::{FailurePolicy, TerminalStrategy};
use kickstart_launcher::Launcher;

use super::ProjectOverrides;
use crate::cli::CommandContext;
use crate::error::CliError;

/// Check the project without starting anything
#[derive(Debug, Default, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectOverrides,
}

impl CheckCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let mut config = ctx.load_config()?;
        self.project.apply(&mut config);
        config.on_failure = FailurePolicy::Return;
        config.validate()?;
        config.require_project_path()?;

        let launcher = Launcher::from_config(&config);
        let checked = launcher.check()?;
        let strategy = launcher.strategy();

        let mut out = io::stdout().lock();
        writeln!(out, "{} {} is ready to launch", style("✓").green(), checked.app_name)?;
        writeln!(out, "  Project:  {}", checked.project.root().display())?;
        writeln!(out, "  Command:  {}", checked.plan.command)?;
        match strategy {
            TerminalStrategy::Posix => writeln!(
                out,
                "  Terminal: {strategy} ({})",
                config.terminal.posix_program
            )?,
            TerminalStrategy::Windows => writeln!(out, "  Terminal: {strategy} (cmd)")?,
        }
        if ctx.verbose > 0 {
            writeln!(out, "  Manifest: {}", checked.project.manifest_path().display())?;
            if let Some(name) = &checked.plan.package_name {
                writeln!(out, "  Package:  {name}")?;
            }
        }

        Ok(())
    }
}
