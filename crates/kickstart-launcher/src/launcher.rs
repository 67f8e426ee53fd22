//! Check-then-spawn sequence.

use std::io::{self, Write};
use std::path::PathBuf;

use console::style;
use kickstart_common_config::{CommandSource, KickstartConfig, TerminalStrategy};
use tracing::{debug, info, info_span, warn};

use crate::error::LaunchError;
use crate::failure::{self, FailureStrategy};
use crate::manifest::{resolve_start, StartPlan};
use crate::project::{self, ProjectDir};
use crate::terminal::{self, TerminalLauncher};

/// Used in messages when nothing better is known.
const FALLBACK_APP_NAME: &str = "application";

/// Inputs for one launch, taken from the effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub project_path: PathBuf,
    pub manifest: String,
    pub start_command: String,
    pub command_source: CommandSource,
    pub name: Option<String>,
}

impl LaunchSettings {
    pub fn from_config(config: &KickstartConfig) -> Self {
        Self {
            project_path: config.project.path.clone(),
            manifest: config.project.manifest.clone(),
            start_command: config.start.command.clone(),
            command_source: config.start.source,
            name: config.project.name.clone(),
        }
    }

    fn app_name(&self, package_name: Option<&str>) -> String {
        self.name
            .as_deref()
            .or(package_name)
            .map(str::to_string)
            .or_else(|| project::dir_name(&self.project_path))
            .unwrap_or_else(|| FALLBACK_APP_NAME.to_string())
    }
}

/// A project that passed both checks, with the command chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedLaunch {
    pub project: ProjectDir,
    pub plan: StartPlan,
    pub app_name: String,
}

/// A launch that reached the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Started {
    pub app_name: String,
    pub command: String,
    pub strategy: TerminalStrategy,
    pub project: PathBuf,
}

/// Result of [`Launcher::launch`]. Failures have already been reported.
#[derive(Debug)]
pub enum LaunchOutcome {
    Started(Started),
    Failed(LaunchError),
}

impl LaunchOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Started(_) => 0,
            Self::Failed(err) => err.exit_code(),
        }
    }
}

/// Validates the project directory and opens it in a new terminal window.
pub struct Launcher {
    settings: LaunchSettings,
    terminal: Box<dyn TerminalLauncher>,
    on_failure: Box<dyn FailureStrategy>,
}

impl Launcher {
    pub fn new(
        settings: LaunchSettings,
        terminal: Box<dyn TerminalLauncher>,
        on_failure: Box<dyn FailureStrategy>,
    ) -> Self {
        Self {
            settings,
            terminal,
            on_failure,
        }
    }

    /// Launcher wired to the real terminal and stdin for `config`.
    pub fn from_config(config: &KickstartConfig) -> Self {
        let strategy = config.terminal.resolved_strategy();
        debug!(%strategy, "terminal strategy selected");
        Self::new(
            LaunchSettings::from_config(config),
            terminal::for_strategy(strategy, &config.terminal.posix_program),
            failure::from_policy(config.on_failure),
        )
    }

    pub fn strategy(&self) -> TerminalStrategy {
        self.terminal.strategy()
    }

    /// Run the existence and manifest checks and pick the start command.
    ///
    /// Touches nothing but the filesystem; never spawns.
    pub fn check(&self) -> Result<CheckedLaunch, LaunchError> {
        let project = ProjectDir::locate(&self.settings.project_path, &self.settings.manifest)?;
        let plan = resolve_start(
            self.settings.command_source,
            &self.settings.start_command,
            project.manifest_path(),
        );
        let app_name = self.settings.app_name(plan.package_name.as_deref());

        Ok(CheckedLaunch {
            project,
            plan,
            app_name,
        })
    }

    /// Check the project, enter it, and spawn the terminal once.
    ///
    /// Errors are printed to `console` and handed to the failure strategy;
    /// they never escape as `Err`.
    pub fn launch(&mut self, console: &mut dyn Write) -> LaunchOutcome {
        let span = info_span!("launch", project = %self.settings.project_path.display());
        let _enter = span.enter();

        let (result, app_name) = match self.check() {
            Ok(checked) => {
                let app_name = checked.app_name.clone();
                (self.start(checked), app_name)
            }
            Err(err) => (Err(err), self.settings.app_name(None)),
        };
        match result {
            Ok(started) => {
                if let Err(err) = writeln!(
                    console,
                    "{} started successfully!",
                    style(&started.app_name).green().bold()
                ) {
                    warn!(error = %err, "failed to write status");
                }
                LaunchOutcome::Started(started)
            }
            Err(err) => {
                info!(error = %err, "launch failed");
                if let Err(io_err) = self.report(console, &err, &app_name) {
                    warn!(error = %io_err, "failed to report launch error");
                }
                LaunchOutcome::Failed(err)
            }
        }
    }

    fn start(&self, checked: CheckedLaunch) -> Result<Started, LaunchError> {
        let root = checked.project.root();
        std::env::set_current_dir(root).map_err(|source| LaunchError::SpawnFailure {
            context: format!("failed to enter {}", root.display()),
            source,
        })?;
        debug!(cwd = %root.display(), "working directory changed");

        let strategy = self.terminal.strategy();
        info!(command = %checked.plan.command, %strategy, "starting");
        self.terminal.spawn(&checked.plan.command)?;

        Ok(Started {
            app_name: checked.app_name,
            command: checked.plan.command,
            strategy,
            project: checked.project.root().to_path_buf(),
        })
    }

    fn report(
        &mut self,
        console: &mut dyn Write,
        err: &LaunchError,
        app_name: &str,
    ) -> io::Result<()> {
        match err {
            LaunchError::SpawnFailure { .. } => {
                writeln!(
                    console,
                    "{} {err}",
                    style(format!("Error starting {app_name}:")).red().bold()
                )?;
            }
            _ => writeln!(console, "{} {err}", style("Error:").red().bold())?,
        }
        if let Some(hint) = err.hint() {
            writeln!(console, "{hint}")?;
        }
        self.on_failure.on_failure(console)
    }
}
