//! Opening a new terminal window that runs the start command.
//!
//! Exactly one [`TerminalLauncher`] is built per run, from a
//! [`TerminalStrategy`] resolved at startup. The spawned process is never
//! waited on and inherits the launcher's working directory. A POSIX emulator
//! also gets null stdio and its own process group. A Windows console keeps
//! the stdio of the console it creates.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use kickstart_common_config::TerminalStrategy;
use tracing::info;

use crate::error::LaunchError;

/// Opens a visible window running a command.
#[cfg_attr(test, mockall::automock)]
pub trait TerminalLauncher {
    /// Strategy this launcher implements.
    fn strategy(&self) -> TerminalStrategy;

    /// Start `start_command` in a new window without waiting for it.
    fn spawn(&self, start_command: &str) -> Result<(), LaunchError>;
}

/// Build the launcher for `strategy`.
///
/// `posix_program` is only used by [`TerminalStrategy::Posix`].
pub fn for_strategy(strategy: TerminalStrategy, posix_program: &str) -> Box<dyn TerminalLauncher> {
    match strategy {
        TerminalStrategy::Windows => Box::new(WindowsConsole),
        TerminalStrategy::Posix => Box::new(PosixTerminal::new(posix_program)),
    }
}

/// A terminal process ready to spawn.
#[derive(Debug)]
pub struct TerminalCommand {
    pub command: Command,
    /// Replace stdin, stdout and stderr with null before spawning.
    pub detach_stdio: bool,
}

/// New console window through `cmd /K`, which stays open after the command exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsConsole;

impl WindowsConsole {
    const PROGRAM: &'static str = "cmd";

    /// `cmd /K <start command>`, passed to `cmd` as one unquoted argument.
    ///
    /// Stdio is left alone: `cmd /K` must read from the new console.
    pub fn build_command(&self, start_command: &str) -> TerminalCommand {
        let mut command = Command::new(Self::PROGRAM);
        command.arg("/K");

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NEW_CONSOLE: u32 = 0x00000010;
            command.raw_arg(start_command).creation_flags(CREATE_NEW_CONSOLE);
        }
        #[cfg(not(windows))]
        command.arg(start_command);

        TerminalCommand {
            command,
            detach_stdio: false,
        }
    }
}

impl TerminalLauncher for WindowsConsole {
    fn strategy(&self) -> TerminalStrategy {
        TerminalStrategy::Windows
    }

    fn spawn(&self, start_command: &str) -> Result<(), LaunchError> {
        spawn_detached(self.build_command(start_command))
    }
}

/// How an emulator expects the command it should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExecStyle {
    /// `program -- cmd args...`
    DoubleDash,
    /// `program -e cmd args...`
    ExecFlag,
    /// `program cmd args...`
    Positional,
    /// `program start -- cmd args...`
    StartSubcommand,
}

/// Terminal emulator running an interactive shell that outlives the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosixTerminal {
    program: String,
}

impl PosixTerminal {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn exec_style(&self) -> ExecStyle {
        let name = Path::new(&self.program)
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or(self.program.as_str());

        match name {
            "gnome-terminal" | "kgx" | "ptyxis" => ExecStyle::DoubleDash,
            "kitty" => ExecStyle::Positional,
            "wezterm" => ExecStyle::StartSubcommand,
            _ => ExecStyle::ExecFlag,
        }
    }

    pub fn build_command(&self, start_command: &str) -> TerminalCommand {
        let mut command = Command::new(&self.program);
        match self.exec_style() {
            ExecStyle::DoubleDash => {
                command.arg("--");
            }
            ExecStyle::ExecFlag => {
                command.arg("-e");
            }
            ExecStyle::Positional => {}
            ExecStyle::StartSubcommand => {
                command.args(["start", "--"]);
            }
        }
        command
            .arg("bash")
            .arg("-c")
            .arg(format!("{start_command}; exec bash"));

        TerminalCommand {
            command,
            detach_stdio: true,
        }
    }
}

impl Default for PosixTerminal {
    fn default() -> Self {
        Self::new("gnome-terminal")
    }
}

impl TerminalLauncher for PosixTerminal {
    fn strategy(&self) -> TerminalStrategy {
        TerminalStrategy::Posix
    }

    fn spawn(&self, start_command: &str) -> Result<(), LaunchError> {
        spawn_detached(self.build_command(start_command))
    }
}

fn spawn_detached(terminal: TerminalCommand) -> Result<(), LaunchError> {
    let TerminalCommand {
        mut command,
        detach_stdio,
    } = terminal;

    if detach_stdio {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
    }

    let program = command.get_program().to_string_lossy().into_owned();
    let child = command
        .spawn()
        .map_err(|err| LaunchError::spawn(&program, err))?;

    info!(%program, pid = child.id(), "terminal spawned");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(terminal: &TerminalCommand) -> Vec<String> {
        terminal
            .command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_windows_console_command() {
        let terminal = WindowsConsole.build_command("npm run start");
        assert_eq!(terminal.command.get_program(), "cmd");
        assert_eq!(args(&terminal), ["/K", "npm run start"]);
        assert!(terminal.command.get_current_dir().is_none());
    }

    #[test]
    fn test_windows_console_keeps_its_stdio() {
        let terminal = WindowsConsole.build_command("npm run start");
        assert!(!terminal.detach_stdio);
    }

    #[test]
    fn test_windows_console_keeps_quoted_command_whole() {
        let terminal = WindowsConsole.build_command(r#"npm run start -- --title "Document Organiser""#);
        assert_eq!(
            args(&terminal),
            ["/K", r#"npm run start -- --title "Document Organiser""#]
        );
    }

    #[test]
    fn test_gnome_terminal_command() {
        let terminal = PosixTerminal::default().build_command("npm run start");
        assert_eq!(terminal.command.get_program(), "gnome-terminal");
        assert_eq!(
            args(&terminal),
            ["--", "bash", "-c", "npm run start; exec bash"]
        );
        assert!(terminal.detach_stdio);
        assert!(terminal.command.get_current_dir().is_none());
    }

    #[test]
    fn test_exec_flag_terminals() {
        for program in ["xterm", "konsole", "x-terminal-emulator", "alacritty", "/usr/bin/xterm"] {
            let terminal = PosixTerminal::new(program).build_command("npm run dev");
            assert_eq!(
                args(&terminal),
                ["-e", "bash", "-c", "npm run dev; exec bash"],
                "unexpected args for {program}"
            );
        }
    }

    #[test]
    fn test_kitty_takes_command_positionally() {
        let terminal = PosixTerminal::new("kitty").build_command("npm run start");
        assert_eq!(args(&terminal), ["bash", "-c", "npm run start; exec bash"]);
    }

    #[test]
    fn test_wezterm_uses_start_subcommand() {
        let terminal = PosixTerminal::new("/usr/bin/wezterm").build_command("npm run start");
        assert_eq!(
            args(&terminal),
            ["start", "--", "bash", "-c", "npm run start; exec bash"]
        );
    }

    #[test]
    fn test_strategy_selects_exactly_one_variant() {
        let windows = for_strategy(TerminalStrategy::Windows, "gnome-terminal");
        assert_eq!(windows.strategy(), TerminalStrategy::Windows);

        let posix = for_strategy(TerminalStrategy::Posix, "konsole");
        assert_eq!(posix.strategy(), TerminalStrategy::Posix);
    }

    #[test]
    fn test_missing_terminal_program_is_spawn_failure() {
        let terminal = PosixTerminal::new("kickstart-no-such-terminal-emulator");
        match terminal.spawn("npm run start").unwrap_err() {
            LaunchError::SpawnFailure { context, .. } => {
                assert!(context.contains("kickstart-no-such-terminal-emulator"));
            }
            other => panic!("Expected SpawnFailure, got {other:?}"),
        }
    }
}
