//! Kickstart launcher.
//!
//! Checks that a configured directory looks like a runnable project, then
//! opens a new terminal window running the project's start command. The
//! launcher never waits on, supervises, or reads from the process it starts.

pub mod error;
pub mod failure;
pub mod launcher;
pub mod manifest;
pub mod project;
pub mod terminal;

pub use error::LaunchError;
pub use failure::{FailureStrategy, PauseForUser, ReturnImmediately};
pub use launcher::{CheckedLaunch, LaunchOutcome, LaunchSettings, Launcher, Started};
pub use manifest::{PackageManifest, StartPlan};
pub use project::ProjectDir;
pub use terminal::{PosixTerminal, TerminalCommand, TerminalLauncher, WindowsConsole};
