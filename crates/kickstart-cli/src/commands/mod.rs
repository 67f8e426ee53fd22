//! Command implementations.

mod check;
mod config;
mod launch;
mod overrides;

pub use check::CheckCommand;
pub use config::ConfigCommand;
pub use launch::LaunchCommand;
pub use overrides::{ProjectOverrides, TerminalArg};
