//! Kickstart CLI
//!
//! Main entry point for the `kickstart` binary.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use kickstart_cli::cli::Cli;
use kickstart_common_log::{LogConfig, LogLevel};
use tracing::debug;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    init_tracing(&cli);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            if !e.is_reported() {
                let _ = e.print(&mut io::stderr());
            }
            e.exit_code()
        }
    }
}

fn init_tracing(cli: &Cli) {
    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet {
        config = config.with_level(LogLevel::from_verbosity(cli.verbose, cli.quiet));
    }

    if let Err(e) = kickstart_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
