//! What happens after a failure has been reported to the user.

use std::io::{self, BufRead, StdinLock, Write};

use kickstart_common_config::FailurePolicy;

/// Runs once, after the error message has been printed.
pub trait FailureStrategy {
    fn on_failure(&mut self, console: &mut dyn Write) -> io::Result<()>;
}

/// Wait for a line (or end of input) before letting the process exit.
#[derive(Debug)]
pub struct PauseForUser<R> {
    input: R,
}

impl<R: BufRead> PauseForUser<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl PauseForUser<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> FailureStrategy for PauseForUser<R> {
    fn on_failure(&mut self, console: &mut dyn Write) -> io::Result<()> {
        write!(console, "Press Enter to exit...")?;
        console.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}

/// Exit without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnImmediately;

impl FailureStrategy for ReturnImmediately {
    fn on_failure(&mut self, _console: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Strategy for a configured policy, pausing on the process's stdin.
pub fn from_policy(policy: FailurePolicy) -> Box<dyn FailureStrategy> {
    match policy {
        FailurePolicy::Pause => Box::new(PauseForUser::stdin()),
        FailurePolicy::Return => Box::new(ReturnImmediately),
    }
}
