use mockall::automock;
use std::ffi::OsStr;

/// Captured result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// stdout followed by stderr, the way a terminal would have shown them
    #[must_use]
    pub fn combined(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (_, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr),
        }
    }
}

/// Interface for running external commands to facilitate testing
///
/// A spawn failure is an `Err`; a process that ran but exited non-zero is an
/// `Ok` with `success == false`, so callers can still print what it wrote.
#[automock]
pub trait CommandRunner {
    fn run(
        &self,
        program: &OsStr,
        args: &[String],
    ) -> Result<CommandOutput, Box<dyn std::error::Error>>;
}

/// Default implementation of `CommandRunner` that spawns real processes
pub struct DefaultCommandRunner;

impl CommandRunner for DefaultCommandRunner {
    fn run(
        &self,
        program: &OsStr,
        args: &[String],
    ) -> Result<CommandOutput, Box<dyn std::error::Error>> {
        let output = crate::utils::cmd_utils::run_command(program, args)?;
        Ok(crate::utils::cmd_utils::capture(&output))
    }
}
