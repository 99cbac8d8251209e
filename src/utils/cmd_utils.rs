use std::error::Error;
use std::ffi::OsStr;
use std::process::{Command, Output};

use crate::interfaces::CommandOutput;
use crate::utils::error_utils;

/// Execute a command and return its output as a Result
pub fn run_command(program: &OsStr, args: &[String]) -> Result<Output, Box<dyn Error>> {
    Command::new(program).args(args).output().map_err(|e| {
        error_utils::into_boxed_error(
            e,
            &format!("Failed to execute '{}'", program.to_string_lossy()),
        )
    })
}

/// Convert a finished process into the runner's captured form
#[must_use]
pub fn capture(output: &Output) -> CommandOutput {
    CommandOutput {
        success: output.status.success(),
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Render a program and its arguments as one printable line
pub fn display_command(program: &OsStr, args: &[String]) -> String {
    let mut line = program.to_string_lossy().into_owned();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('*') {
            line.push('\'');
            line.push_str(arg);
            line.push('\'');
        } else {
            line.push_str(arg);
        }
    }
    line
}
