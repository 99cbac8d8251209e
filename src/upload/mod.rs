//! Upload a local path to S3 by delegating to the `aws` CLI.
//!
//! Planning (`plan`) is pure; this module owns the two process invocations:
//! storing credentials with `aws configure set` and running `aws s3 cp`.

pub mod plan;
pub mod request;

pub use plan::{UploadPlan, build_plan};
pub use request::{SourceKind, UploadRequest};

use std::ffi::OsStr;

use crate::errors::UploadError;
use crate::interfaces::{CommandOutput, CommandRunner};
use crate::utils::cmd_utils::display_command;
use crate::utils::log_utils::UploadLogger;

pub const ACCESS_KEY_SETTING: &str = "aws_access_key_id";
pub const SECRET_KEY_SETTING: &str = "aws_secret_access_key";

/// Arguments for `aws configure set <setting> <value>`
#[must_use]
pub fn configure_args(setting: &str, value: &str) -> Vec<String> {
    vec![
        "configure".to_string(),
        "set".to_string(),
        setting.to_string(),
        value.to_string(),
    ]
}

/// Store the access key and secret in the aws CLI's credential file.
///
/// A missing key is skipped so aws falls back to its own credential chain.
///
/// # Errors
///
/// Returns `UploadError::Credentials` if either `aws configure set` call
/// cannot be spawned or exits non-zero.
pub fn configure_credentials(
    runner: &dyn CommandRunner,
    program: &OsStr,
    request: &UploadRequest,
    logger: &dyn UploadLogger,
) -> Result<(), UploadError> {
    let settings = [
        (ACCESS_KEY_SETTING, request.access_key.as_deref()),
        (SECRET_KEY_SETTING, request.secret_key.as_deref()),
    ];

    for (setting, value) in settings {
        let Some(value) = value else {
            logger.info(&format!(
                "{setting} not supplied, leaving aws credential configuration untouched"
            ));
            continue;
        };

        logger.debug(&format!("Running aws configure set {setting}"));
        let output = runner
            .run(program, &configure_args(setting, value))
            .map_err(|e| UploadError::Credentials(format!("{setting}: {e}")))?;

        if !output.success {
            return Err(UploadError::Credentials(format!(
                "{setting}: aws configure exited with {}: {}",
                describe_status(&output),
                output.combined().trim()
            )));
        }
    }

    Ok(())
}

/// Run the planned `aws s3 cp`, printing what it wrote.
///
/// # Errors
///
/// Returns `UploadError::Transfer` if the copy cannot be spawned or exits
/// non-zero. The captured output is printed before returning.
pub fn execute_transfer(
    runner: &dyn CommandRunner,
    program: &OsStr,
    plan: &UploadPlan,
    logger: &dyn UploadLogger,
) -> Result<CommandOutput, UploadError> {
    logger.info(&format!("Executing: {}", display_command(program, &plan.args)));

    let output = match runner.run(program, &plan.args) {
        Ok(output) => output,
        Err(e) => {
            println!("Error uploading to S3 bucket {e}");
            return Err(UploadError::Transfer(e.to_string()));
        }
    };

    if !output.success {
        let reason = format!("aws exited with {}", describe_status(&output));
        println!("{}", output.combined());
        println!("Error uploading to S3 bucket {reason}");
        return Err(UploadError::Transfer(reason));
    }

    println!("Output: {}", output.combined());
    logger.info(&format!("Uploaded to {}", plan.s3_uri()));
    Ok(output)
}

fn describe_status(output: &CommandOutput) -> String {
    match output.status {
        Some(code) => format!("status {code}"),
        None => "no exit status (terminated by signal)".to_string(),
    }
}
