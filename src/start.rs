use std::path::PathBuf;

use crate::args::Args;
use crate::artifact::{File, write_artifact_file};
use crate::errors::UploadError;
use crate::interfaces::{CommandRunner, DefaultCommandRunner};
use crate::upload::{
    ACCESS_KEY_SETTING, SECRET_KEY_SETTING, SourceKind, UploadRequest, build_plan, configure_args,
    configure_credentials, execute_transfer,
};
use crate::utils::cmd_utils::display_command;
use crate::utils::log_utils::{CliUploadLogger, UploadLogger};

/// What a run did, for callers and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub destination: String,
    pub browse_url: String,
    /// `None` on a dry run
    pub artifact_file: Option<PathBuf>,
}

/// Run one upload with the real `aws` executable and the tracing logger.
///
/// # Errors
///
/// See [`run_with_helpers`].
pub fn run_app(args: &Args) -> Result<UploadSummary, UploadError> {
    run_with_helpers(args, &DefaultCommandRunner, &CliUploadLogger)
}

/// Validate, stat the source, configure credentials, copy, then record the
/// artifact. Stops at the first failure; the manifest is only written after a
/// successful copy.
///
/// # Errors
///
/// Returns the first failing step's error.
pub fn run_with_helpers(
    args: &Args,
    runner: &dyn CommandRunner,
    logger: &dyn UploadLogger,
) -> Result<UploadSummary, UploadError> {
    args.validate().map_err(UploadError::InvalidArgs)?;
    if let Ok(json) = serde_json::to_string(args) {
        logger.debug(&format!("Resolved arguments: {json}"));
    }

    let request = UploadRequest::from_args(args);
    let kind = SourceKind::detect(&request.source)?;
    let plan = build_plan(&request, kind);
    let program = args.aws_program();
    logger.info(&format!(
        "Uploading {} ({kind:?}) to {}",
        request.source.display(),
        plan.s3_uri()
    ));

    if args.dry_run {
        for (setting, value) in [
            (ACCESS_KEY_SETTING, &request.access_key),
            (SECRET_KEY_SETTING, &request.secret_key),
        ] {
            if value.is_some() {
                let masked = configure_args(setting, "<hidden>");
                println!("dry-run: {}", display_command(&program, &masked));
            }
        }
        println!("dry-run: {}", display_command(&program, &plan.args));
        println!(
            "dry-run: artifact {} -> {}",
            args.artifact_file.display(),
            plan.browse_url
        );
        return Ok(UploadSummary {
            destination: plan.destination,
            browse_url: plan.browse_url,
            artifact_file: None,
        });
    }

    configure_credentials(runner, &program, &request, logger)?;
    execute_transfer(runner, &program, &plan, logger)?;

    let files = vec![File {
        name: args.artifact_file.to_string_lossy().into_owned(),
        url: plan.browse_url.clone(),
    }];
    write_artifact_file(&files, &args.artifact_file)?;
    logger.info(&format!("Wrote artifact file {}", args.artifact_file.display()));

    Ok(UploadSummary {
        destination: plan.destination,
        browse_url: plan.browse_url,
        artifact_file: Some(args.artifact_file.clone()),
    })
}
