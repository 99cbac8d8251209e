use super::types::Args;

/// Characters that would make `source` a glob rather than a path
const GLOB_CHARS: &[char] = &['*'];

/// Validate the args before anything touches the filesystem or spawns aws
///
/// # Errors
///
/// Returns an error if the source contains a glob pattern or a required
/// value is blank.
pub fn validate(args: &Args) -> Result<(), String> {
    check_no_glob(&args.source.to_string_lossy())?;
    if args.source.as_os_str().is_empty() {
        return Err("--source must not be empty".to_string());
    }
    if args.aws_bucket.trim().is_empty() {
        return Err("--aws-bucket must not be empty".to_string());
    }
    if args.aws_default_region.trim().is_empty() {
        return Err("--aws-default-region must not be empty".to_string());
    }
    if args.artifact_file.as_os_str().is_empty() {
        return Err("--artifact-file must not be empty".to_string());
    }
    Ok(())
}

/// Reject glob patterns in the source path
///
/// # Errors
///
/// Returns an error if `source` contains a wildcard.
pub fn check_no_glob(source: &str) -> Result<(), String> {
    if source.contains(GLOB_CHARS) {
        return Err("Glob pattern not allowed!".to_string());
    }
    Ok(())
}
