use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use clap::Parser;
use s3_upload_publish::artifact::Artifact;
use s3_upload_publish::interfaces::{CommandOutput, MockCommandRunner};
use s3_upload_publish::testing::recording_logger::RecordingLogger;
use s3_upload_publish::{Args, UploadError, run_with_helpers};
use tempfile::tempdir;

fn args_for(source: &Path, artifact: &Path, extra: &[&str]) -> Args {
    let source = source.to_string_lossy().into_owned();
    let artifact = artifact.to_string_lossy().into_owned();
    let mut argv = vec![
        "s3-upload-publish",
        "--aws-default-region",
        "us-east-1",
        "--aws-bucket",
        "ci-artifacts",
        "--source",
        source.as_str(),
        "--artifact-file",
        artifact.as_str(),
    ];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

fn is_configure(args: &[String], setting: &str) -> bool {
    args.first().map(String::as_str) == Some("configure") && args[2] == setting
}

fn ok() -> CommandOutput {
    CommandOutput {
        success: true,
        status: Some(0),
        stdout: "done".to_string(),
        stderr: String::new(),
    }
}

#[test]
fn directory_upload_writes_bucket_listing_manifest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let dist = temp.path().join("dist");
    fs::create_dir(&dist)?;
    fs::write(dist.join("app.zip"), b"zip")?;
    let artifact = temp.path().join("out/artifact.json");

    let args = args_for(
        &dist,
        &artifact,
        &[
            "--aws-access-key",
            "AKIA123",
            "--aws-secret-key",
            "s3cr3t",
            "--target-path",
            "builds",
            "--include",
            "*.zip, *.tar",
        ],
    );

    let mut seq = mockall::Sequence::new();
    let mut runner = MockCommandRunner::new();
    runner
        .expect_run()
        .withf(|_, args| is_configure(args, "aws_access_key_id"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(ok()));
    runner
        .expect_run()
        .withf(|_, args| is_configure(args, "aws_secret_access_key"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(ok()));
    runner
        .expect_run()
        .withf(|program, args| {
            program == OsStr::new("aws")
                && args[0] == "s3"
                && args[1] == "cp"
                && args[3] == "s3://ci-artifacts/builds/dist"
                && args[6] == "--recursive"
                && args[7..] == ["--exclude", "*", "--include", "*.zip", "--include", "*.tar"]
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(ok()));

    let logger = RecordingLogger::default();
    let summary = run_with_helpers(&args, &runner, &logger)?;

    assert_eq!(summary.destination, "ci-artifacts/builds/dist");
    assert_eq!(
        summary.browse_url,
        "https://s3.console.aws.amazon.com/s3/buckets/ci-artifacts\
         ?region=us-east-1&prefix=builds/dist/&showversions=false"
    );

    let manifest: Artifact = serde_json::from_str(&fs::read_to_string(&artifact)?)?;
    assert_eq!(manifest.kind, "fileUpload");
    assert_eq!(manifest.data.file_artifacts.len(), 1);
    assert_eq!(manifest.data.file_artifacts[0].name, artifact.to_string_lossy());
    assert_eq!(manifest.data.file_artifacts[0].url, summary.browse_url);
    Ok(())
}

#[test]
fn file_upload_without_target_goes_to_bucket_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file = temp.path().join("report.html");
    fs::write(&file, b"<html/>")?;
    let artifact = temp.path().join("artifact.json");
    let args = args_for(&file, &artifact, &["--exclude", "*.log"]);

    let mut runner = MockCommandRunner::new();
    runner
        .expect_run()
        .withf(|_, args| {
            args[3] == "s3://ci-artifacts/"
                && !args.iter().any(|a| a == "--recursive")
                && args[6..] == ["--exclude", "*.log"]
        })
        .times(1)
        .returning(|_, _| Ok(ok()));

    let summary = run_with_helpers(&args, &runner, &RecordingLogger::default())?;
    assert_eq!(summary.destination, "ci-artifacts/");
    assert!(
        summary
            .browse_url
            .ends_with("/s3/object/ci-artifacts?region=us-east-1&prefix=report.html")
    );
    assert!(artifact.exists());
    Ok(())
}

#[test]
fn glob_source_fails_before_running_anything() {
    let temp = tempdir().expect("tempdir");
    let artifact = temp.path().join("artifact.json");
    let args = args_for(&temp.path().join("*.zip"), &artifact, &[]);

    let mut runner = MockCommandRunner::new();
    runner.expect_run().times(0);

    let err = run_with_helpers(&args, &runner, &RecordingLogger::default())
        .expect_err("glob must be rejected");
    assert!(
        matches!(err, UploadError::InvalidArgs(ref m) if m.contains("Glob pattern not allowed"))
    );
    assert!(!artifact.exists());
}

#[test]
fn missing_source_fails_before_running_anything() {
    let temp = tempdir().expect("tempdir");
    let artifact = temp.path().join("artifact.json");
    let args = args_for(&temp.path().join("missing"), &artifact, &["--aws-access-key", "AKIA123"]);

    let mut runner = MockCommandRunner::new();
    runner.expect_run().times(0);

    let err = run_with_helpers(&args, &runner, &RecordingLogger::default())
        .expect_err("stat must fail");
    assert!(matches!(err, UploadError::SourceStat { .. }));
    assert!(!artifact.exists());
}

#[test]
fn transfer_failure_leaves_no_manifest() {
    let temp = tempdir().expect("tempdir");
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).expect("mkdir");
    let artifact = temp.path().join("artifact.json");
    let args = args_for(&dist, &artifact, &[]);

    let mut runner = MockCommandRunner::new();
    runner.expect_run().times(1).returning(|_, _| {
        Ok(CommandOutput {
            success: false,
            status: Some(1),
            stdout: String::new(),
            stderr: "An error occurred (AccessDenied)".to_string(),
        })
    });

    let err = run_with_helpers(&args, &runner, &RecordingLogger::default())
        .expect_err("transfer must fail");
    assert!(matches!(err, UploadError::Transfer(_)));
    assert!(!artifact.exists(), "manifest must not be written after a failed upload");
}

#[test]
fn credential_failure_stops_before_transfer() {
    let temp = tempdir().expect("tempdir");
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).expect("mkdir");
    let artifact = temp.path().join("artifact.json");
    let args = args_for(&dist, &artifact, &["--aws-access-key", "AKIA123"]);

    let mut runner = MockCommandRunner::new();
    runner
        .expect_run()
        .times(1)
        .returning(|_, _| Err("aws: command not found".into()));

    let err = run_with_helpers(&args, &runner, &RecordingLogger::default())
        .expect_err("credentials must fail");
    assert!(matches!(err, UploadError::Credentials(ref m) if m.contains("command not found")));
    assert!(!artifact.exists());
}

#[test]
fn dry_run_spawns_nothing_and_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let dist = temp.path().join("dist");
    fs::create_dir(&dist)?;
    let artifact = temp.path().join("artifact.json");
    let args = args_for(&dist, &artifact, &["--dry-run", "--aws-access-key", "AKIA123"]);

    let mut runner = MockCommandRunner::new();
    runner.expect_run().times(0);

    let summary = run_with_helpers(&args, &runner, &RecordingLogger::default())?;
    assert_eq!(summary.destination, "ci-artifacts/dist");
    assert_eq!(summary.artifact_file, None);
    assert!(!artifact.exists());
    Ok(())
}

#[test]
fn manifest_write_failure_after_upload_is_fatal() {
    let temp = tempdir().expect("tempdir");
    let dist = temp.path().join("dist");
    fs::create_dir(&dist).expect("mkdir");
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, b"not a directory").expect("write blocker");
    let artifact = blocker.join("artifact.json");
    let args = args_for(&dist, &artifact, &[]);

    let mut runner = MockCommandRunner::new();
    runner.expect_run().times(1).returning(|_, _| Ok(ok()));

    let err = run_with_helpers(&args, &runner, &RecordingLogger::default())
        .expect_err("manifest write must fail");
    match err {
        UploadError::Artifact { path, .. } => assert_eq!(path, artifact),
        other => panic!("expected artifact error, got {other:?}"),
    }
    assert!(blocker.is_file());
}
