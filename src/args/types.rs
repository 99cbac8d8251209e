use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use super::validators::validate;
use crate::utils::path_utils::expand_path;

pub const DEFAULT_AWS_BIN: &str = "aws";

#[derive(Parser, Debug, Clone, serde::Serialize)]
#[command(
    name = "s3-upload-publish",
    author,
    version,
    about = "Upload a file or directory to an AWS S3 bucket and record the bucket url as a build artifact",
    long_about = None
)]
pub struct Args {
    /// AWS Access Key ID
    #[arg(long, env = "PLUGIN_AWS_ACCESS_KEY_ID", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub aws_access_key: Option<String>,

    /// AWS Secret Access Key
    #[arg(long, env = "PLUGIN_AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub aws_secret_key: Option<String>,

    /// AWS Default Region
    #[arg(long, env = "PLUGIN_AWS_DEFAULT_REGION", value_name = "REGION")]
    pub aws_default_region: String,

    /// AWS S3 Bucket
    #[arg(long, env = "PLUGIN_AWS_BUCKET", value_name = "BUCKET")]
    pub aws_bucket: String,

    /// File or directory to upload
    #[arg(long, env = "PLUGIN_SOURCE", value_name = "PATH", value_parser = expand_path)]
    pub source: PathBuf,

    /// Prefix inside the bucket to upload under
    #[arg(long = "target-path", env = "PLUGIN_TARGET", value_name = "PREFIX")]
    pub target_path: Option<String>,

    /// Where to write the artifact manifest
    #[arg(long, env = "PLUGIN_ARTIFACT_FILE", value_name = "PATH", value_parser = expand_path)]
    pub artifact_file: PathBuf,

    /// Include file patterns (comma-separated)
    #[arg(long, env = "PLUGIN_INCLUDE", value_name = "PATTERNS")]
    pub include: Option<String>,

    /// Exclude file patterns (comma-separated)
    #[arg(long, env = "PLUGIN_EXCLUDE", value_name = "PATTERNS")]
    pub exclude: Option<String>,

    /// Override the aws executable path
    #[arg(long, env = "PLUGIN_AWS_BIN", value_name = "PATH")]
    pub aws_bin: Option<PathBuf>,

    /// Print the aws commands that would run, without running them or writing the artifact file
    #[arg(long, env = "PLUGIN_DRY_RUN")]
    pub dry_run: bool,

    /// Print extra stuff (use -v -v for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validate the args, without modifying them
    ///
    /// # Errors
    ///
    /// Returns an error if a required value is blank or the source is a glob.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }

    /// The aws executable to invoke, honouring `--aws-bin`
    #[must_use]
    pub fn aws_program(&self) -> OsString {
        self.aws_bin
            .as_ref()
            .map(|p| p.clone().into_os_string())
            .unwrap_or_else(|| OsString::from(DEFAULT_AWS_BIN))
    }

    /// Target prefix, treating an empty value as absent
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target_path
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn include_patterns(&self) -> Vec<String> {
        split_patterns(self.include.as_deref())
    }

    #[must_use]
    pub fn exclude_patterns(&self) -> Vec<String> {
        split_patterns(self.exclude.as_deref())
    }
}

/// Split a comma-separated pattern list, trimming entries and dropping blanks
#[must_use]
pub fn split_patterns(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
