use std::fs;
use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::errors::UploadError;
use crate::utils::path_utils::basename;

/// Everything needed to plan one upload, resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub region: String,
    pub bucket: String,
    pub source: PathBuf,
    pub target: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl UploadRequest {
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        Self {
            access_key: non_blank(args.aws_access_key.as_deref()),
            secret_key: non_blank(args.aws_secret_key.as_deref()),
            region: args.aws_default_region.trim().to_string(),
            bucket: args.aws_bucket.trim().to_string(),
            source: args.source.clone(),
            target: args.target().map(str::to_string),
            include: args.include_patterns(),
            exclude: args.exclude_patterns(),
        }
    }

    /// The source as handed to aws
    #[must_use]
    pub fn source_arg(&self) -> String {
        self.source.to_string_lossy().into_owned()
    }

    /// Final path component of the source; becomes the object or folder name
    #[must_use]
    pub fn source_name(&self) -> String {
        basename(&self.source_arg())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Whether the source is uploaded recursively or as one object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Directory,
    File,
}

impl SourceKind {
    /// Stat `path` once (following symlinks) to decide how to upload it
    ///
    /// # Errors
    ///
    /// Returns `UploadError::SourceStat` if the path cannot be inspected.
    pub fn detect(path: &Path) -> Result<Self, UploadError> {
        let metadata = fs::metadata(path).map_err(|source| UploadError::SourceStat {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.is_dir() {
            Ok(Self::Directory)
        } else {
            Ok(Self::File)
        }
    }
}
