use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::UploadError;

/// Manifest kind understood by the CI's artifacts tab
pub const FILE_UPLOAD_KIND: &str = "fileUpload";

/// One uploaded artifact and where to browse it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    #[serde(rename = "fileArtifacts")]
    pub file_artifacts: Vec<File>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub kind: String,
    pub data: Data,
}

impl Artifact {
    #[must_use]
    pub fn file_upload(files: &[File]) -> Self {
        Self {
            kind: FILE_UPLOAD_KIND.to_string(),
            data: Data {
                file_artifacts: files.to_vec(),
            },
        }
    }
}

/// Write `files` to `path` as a `fileUpload` manifest, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns `UploadError::Artifact` if the directory or file cannot be written.
pub fn write_artifact_file(files: &[File], path: &Path) -> Result<(), UploadError> {
    let artifact_err = |reason: String| UploadError::Artifact {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| artifact_err(format!("failed to create {}: {e}", parent.display())))?;
    }

    let json = serde_json::to_string_pretty(&Artifact::file_upload(files))
        .map_err(|e| artifact_err(e.to_string()))?;
    fs::write(path, json).map_err(|e| artifact_err(e.to_string()))?;
    Ok(())
}
