use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Unable to stat source '{}': {source}", path.display())]
    SourceStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to configure aws credentials: {0}")]
    Credentials(String),

    #[error("Error uploading to S3 bucket: {0}")]
    Transfer(String),

    #[error("Failed to write artifact file '{}': {reason}", path.display())]
    Artifact { path: PathBuf, reason: String },
}
