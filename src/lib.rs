pub mod args;
pub mod artifact;
pub mod errors;
pub mod interfaces;
pub mod start;
pub mod testing {
    pub mod recording_logger;
}
pub mod upload;
pub mod utils {
    pub mod cmd_utils;
    pub mod error_utils;
    pub mod log_utils;
    pub mod path_utils;
}

pub use args::Args;
pub use errors::UploadError;
pub use start::{UploadSummary, run_app, run_with_helpers};
