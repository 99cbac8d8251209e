use home::home_dir;
use std::path::{Path, PathBuf};

// A helper function to expand the tilde in a path to the user's home directory.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    if path.starts_with("~") {
        if let Some(home) = home_dir() {
            Ok(home.join(path.strip_prefix("~").unwrap_or(path)))
        } else {
            Err("Home directory could not be determined.".to_string())
        }
    } else {
        Ok(path.to_path_buf())
    }
}

/// clap value parser: a path with a leading `~` expanded
pub fn expand_path(raw: &str) -> Result<PathBuf, String> {
    expand_tilde(Path::new(raw))
}

/// Last element of `path`, ignoring trailing separators.
///
/// Empty input gives `.` and a path made only of separators gives `/`.
#[must_use]
pub fn basename(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches(std::path::is_separator);
    if trimmed.is_empty() {
        return "/".to_string();
    }
    match trimmed.rfind(std::path::is_separator) {
        Some(idx) => trimmed[idx + 1..].to_string(),
        None => trimmed.to_string(),
    }
}
