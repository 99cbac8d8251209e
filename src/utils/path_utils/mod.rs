mod expansion;

pub use expansion::{basename, expand_path, expand_tilde};
