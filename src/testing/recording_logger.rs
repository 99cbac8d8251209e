use crate::utils::log_utils::{UploadLogLevel, UploadLogger};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecordingLogger {
    messages: Arc<Mutex<Vec<(UploadLogLevel, String)>>>,
}

impl UploadLogger for RecordingLogger {
    fn log(&self, level: UploadLogLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl RecordingLogger {
    pub fn logs(&self) -> Vec<(UploadLogLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn contains(&self, level: UploadLogLevel, needle: &str) -> bool {
        self.logs()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}
