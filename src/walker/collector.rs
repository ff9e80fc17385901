use std::sync::{Mutex, PoisonError};

/// Thread-safe accumulator for file names reported by a walk.
///
/// The lock is held for a single push. Names come back in push order.
#[derive(Debug, Default)]
pub struct FileNameCollector {
    names: Mutex<Vec<String>>,
}

impl FileNameCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, name: &str) {
        self.names
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name.to_string());
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
