use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::GeneratedFile;
use crate::ports::ProgressReporter;

/// Reporter that records every notification for assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub written: RefCell<Vec<(String, PathBuf)>>,
    pub planned: RefCell<Vec<(String, PathBuf)>>,
}

#[allow(dead_code)]
impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn written_names(&self) -> Vec<String> {
        self.written.borrow().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn planned_names(&self) -> Vec<String> {
        self.planned.borrow().iter().map(|(name, _)| name.clone()).collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn file_written(&self, file: &GeneratedFile, path: &Path) {
        self.written.borrow_mut().push((file.name.to_string(), path.to_path_buf()));
    }

    fn file_planned(&self, file: &GeneratedFile, path: &Path) {
        self.planned.borrow_mut().push((file.name.to_string(), path.to_path_buf()));
    }
}
