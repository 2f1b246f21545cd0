use std::path::Path;

use crate::domain::GeneratedFile;

/// Receives one notification per generated file.
pub trait ProgressReporter {
    /// `file` was written to `path`.
    fn file_written(&self, file: &GeneratedFile, path: &Path);

    /// `file` would be written to `path` (dry run).
    fn file_planned(&self, file: &GeneratedFile, path: &Path);
}

/// Reporter that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn file_written(&self, _file: &GeneratedFile, _path: &Path) {}

    fn file_planned(&self, _file: &GeneratedFile, _path: &Path) {}
}
