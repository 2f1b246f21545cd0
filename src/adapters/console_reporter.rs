use std::path::Path;

use crate::domain::GeneratedFile;
use crate::ports::ProgressReporter;

/// Prints one status line per generated file to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn file_written(&self, file: &GeneratedFile, _path: &Path) {
        println!("✅ Created {}", file.name);
    }

    fn file_planned(&self, file: &GeneratedFile, path: &Path) {
        println!("📝 Would write {} -> {}", file.name, path.display());
    }
}
