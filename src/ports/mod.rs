mod profile_filesystem;
mod progress_reporter;

pub use profile_filesystem::ProfileFilesystem;
pub use progress_reporter::{NoopReporter, ProgressReporter};
