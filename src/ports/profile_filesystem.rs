//! Filesystem operations a deployment needs from the host.
//!
//! All paths are absolute. The port knows nothing about mpv; the command
//! layer decides which paths to touch.

use std::path::Path;

use crate::domain::{AppError, UserDirectorySet};

/// Port for the host filesystem touched by deploy and verify.
pub trait ProfileFilesystem {
    /// Names of the entries directly under `users_root`.
    fn list_user_directories(&self, users_root: &Path) -> Result<UserDirectorySet, AppError>;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Create or truncate `path` and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a file's bytes, or `None` if nothing exists at `path`.
    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>, AppError>;
}
