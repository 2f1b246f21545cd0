//! `ProfileFilesystem` implementation for `HostFilesystem`.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, UserDirectorySet};
use crate::ports::ProfileFilesystem;

use super::HostFilesystem;

impl ProfileFilesystem for HostFilesystem {
    fn list_user_directories(&self, users_root: &Path) -> Result<UserDirectorySet, AppError> {
        let entries = fs::read_dir(users_root).map_err(|err| AppError::at_path(users_root, err))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| AppError::at_path(users_root, err))?;
            // Non-UTF-8 names cannot equal an identifier; skip them.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names.into_iter().collect())
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(|err| AppError::at_path(path, err))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|err| AppError::at_path(path, err))
    }

    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>, AppError> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::at_path(path, err)),
        }
    }
}
