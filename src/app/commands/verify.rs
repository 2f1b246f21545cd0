use std::path::PathBuf;

use serde::Serialize;

use crate::adapters::assets::payload_assets::{hash_content, load_generated_files};
use crate::app::AppContext;
use crate::domain::{AppError, PathTriple};
use crate::ports::{ProfileFilesystem, ProgressReporter};

use super::{ProfileTarget, locate_profile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Bytes on disk equal the embedded payload.
    Current,
    /// A file exists but its bytes differ.
    Modified,
    Missing,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Current => "current",
            FileStatus::Modified => "modified",
            FileStatus::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheck {
    pub name: String,
    pub path: PathBuf,
    pub status: FileStatus,
    pub expected_sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_sha256: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub identifier: String,
    pub paths: PathTriple,
    pub files: Vec<FileCheck>,
}

impl VerifyReport {
    pub fn is_current(&self) -> bool {
        self.files.iter().all(|check| check.status == FileStatus::Current)
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|check| check.status == status).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    ProfileNotFound { identifier: String, users_root: PathBuf },
    Checked(VerifyReport),
}

/// Compare each generated file's target with its embedded payload. Read-only.
pub fn execute<F, R>(
    ctx: &AppContext<F, R>,
    target: &ProfileTarget,
) -> Result<VerifyOutcome, AppError>
where
    F: ProfileFilesystem,
    R: ProgressReporter,
{
    let files = load_generated_files()?;

    let Some(paths) = locate_profile(ctx.filesystem(), target)? else {
        return Ok(VerifyOutcome::ProfileNotFound {
            identifier: target.identifier.to_string(),
            users_root: target.users_root.clone(),
        });
    };

    let mut checks = Vec::with_capacity(files.len());
    for file in &files {
        let path = file.target_path(&paths);
        let expected_sha256 = hash_content(file.content.as_bytes());
        let actual_sha256 =
            ctx.filesystem().read_file(&path)?.map(|bytes| hash_content(&bytes));
        let status = match &actual_sha256 {
            None => FileStatus::Missing,
            Some(actual) if *actual == expected_sha256 => FileStatus::Current,
            Some(_) => FileStatus::Modified,
        };
        checks.push(FileCheck {
            name: file.name.to_string(),
            path,
            status,
            expected_sha256,
            actual_sha256,
        });
    }

    Ok(VerifyOutcome::Checked(VerifyReport {
        identifier: target.identifier.to_string(),
        paths,
        files: checks,
    }))
}
