use std::path::PathBuf;

use crate::adapters::assets::payload_assets::load_generated_files;
use crate::app::AppContext;
use crate::domain::{AppError, FileLocation, GeneratedFile, PathTriple};
use crate::ports::{ProfileFilesystem, ProgressReporter};

use super::{ProfileTarget, locate_profile};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeployOptions {
    /// Report the planned writes without touching the filesystem.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The identifier is not an entry of the users root. Nothing was touched.
    ProfileNotFound { identifier: String, users_root: PathBuf },
    /// Directories ensured and every file written, in write order.
    Deployed { paths: PathTriple, written: Vec<PathBuf> },
    /// Dry run: the files that would have been written, in write order.
    Planned { paths: PathTriple, planned: Vec<PathBuf> },
}

impl DeployOutcome {
    pub fn paths(&self) -> Option<&PathTriple> {
        match self {
            DeployOutcome::ProfileNotFound { .. } => None,
            DeployOutcome::Deployed { paths, .. } | DeployOutcome::Planned { paths, .. } => {
                Some(paths)
            }
        }
    }

    /// Convert the soft not-found outcome into an error for callers that stop on it.
    pub fn into_result(self) -> Result<Self, AppError> {
        match self {
            DeployOutcome::ProfileNotFound { identifier, users_root } => {
                Err(AppError::ProfileNotFound { identifier, users_root })
            }
            outcome => Ok(outcome),
        }
    }
}

pub fn execute<F, R>(
    ctx: &AppContext<F, R>,
    target: &ProfileTarget,
    options: DeployOptions,
) -> Result<DeployOutcome, AppError>
where
    F: ProfileFilesystem,
    R: ProgressReporter,
{
    let files = load_generated_files()?;

    let Some(paths) = locate_profile(ctx.filesystem(), target)? else {
        return Ok(DeployOutcome::ProfileNotFound {
            identifier: target.identifier.to_string(),
            users_root: target.users_root.clone(),
        });
    };

    if options.dry_run {
        let mut planned = Vec::with_capacity(files.len());
        for file in &files {
            let path = file.target_path(&paths);
            ctx.reporter().file_planned(file, &path);
            planned.push(path);
        }
        return Ok(DeployOutcome::Planned { paths, planned });
    }

    let mut written = Vec::with_capacity(files.len());
    let stages = [
        (&paths.config_dir, FileLocation::ConfigDir),
        (&paths.scripts_dir, FileLocation::ScriptsDir),
    ];
    for (dir, location) in stages {
        ctx.filesystem().ensure_dir(dir)?;
        for file in files.iter().filter(|file| file.location == location) {
            written.push(write_generated_file(ctx, file, &paths)?);
        }
    }

    Ok(DeployOutcome::Deployed { paths, written })
}

fn write_generated_file<F, R>(
    ctx: &AppContext<F, R>,
    file: &GeneratedFile,
    paths: &PathTriple,
) -> Result<PathBuf, AppError>
where
    F: ProfileFilesystem,
    R: ProgressReporter,
{
    let path = file.target_path(paths);
    ctx.filesystem().write_file(&path, file.content)?;
    ctx.reporter().file_written(file, &path);
    Ok(path)
}
