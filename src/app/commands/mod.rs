pub mod deploy;
pub mod files;
pub mod verify;

use std::path::PathBuf;

use crate::domain::{AppError, Identifier, PathTriple, ProfileLayout};
use crate::ports::ProfileFilesystem;

/// Which profile a command targets and how its paths are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTarget {
    pub users_root: PathBuf,
    pub layout: ProfileLayout,
    pub identifier: Identifier,
}

impl ProfileTarget {
    pub fn new(users_root: impl Into<PathBuf>, layout: ProfileLayout, identifier: &str) -> Self {
        Self { users_root: users_root.into(), layout, identifier: Identifier::new(identifier) }
    }
}

/// List the users root once and derive the profile paths when the identifier
/// names one of its entries. `None` means the identifier is unknown.
pub(crate) fn locate_profile(
    filesystem: &impl ProfileFilesystem,
    target: &ProfileTarget,
) -> Result<Option<PathTriple>, AppError> {
    let users = filesystem.list_user_directories(&target.users_root)?;
    if !users.contains(&target.identifier) {
        return Ok(None);
    }
    Ok(Some(PathTriple::derive(&target.users_root, target.layout, &target.identifier)))
}
