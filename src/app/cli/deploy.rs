//! Deploy command implementation.

use crate::app::api::{self, DeployOptions, DeployOutcome};
use crate::domain::AppError;

use super::GlobalArgs;
use super::prompt::prompt_identifier;

pub(super) fn run_deploy(global: &GlobalArgs, dry_run: bool) -> Result<(), AppError> {
    let settings = global.settings()?;
    let identifier = match &global.user {
        Some(user) => user.clone(),
        None => match prompt_identifier(&settings.users_root)? {
            Some(value) => value,
            None => return Ok(()),
        },
    };

    // An unknown profile is reported but does not fail the run.
    if let DeployOutcome::ProfileNotFound { identifier, users_root } =
        api::deploy(&settings, &identifier, DeployOptions { dry_run })?
    {
        eprintln!("❌ {}", AppError::ProfileNotFound { identifier, users_root });
    }
    Ok(())
}
