//! Verify command implementation.

use crate::app::api::{self, FileStatus, VerifyOutcome};
use crate::domain::AppError;

use super::GlobalArgs;
use super::prompt::prompt_identifier;

pub(super) fn run_verify(global: &GlobalArgs, json: bool) -> Result<i32, AppError> {
    let settings = global.settings()?;
    let identifier = match &global.user {
        Some(user) => user.clone(),
        None => match prompt_identifier(&settings.users_root)? {
            Some(value) => value,
            None => return Ok(0),
        },
    };

    let report = match api::verify_at(settings.users_root, settings.layout, &identifier)? {
        VerifyOutcome::ProfileNotFound { identifier, users_root } => {
            return Err(AppError::ProfileNotFound { identifier, users_root });
        }
        VerifyOutcome::Checked(report) => report,
    };

    if json {
        let output = serde_json::to_string_pretty(&report).map_err(|err| {
            AppError::config_error(format!("Failed to serialize verify report: {}", err))
        })?;
        println!("{}", output);
    } else {
        for check in &report.files {
            let marker = match check.status {
                FileStatus::Current => "✅",
                FileStatus::Modified => "⚠️ ",
                FileStatus::Missing => "❌",
            };
            println!("{} {:<8} {}", marker, check.status.label(), check.path.display());
        }
        if report.is_current() {
            println!("✅ mpv configuration is up to date");
        } else {
            println!(
                "⚠️  {} modified, {} missing. Run 'mpvcfg deploy' to restore.",
                report.count(FileStatus::Modified),
                report.count(FileStatus::Missing)
            );
        }
    }

    Ok(if report.is_current() { 0 } else { 1 })
}
