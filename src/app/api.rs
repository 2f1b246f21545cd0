//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::console_reporter::ConsoleReporter;
use crate::adapters::filesystem::HostFilesystem;
use crate::app::AppContext;
use crate::app::commands::{self, ProfileTarget};
use crate::ports::{NoopReporter, ProgressReporter};

pub use crate::app::commands::deploy::{DeployOptions, DeployOutcome};
pub use crate::app::commands::files::GeneratedFileInfo;
pub use crate::app::commands::verify::{FileCheck, FileStatus, VerifyOutcome, VerifyReport};
pub use crate::app::config::{ConfigFile, ScaffoldSettings};
pub use crate::domain::{AppError, PathTriple, ProfileLayout, default_users_root};

fn create_context<R: ProgressReporter>(reporter: R) -> AppContext<HostFilesystem, R> {
    AppContext::new(HostFilesystem::new(), reporter)
}

// =============================================================================
// Deploy Command API
// =============================================================================

/// Deploy the mpv configuration into `users_root/<identifier>`, printing one
/// line per file.
pub fn deploy(
    settings: &ScaffoldSettings,
    identifier: &str,
    options: DeployOptions,
) -> Result<DeployOutcome, AppError> {
    let ctx = create_context(ConsoleReporter);
    let target = ProfileTarget::new(settings.users_root.clone(), settings.layout, identifier);
    commands::deploy::execute(&ctx, &target, options)
}

/// Deploy the mpv configuration without printing anything.
pub fn deploy_at(
    users_root: impl Into<PathBuf>,
    layout: ProfileLayout,
    identifier: &str,
    options: DeployOptions,
) -> Result<DeployOutcome, AppError> {
    let ctx = create_context(NoopReporter);
    let target = ProfileTarget::new(users_root, layout, identifier);
    commands::deploy::execute(&ctx, &target, options)
}

// =============================================================================
// Verify Command API
// =============================================================================

/// Compare the files deployed into `users_root/<identifier>` with the embedded payloads.
pub fn verify_at(
    users_root: impl Into<PathBuf>,
    layout: ProfileLayout,
    identifier: &str,
) -> Result<VerifyOutcome, AppError> {
    let ctx = create_context(NoopReporter);
    let target = ProfileTarget::new(users_root, layout, identifier);
    commands::verify::execute(&ctx, &target)
}

// =============================================================================
// Files Catalog API
// =============================================================================

/// List the files a deployment writes, in write order.
pub fn generated_files() -> Result<Vec<GeneratedFileInfo>, AppError> {
    commands::files::list()
}
