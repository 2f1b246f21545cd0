//! mpvcfg: deploy a fixed mpv configuration into an existing user profile.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    AppError, ConfigFile, DeployOptions, DeployOutcome, FileCheck, FileStatus, GeneratedFileInfo,
    PathTriple, ProfileLayout, ScaffoldSettings, VerifyOutcome, VerifyReport, default_users_root,
    deploy, deploy_at, generated_files, verify_at,
};
