//! Settings resolution: CLI flag / environment (handled by clap), then the
//! optional TOML config file, then host defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, ProfileLayout, default_users_root};

/// Contents of an optional `mpvcfg.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub users_root: Option<PathBuf>,
    pub layout: Option<ProfileLayout>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| AppError::at_path(path, err))?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, origin: &Path) -> Result<Self, AppError> {
        toml::from_str(content).map_err(|err| {
            AppError::config_error(format!("Failed to parse {}: {}", origin.display(), err))
        })
    }
}

/// Where profiles live and how their roaming data is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    pub users_root: PathBuf,
    pub layout: ProfileLayout,
}

impl ScaffoldSettings {
    pub fn resolve(
        users_root: Option<PathBuf>,
        layout: Option<ProfileLayout>,
        file: Option<&ConfigFile>,
    ) -> Self {
        let users_root = users_root
            .or_else(|| file.and_then(|file| file.users_root.clone()))
            .unwrap_or_else(default_users_root);
        let layout = layout
            .or_else(|| file.and_then(|file| file.layout))
            .unwrap_or_else(ProfileLayout::for_host);
        Self { users_root, layout }
    }
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}
