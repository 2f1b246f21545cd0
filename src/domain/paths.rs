//! Derivation of the mpv configuration paths inside a user profile.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AppError, Identifier};

/// Directory mpv reads its configuration from.
pub const CONFIG_DIR_NAME: &str = "mpv";
/// Directory mpv loads user scripts from, inside [`CONFIG_DIR_NAME`].
pub const SCRIPTS_DIR_NAME: &str = "scripts";

/// Segments between a profile directory and the roaming-data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileLayout {
    /// `<profile>/AppData/Roaming`
    Windows,
    /// `<profile>/.config`
    Xdg,
}

impl ProfileLayout {
    pub const ALL: [ProfileLayout; 2] = [ProfileLayout::Windows, ProfileLayout::Xdg];

    /// Layout of the host this binary was built for.
    pub fn for_host() -> Self {
        if cfg!(windows) { ProfileLayout::Windows } else { ProfileLayout::Xdg }
    }

    pub fn roaming_segments(self) -> &'static [&'static str] {
        match self {
            ProfileLayout::Windows => &["AppData", "Roaming"],
            ProfileLayout::Xdg => &[".config"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProfileLayout::Windows => "windows",
            ProfileLayout::Xdg => "xdg",
        }
    }
}

impl FromStr for ProfileLayout {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileLayout::ALL.into_iter().find(|layout| layout.name() == s).ok_or_else(|| {
            AppError::config_error(format!("Invalid layout '{}': must be one of windows, xdg", s))
        })
    }
}

/// Parent directory of all user profiles on this host.
pub fn default_users_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Users")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Users")
    } else {
        PathBuf::from("/home")
    }
}

/// The three locations a deployment touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathTriple {
    pub base: PathBuf,
    pub config_dir: PathBuf,
    pub scripts_dir: PathBuf,
}

impl PathTriple {
    /// Join fixed segments onto `users_root/identifier`. No I/O and no
    /// rejection of odd identifiers.
    pub fn derive(users_root: &Path, layout: ProfileLayout, identifier: &Identifier) -> Self {
        let base = layout
            .roaming_segments()
            .iter()
            .fold(users_root.join(identifier.as_str()), |path, segment| path.join(segment));
        let config_dir = base.join(CONFIG_DIR_NAME);
        let scripts_dir = config_dir.join(SCRIPTS_DIR_NAME);
        Self { base, config_dir, scripts_dir }
    }
}
