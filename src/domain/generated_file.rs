use std::path::PathBuf;

use serde::Serialize;

use super::PathTriple;

/// Directory of the [`PathTriple`] a generated file lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileLocation {
    ConfigDir,
    ScriptsDir,
}

impl FileLocation {
    pub fn label(self) -> &'static str {
        match self {
            FileLocation::ConfigDir => "mpv",
            FileLocation::ScriptsDir => "mpv/scripts",
        }
    }
}

/// Files written by a deployment, in write order.
pub const GENERATED_FILE_LAYOUT: [(&str, FileLocation); 5] = [
    ("mpv.conf", FileLocation::ConfigDir),
    ("input.conf", FileLocation::ConfigDir),
    ("my notes.txt", FileLocation::ConfigDir),
    ("autoload.lua", FileLocation::ScriptsDir),
    ("mpv_chapters.js", FileLocation::ScriptsDir),
];

/// A fixed-content file and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub location: FileLocation,
    pub content: &'static str,
}

impl GeneratedFile {
    pub fn target_path(&self, paths: &PathTriple) -> PathBuf {
        match self.location {
            FileLocation::ConfigDir => paths.config_dir.join(self.name),
            FileLocation::ScriptsDir => paths.scripts_dir.join(self.name),
        }
    }

    /// Path relative to the roaming-data directory, for display.
    pub fn display_path(&self) -> String {
        format!("{}/{}", self.location.label(), self.name)
    }
}
