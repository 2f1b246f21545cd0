use serde::Serialize;

use crate::adapters::assets::payload_assets::{hash_content, load_generated_files};
use crate::domain::{AppError, FileLocation};

/// Catalog entry for one generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFileInfo {
    pub name: String,
    pub location: FileLocation,
    pub display_path: String,
    pub size: usize,
    pub sha256: String,
}

pub fn list() -> Result<Vec<GeneratedFileInfo>, AppError> {
    Ok(load_generated_files()?
        .into_iter()
        .map(|file| GeneratedFileInfo {
            name: file.name.to_string(),
            location: file.location,
            display_path: file.display_path(),
            size: file.content.len(),
            sha256: hash_content(file.content.as_bytes()),
        })
        .collect())
}
