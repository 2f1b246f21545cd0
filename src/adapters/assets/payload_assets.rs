//! mpv payloads embedded at compile time.

use include_dir::{Dir, include_dir};
use sha2::{Digest, Sha256};

use crate::domain::{AppError, FileLocation, GENERATED_FILE_LAYOUT, GeneratedFile};

static PAYLOAD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/mpv");

fn asset_path(name: &str, location: FileLocation) -> String {
    match location {
        FileLocation::ConfigDir => name.to_string(),
        FileLocation::ScriptsDir => format!("scripts/{}", name),
    }
}

/// Load the generated files in write order.
pub fn load_generated_files() -> Result<Vec<GeneratedFile>, AppError> {
    GENERATED_FILE_LAYOUT
        .iter()
        .map(|&(name, location)| -> Result<GeneratedFile, AppError> {
            let path = asset_path(name, location);
            let content = PAYLOAD_DIR
                .get_file(&path)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::MissingPayload(path.clone()))?;
            Ok(GeneratedFile { name, location, content })
        })
        .collect()
}

pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
