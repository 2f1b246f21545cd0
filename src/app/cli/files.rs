//! Files command implementation.

use crate::app::api;
use crate::domain::AppError;

pub(super) fn run_files(json: bool) -> Result<(), AppError> {
    let files = api::generated_files()?;

    if json {
        let output = serde_json::to_string_pretty(&files).map_err(|err| {
            AppError::config_error(format!("Failed to serialize file catalog: {}", err))
        })?;
        println!("{}", output);
        return Ok(());
    }

    for (i, file) in files.iter().enumerate() {
        let digest = &file.sha256[..12];
        println!("  {}. {:<28} {:>6} bytes  {}", i + 1, file.display_path, file.size, digest);
    }
    Ok(())
}
