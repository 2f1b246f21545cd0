pub mod assets;
pub mod console_reporter;
pub mod filesystem;
