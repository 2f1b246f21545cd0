pub mod error;
pub mod generated_file;
pub mod identifier;
pub mod paths;

pub use error::AppError;
pub use generated_file::{FileLocation, GENERATED_FILE_LAYOUT, GeneratedFile};
pub use identifier::{Identifier, UserDirectorySet};
pub use paths::{
    CONFIG_DIR_NAME, PathTriple, ProfileLayout, SCRIPTS_DIR_NAME, default_users_root,
};
