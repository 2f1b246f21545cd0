use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mpvcfg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure tied to a specific path.
    #[error("{}: {source}", .path.display())]
    PathIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The identifier could not be read from the operator.
    #[error("Failed to read user name: {0}")]
    Prompt(String),

    /// The identifier does not name a profile directory under the users root.
    #[error(
        "Invalid user profile '{identifier}': check '{}' for your user name",
        .users_root.display()
    )]
    ProfileNotFound { identifier: String, users_root: PathBuf },

    /// An embedded payload is missing from the binary.
    #[error("Missing embedded payload: {0}")]
    MissingPayload(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Attach the path an I/O failure happened at.
    pub fn at_path(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::PathIo { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on failure classes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::PathIo { source: err, .. } => err.kind(),
            AppError::Configuration(_) | AppError::Prompt(_) => io::ErrorKind::InvalidInput,
            AppError::ProfileNotFound { .. } | AppError::MissingPayload(_) => {
                io::ErrorKind::NotFound
            }
        }
    }
}
