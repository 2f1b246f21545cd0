//! Host filesystem adapter for `ProfileFilesystem`.

mod profile_filesystem;

/// `ProfileFilesystem` backed by `std::fs`.
///
/// Stateless: every call receives an absolute path and touches the disk directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFilesystem;

impl HostFilesystem {
    pub fn new() -> Self {
        Self
    }
}
