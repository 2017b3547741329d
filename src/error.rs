//! Error types for hosts file patching.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned while rewriting the hosts file.
#[derive(Debug, Error)]
pub enum HostsError {
    /// The hosts file exists but we are not allowed to read or write it.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other filesystem failure (missing file, disk full, ...).
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HostsError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Returns `true` for [`HostsError::PermissionDenied`].
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
