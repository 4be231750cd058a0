// Centralized error handling for marker operations
// Every variant is per-item: it is reported and the run carries on

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error attached to a `Warned` outcome
/// Provides context-rich messages with the path and the failed operation
#[derive(Debug)]
pub enum MarkerError {
    /// Roots handed to the scanner must be absolute
    RelativeRoot { path: PathBuf },

    /// Marker creation was refused
    PermissionDenied { path: PathBuf, operation: String },
    ReadOnlyFilesystem { path: PathBuf },

    /// The directory disappeared between the existence check and the write
    Vanished { path: PathBuf },

    /// Directory traversal errors
    WalkFailed { path: Option<PathBuf>, reason: String },

    IoError { path: PathBuf, operation: String, source: io::Error },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MarkerError::RelativeRoot { path } => {
                writeln!(f, "Root is not an absolute path: {}", path.display())?;
                write!(f, "Suggestion: Use absolute paths (or ~/...) in DEV_ROOTS")
            }
            MarkerError::PermissionDenied { path, operation } => {
                writeln!(f, "Permission denied while {}: {}", operation, path.display())?;
                write!(f, "Suggestion: Check directory ownership or mark it manually")
            }
            MarkerError::ReadOnlyFilesystem { path } => {
                writeln!(f, "Read-only filesystem: {}", path.display())?;
                write!(f, "Suggestion: Mounted or virtualized paths cannot be marked; this is expected")
            }
            MarkerError::Vanished { path } => {
                writeln!(f, "Directory vanished during the run: {}", path.display())?;
                write!(f, "Suggestion: Re-run once the build or cleanup touching it has finished")
            }
            MarkerError::WalkFailed { path, reason } => {
                match path {
                    Some(p) => writeln!(f, "Failed to read directory {}: {}", p.display(), reason)?,
                    None => writeln!(f, "Failed to read directory: {}", reason)?,
                }
                write!(f, "Suggestion: Check directory permissions")
            }
            MarkerError::IoError { path, operation, source } => {
                writeln!(f, "I/O error while {} {}: {}", operation, path.display(), source)?;
                write!(f, "Suggestion: Check permissions and disk space")
            }
        }
    }
}

impl std::error::Error for MarkerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MarkerError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

// EROFS on Linux and macOS
const READ_ONLY_FS_ERRNO: i32 = 30;

impl MarkerError {
    /// Classify an io::Error raised while touching `path`
    pub fn from_io_error(err: io::Error, operation: &str, path: PathBuf) -> Self {
        if err.raw_os_error() == Some(READ_ONLY_FS_ERRNO) {
            return MarkerError::ReadOnlyFilesystem { path };
        }
        match err.kind() {
            io::ErrorKind::NotFound => MarkerError::Vanished { path },
            io::ErrorKind::PermissionDenied => MarkerError::PermissionDenied {
                path,
                operation: operation.to_string(),
            },
            _ => MarkerError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }

    /// First line of the message, without the suggestion
    pub fn summary(&self) -> String {
        self.to_string().lines().next().unwrap_or_default().to_string()
    }
}
