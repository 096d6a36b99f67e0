use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all operations in the `zipshell` crate.
///
/// Every variant is recoverable at the caller boundary: a failing operation
/// leaves the engine state (cursor and archive store) exactly as it was
/// before the call.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The backing archive file does not exist at load time.
    #[error("archive not found: '{}'", .0.display())]
    ArchiveNotFound(PathBuf),

    /// The backing file exists but its bytes are not a valid ZIP archive.
    #[error("corrupt archive: {0}")]
    CorruptArchive(#[source] zip::result::ZipError),

    /// A `cd` target that does not resolve to an existing directory.
    #[error("directory not found: '{0}'")]
    DirectoryNotFound(String),

    /// A `mv` source with no exactly matching archive entry.
    #[error("source not found: '{0}'")]
    SourceNotFound(String),

    /// A recognized command invoked with the wrong number of arguments.
    #[error("invalid arguments for '{0}'")]
    InvalidCommand(String),

    /// Input that is not part of the command vocabulary.
    #[error("command not found: {0}")]
    UnknownCommand(String),

    /// An I/O error occurred, typically while reading or persisting the
    /// backing file. Includes the path where the error happened.
    #[error("I/O error on path '{}': {source}", .path.display())]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

// Generic IO error conversion that doesn't require a path
impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io {
            source: err,
            path: PathBuf::new(),
        }
    }
}

impl From<zip::result::ZipError> for ShellError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => ShellError::from(e),
            other => ShellError::CorruptArchive(other),
        }
    }
}
