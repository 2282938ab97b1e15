//! Error type for file patching operations

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or write a target file.
///
/// Covers missing paths, permission problems, and files that are not valid
/// UTF-8 text (reading such a file fails with `InvalidData`).
#[derive(Debug, Error)]
#[error("failed to {op} {}", path.display())]
pub struct FileAccessError {
    /// Which operation failed ("read" or "write")
    pub op: &'static str,

    /// The file being accessed
    pub path: PathBuf,

    /// Underlying I/O error
    #[source]
    pub source: io::Error,
}

impl FileAccessError {
    pub(crate) fn new(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_operation_and_path() {
        let err = FileAccessError::new(
            "read",
            Path::new("src/app/globals.css"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        let msg = err.to_string();
        assert!(msg.contains("read"));
        assert!(msg.contains("src/app/globals.css"));
    }
}
