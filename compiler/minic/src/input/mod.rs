//! Reading source files.

use std::io;
use std::path::Path;

use mini_diagnostic::{Diagnostic, ErrorCode};

/// Why a source file could not be read.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl DriverError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Io { path, source: err },
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001).with_message(self.to_string())
    }
}

/// Read a whole source file. Never falls back to empty source.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, DriverError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|err| DriverError::from_io(path, err))
}
