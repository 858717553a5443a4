//! Error types for the parameter store

use std::io;
use thiserror::Error;

/// Errors that can occur during parameter persistence.
///
/// The text codec itself never fails (invalid input decodes to a zero
/// value), so only the file-backed operations carry an error path.
#[derive(Error, Debug)]
pub enum ParamError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = ParamError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(err.to_string().contains("no such file"));
    }
}
