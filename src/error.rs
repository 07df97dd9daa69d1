//! Error handling for the logger

use std::fmt;
use std::io;

/// Custom error type
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// IO error with message (open, append or stream write failed)
    Io(String),
    /// File output selected but no log file path configured
    MissingLogFile,
    /// Bad command line usage
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "IO error: {}", msg),
            Error::MissingLogFile => write!(f, "IO error: no log file configured"),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl Error {
    /// Whether this error came from writing a log line
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::MissingLogFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = Error::Io("test error".to_string());
        assert_eq!(err.to_string(), "IO error: test error");
    }

    #[test]
    fn test_error_display_missing_log_file() {
        assert_eq!(
            Error::MissingLogFile.to_string(),
            "IO error: no log file configured"
        );
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let err = Error::InvalidArgument("--bogus".to_string());
        assert_eq!(err.to_string(), "Invalid argument: --bogus");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::from(io_err);
        assert_eq!(err, Error::Io("access denied".to_string()));
        assert!(err.is_io());
    }

    #[test]
    fn test_missing_log_file_is_io() {
        assert!(Error::MissingLogFile.is_io());
        assert!(!Error::InvalidArgument("x".to_string()).is_io());
    }
}
