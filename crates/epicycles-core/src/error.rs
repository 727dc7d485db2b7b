//! Error handling for Epicycles
//!
//! Provides the error types for both halves of the pipeline:
//! - Path errors (command parsing and operand tokenizing)
//! - Series errors (coefficient computation over sample sets)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path error type
///
/// Represents errors raised while turning a path command string into samples.
/// Any of these aborts the whole sampling pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Character that is neither a supported command nor operand syntax
    #[error("Unsupported path command '{command}' at position {position}")]
    UnsupportedCommand {
        /// The offending character.
        command: char,
        /// Character index within the path string.
        position: usize,
    },

    /// Operand buffer that does not parse as a number
    #[error("Invalid number '{token}' after position {position}")]
    InvalidNumber {
        /// The buffered text that failed to parse.
        token: String,
        /// Character index of the command owning the operand.
        position: usize,
    },

    /// Command without enough operands to form its coordinates
    #[error("Missing operands for '{command}' at position {position}")]
    MissingOperands {
        /// The command letter.
        command: char,
        /// Character index of the command.
        position: usize,
    },

    /// SVG document without a usable `<path d="...">`
    #[error("No path element with path data found")]
    NoPathElement,
}

/// Series error type
///
/// Represents errors related to building a Fourier series from samples.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// No samples to integrate over
    #[error("Cannot build a series from zero samples")]
    EmptyInput,

    /// X and Y sample sequences differ in length
    #[error("Sample length mismatch: {x_len} x samples, {y_len} y samples")]
    MismatchedSamples {
        /// Number of x samples.
        x_len: usize,
        /// Number of y samples.
        y_len: usize,
    },
}

/// Main error type for Epicycles
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Path error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Series error
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a path error
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this is a series error
    pub fn is_series_error(&self) -> bool {
        matches!(self, Error::Series(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_display() {
        let err = PathError::UnsupportedCommand {
            command: 'A',
            position: 7,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported path command 'A' at position 7"
        );

        let err = PathError::MissingOperands {
            command: 'H',
            position: 0,
        };
        assert_eq!(err.to_string(), "Missing operands for 'H' at position 0");
    }

    #[test]
    fn test_series_error_display() {
        assert_eq!(
            SeriesError::EmptyInput.to_string(),
            "Cannot build a series from zero samples"
        );
        let err = SeriesError::MismatchedSamples { x_len: 3, y_len: 2 };
        assert_eq!(
            err.to_string(),
            "Sample length mismatch: 3 x samples, 2 y samples"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = PathError::NoPathElement.into();
        assert!(err.is_path_error());
        assert!(!err.is_series_error());

        let err: Error = SeriesError::EmptyInput.into();
        assert!(err.is_series_error());
        // transparent keeps the inner message
        assert_eq!(err.to_string(), "Cannot build a series from zero samples");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.svg");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(Error::other("boom").to_string(), "boom");
    }
}
