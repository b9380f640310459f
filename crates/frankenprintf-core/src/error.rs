//! Engine error types.
//!
//! The format mini-language itself has no conversion-level errors: malformed
//! directives are absorbed by the state machine's best-effort transitions.
//! What can fail is the sink write and, because C varargs are replaced by
//! an explicit tagged argument list, the argument contract.

use thiserror::Error;

/// Failure reported by a byte sink.
///
/// Bytes accepted before the failure are considered delivered; the engine
/// never retries a write.
#[derive(Debug, Error)]
#[error("sink write failed: {message}")]
pub struct SinkError {
    message: String,
}

impl SinkError {
    /// Create a sink error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors surfaced by the formatting entry points.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The sink rejected a write. Output emitted before the failure stands.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// A directive consumed past the end of the argument list.
    #[error("`%{spec}` directive has no argument (index {index})")]
    MissingArgument { spec: char, index: usize },

    /// A directive's argument carried an incompatible tag.
    #[error("`%{spec}` directive cannot render a {found} argument (index {index})")]
    ArgumentMismatch {
        spec: char,
        found: &'static str,
        index: usize,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_display() {
        let err = SinkError::new("pipe closed");
        assert_eq!(err.to_string(), "sink write failed: pipe closed");
    }

    #[test]
    fn test_sink_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err = SinkError::from(io);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_missing_argument_display() {
        let err = FormatError::MissingArgument {
            spec: 'd',
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            "`%d` directive has no argument (index 2)"
        );
    }

    #[test]
    fn test_argument_mismatch_display() {
        let err = FormatError::ArgumentMismatch {
            spec: 's',
            found: "int",
            index: 0,
        };
        assert_eq!(
            err.to_string(),
            "`%s` directive cannot render a int argument (index 0)"
        );
    }
}
