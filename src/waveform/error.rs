//! Error type for waveform rendering

use std::io;

/// Error type for render operations
#[derive(Debug)]
pub enum RenderError {
    /// The requested render mode is not one we know how to draw
    UnknownMode(String),
    /// Writing a line to the output sink failed
    Io(io::Error),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::UnknownMode(mode) => {
                write!(f, "unknown mode {mode:?} (expected \"braille\" or \"ascii\")")
            }
            RenderError::Io(e) => write!(f, "failed to write waveform: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::UnknownMode(_) => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_mode_message() {
        let err = RenderError::UnknownMode("spectrogram".to_string());
        assert!(err.to_string().contains("\"spectrogram\""));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_has_source() {
        let err: RenderError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.source().is_some());
    }
}
