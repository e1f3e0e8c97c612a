//! Crate-level error types.

use std::fmt;

/// Errors produced by the cinelab crate outside the prompt boundary.
#[derive(Debug)]
pub enum CineError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for CineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
