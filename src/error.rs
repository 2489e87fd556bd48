//! Crate-level error types.

use std::fmt;

/// Errors produced by the orbitcam crate.
#[derive(Debug)]
pub enum OrbitCamError {
    /// A view matrix could not be inverted (determinant near zero).
    SingularMatrix {
        /// Determinant of the 4×4 homogeneous extension.
        determinant: f32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrbitCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingularMatrix { determinant } => {
                write!(f, "view matrix is singular (det = {determinant:e})")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrbitCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
