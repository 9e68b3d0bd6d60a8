//! Unified error type for all storage operations.

/// Things that can go wrong when using a storage backend.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Access mode string is not one of `r`, `r+`, `rb`, `rb+`.
    InvalidMode(String),
    /// File system problem (create, open, write).
    Io(String),
    /// File content is not valid JSON, or not the expected
    /// key -> sub-key -> value shape.
    Parse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMode(mode) => write!(f, "invalid access mode: {mode}"),
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Parse(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
