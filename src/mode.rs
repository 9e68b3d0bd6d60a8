//! File access modes for the JSON backend.

use crate::error::Error;
use std::str::FromStr;

/// How the backing file is opened. Fixed at construction for the lifetime
/// of the handle.
///
/// The four variants mirror the classic stdio mode strings `r`, `r+`,
/// `rb`, `rb+`. Rust performs no newline translation on any platform, so
/// the binary variants open with the same flags as their text
/// counterparts; the distinction is kept for mode-string fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    /// Read-only, text (`"r"`).
    Read,
    /// Read and write, text (`"r+"`).
    #[default]
    ReadWrite,
    /// Read-only, binary (`"rb"`).
    ReadBinary,
    /// Read and write, binary (`"rb+"`).
    ReadWriteBinary,
}

impl AccessMode {
    /// The stdio-style mode string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AccessMode::Read => "r",
            AccessMode::ReadWrite => "r+",
            AccessMode::ReadBinary => "rb",
            AccessMode::ReadWriteBinary => "rb+",
        }
    }

    /// `true` if the mode allows writing to the file.
    #[must_use]
    pub fn is_writable(self) -> bool {
        matches!(self, AccessMode::ReadWrite | AccessMode::ReadWriteBinary)
    }

    /// `true` for the binary-transfer variants.
    #[must_use]
    pub fn is_binary(self) -> bool {
        matches!(self, AccessMode::ReadBinary | AccessMode::ReadWriteBinary)
    }
}

impl FromStr for AccessMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(AccessMode::Read),
            "r+" => Ok(AccessMode::ReadWrite),
            "rb" => Ok(AccessMode::ReadBinary),
            "rb+" => Ok(AccessMode::ReadWriteBinary),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
