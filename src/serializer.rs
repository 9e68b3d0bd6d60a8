//! Serialization layer. Defaults to JSON via serde_json.
//!
//! Implement [`Serializer`] if you need a different format (RON, MessagePack, etc.).

use crate::error::{Error, Result};
use crate::storage::Dataset;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Converts datasets to/from bytes for persistence.
pub trait Serializer: Send + Sync {
    /// Encode a dataset to bytes. Total for any valid in-memory dataset.
    fn serialize(&self, data: &Dataset) -> Result<Vec<u8>>;

    /// Decode bytes back into a dataset. Fails on malformed input or a
    /// document that is not a two-level mapping.
    fn deserialize(&self, bytes: &[u8]) -> Result<Dataset>;
}

/// JSON serializer with optional pretty-printing.
///
/// The pretty variant indents with four spaces (serde_json's stock pretty
/// printer uses two), matching the on-disk format the file backend writes.
#[derive(Clone, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON (single line, no extra whitespace).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed JSON with 4-space indentation.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, data: &Dataset) -> Result<Vec<u8>> {
        if self.pretty {
            let mut buf = Vec::new();
            let fmt = PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
            data.serialize(&mut ser).map_err(Error::from)?;
            Ok(buf)
        } else {
            serde_json::to_vec(data).map_err(Error::from)
        }
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Dataset> {
        serde_json::from_slice(bytes).map_err(Error::from)
    }
}
