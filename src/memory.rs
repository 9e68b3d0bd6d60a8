//! Volatile in-process backend.

use crate::error::Result;
use crate::storage::{Dataset, Storage};

/// Storage backend that holds the dataset in memory. No I/O, no failure
/// modes; everything is lost when the handle is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Option<Dataset>,
}

impl MemoryStorage {
    /// A store with no dataset yet; `read` returns `None` until the first
    /// `write`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&mut self) -> Result<Option<Dataset>> {
        Ok(self.data.clone())
    }

    fn write(&mut self, data: &Dataset) -> Result<()> {
        self.data = Some(data.clone());
        Ok(())
    }
}
