//! The [`Storage`] trait and the dataset shape it moves around.
//!
//! Implement [`Storage`] to bring your own backend.

use crate::error::Result;
use serde_json::Value;
use std::collections::HashMap;

/// One document: string sub-keys mapped to arbitrary JSON values.
pub type Record = HashMap<String, Value>;

/// The full dataset a backend reads and writes: string keys mapped to
/// [`Record`]s. This is the sole unit of transfer; there is no per-key
/// access at the storage layer.
pub type Dataset = HashMap<String, Record>;

/// Contract shared by all storage backends.
///
/// Methods take `&mut self`: a backend owns mutable state (a file cursor,
/// a held snapshot) and is meant for one caller at a time. Wrap a handle
/// in an external mutex if you need to share it across threads.
pub trait Storage {
    /// Return the current dataset, or `None` if nothing has ever been
    /// written (empty file, never-initialized memory). Absence of data is
    /// a normal outcome, not an error.
    fn read(&mut self) -> Result<Option<Dataset>>;

    /// Replace the entire stored dataset with `data`.
    fn write(&mut self, data: &Dataset) -> Result<()>;

    /// Release any held OS resource. Safe to call repeatedly; the default
    /// does nothing, for backends with nothing to release.
    fn close(&mut self) {}
}
