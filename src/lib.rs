//! Minimal pluggable document storage: one [`Storage`] trait, two backends.
//!
//! [`JsonStorage`] persists the whole dataset to a JSON file;
//! [`MemoryStorage`] keeps it in process memory. Pick one, or hold a
//! `Box<dyn Storage>` and decide at runtime.
//!
//! ```rust,no_run
//! use docfile::{Dataset, JsonStorage, Storage};
//!
//! let mut db = JsonStorage::open("db.json").unwrap();
//! let mut data = Dataset::new();
//! data.entry("users".into())
//!     .or_default()
//!     .insert("alice".into(), serde_json::json!({"age": 30}));
//! db.write(&data).unwrap();
//! assert!(db.read().unwrap().is_some());
//! ```
//!
//! **Single-handle, single-thread.** A handle owns a file cursor with no
//! internal locking; share one across threads only behind an external
//! mutex. Separate handles on the same path are not coordinated either;
//! concurrent writers will clobber each other. Use advisory file locking
//! or a real database for multi-process access.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod json;
pub mod memory;
pub mod mode;
pub mod persist;
pub mod serializer;
pub mod storage;

pub use error::{Error, Result};
pub use json::{JsonStorage, JsonStorageBuilder};
pub use memory::MemoryStorage;
pub use mode::AccessMode;
pub use storage::{Dataset, Record, Storage};
