//! Durable file-backed backend.
//!
//! The whole dataset is serialized and rewritten on every `write` and
//! re-parsed on every `read`. Writes start at offset zero and do **not**
//! truncate: if a write produces fewer bytes than the file already held,
//! the stale tail remains and the next `read` will fail to parse. Callers
//! that shrink their dataset should recreate the file. There is no
//! crash-safety guarantee either; a failure mid-write can leave a corrupt
//! file.

use crate::error::{Error, Result};
use crate::mode::AccessMode;
use crate::persist::touch;
use crate::serializer::{JsonSerializer, Serializer};
use crate::storage::{Dataset, Storage};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Storage backend persisting the dataset as pretty-printed JSON in a
/// single file.
///
/// Use [`open`](Self::open) for a quick start or [`builder`](Self::builder)
/// for control over directory creation and access mode.
pub struct JsonStorage {
    path: PathBuf,
    mode: AccessMode,
    handle: Option<File>,
    serializer: JsonSerializer,
}

impl JsonStorage {
    /// Open (or create) a store at `path` in read-write mode without
    /// creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder(path).build()
    }

    /// Open with a specific access mode. Shorthand for
    /// `builder(path).mode(m).build()`.
    pub fn open_with_mode(path: impl AsRef<Path>, mode: AccessMode) -> Result<Self> {
        Self::builder(path).mode(mode).build()
    }

    /// Start configuring a new store. Call [`.build()`](JsonStorageBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> JsonStorageBuilder {
        JsonStorageBuilder::new(path)
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The access mode this handle was opened with.
    #[must_use]
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    fn file(&mut self) -> Result<&mut File> {
        self.handle
            .as_mut()
            .ok_or_else(|| Error::Io(format!("storage is closed: {}", self.path.display())))
    }
}

impl Storage for JsonStorage {
    /// Size the file by seeking to its end; an empty file means no dataset
    /// has ever been written and yields `None`. Otherwise parse the whole
    /// content from the start.
    fn read(&mut self) -> Result<Option<Dataset>> {
        let file = self.file()?;
        let size = file.seek(SeekFrom::End(0))?;
        if size == 0 {
            return Ok(None);
        }

        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes)?;
        self.serializer.deserialize(&bytes).map(Some)
    }

    /// Serialize `data` with 4-space indentation and write it at offset
    /// zero, then flush. Trailing bytes from a longer previous write are
    /// left in place (see the module docs). The handle is reopened
    /// afterwards so the next `read` starts from a clean cursor.
    fn write(&mut self, data: &Dataset) -> Result<()> {
        let bytes = self.serializer.serialize(data)?;

        let file = self
            .handle
            .as_mut()
            .ok_or_else(|| Error::Io(format!("storage is closed: {}", self.path.display())))?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(&bytes)
            .and_then(|()| file.flush())
            .map_err(|e| Error::Io(format!("could not write {}: {e}", self.path.display())))?;

        self.handle = None;
        self.handle = Some(open_file(&self.path, self.mode)?);
        Ok(())
    }

    fn close(&mut self) {
        self.handle = None;
    }
}

impl std::fmt::Debug for JsonStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonStorage")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("open", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

fn open_file(path: &Path, mode: AccessMode) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .write(mode.is_writable())
        .open(path)
        .map_err(|e| Error::Io(format!("could not open file {}: {e}", path.display())))
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures and opens a [`JsonStorage`].
///
/// ```rust,no_run
/// use docfile::{AccessMode, JsonStorage};
///
/// let db = JsonStorage::builder("state/db.json")
///     .create_dirs(true)
///     .mode(AccessMode::ReadWrite)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct JsonStorageBuilder {
    path: PathBuf,
    create_dirs: bool,
    mode: AccessMode,
}

impl JsonStorageBuilder {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            create_dirs: false,
            mode: AccessMode::default(),
        }
    }

    /// Create the file's parent directory (recursively) when it is missing
    /// (default: off).
    #[must_use]
    pub fn create_dirs(mut self, yes: bool) -> Self {
        self.create_dirs = yes;
        self
    }

    /// Set the access mode (default: [`AccessMode::ReadWrite`]).
    #[must_use]
    pub fn mode(mut self, mode: AccessMode) -> Self {
        self.mode = mode;
        self
    }

    /// Touch the file if the mode calls for writing, then open it.
    ///
    /// Read-only modes skip the touch, so opening a missing file fails
    /// with [`Error::Io`] rather than creating it.
    pub fn build(self) -> Result<JsonStorage> {
        if self.mode.is_writable() {
            touch(&self.path, self.create_dirs)?;
        }

        let handle = open_file(&self.path, self.mode)?;
        Ok(JsonStorage {
            path: self.path,
            mode: self.mode,
            handle: Some(handle),
            serializer: JsonSerializer::pretty(),
        })
    }
}
