use crate::Result;

use std::{fs, io, path::PathBuf};

use anyhow::Context;

/// Where ledger snapshots are persisted between sessions.
///
/// Reads and writes are synchronous, blocking calls with no cancellation
/// semantics; they either complete or fail immediately.
pub trait StateStore {
    /// Returns the persisted blob, or None when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, blob: &str) -> Result;
}

/// Keeps the whole snapshot as a single JSON blob in one file, the
/// file-system equivalent of a fixed-key record store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        return Self { path };
    }
}

impl StateStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        return match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Couldn't read state file: {:?}", self.path))
            }
        };
    }

    fn write(&self, blob: &str) -> Result {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Couldn't create state directory: {parent:?}"))?;
            }
        }

        fs::write(&self.path, blob)
            .with_context(|| format!("Couldn't write state file: {:?}", self.path))?;

        return Ok(());
    }
}
