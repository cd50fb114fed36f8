//! Directory-backed `MatchStore`: one `<key>.json` file per key.
//!
//! The directory is held under an exclusive OS lock (`.scorekeeper.lock`)
//! for the lifetime of the store, so only one process owns the match at a
//! time. Writes go to a temporary file that is renamed into place.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use tracing::debug;

use crate::error::AppError;
use crate::repos::matches::{validate_key, MatchStore};

const LOCK_FILE: &str = ".scorekeeper.lock";

#[derive(Debug)]
pub struct FileMatchStore {
    dir: PathBuf,
    // Released when the store is dropped.
    _lock: File,
}

impl FileMatchStore {
    /// Open (creating if needed) `dir` and take its lock.
    ///
    /// Fails with `AppError::Storage` if another store already holds it.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::storage(format!(
                "failed to create state directory {}: {e}",
                dir.display()
            ))
        })?;

        let lock_path = dir.join(LOCK_FILE);
        let lock = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| AppError::storage(format!("failed to open lock file: {e}")))?;

        // fs4 returns Ok(false) when another handle holds the lock.
        match lock.try_lock_exclusive() {
            Ok(true) => {}
            Ok(false) => {
                return Err(AppError::storage(format!(
                    "state directory {} is in use by another scorekeeper",
                    dir.display()
                )));
            }
            Err(e) if e.kind() == ErrorKind::WouldBlock => {
                return Err(AppError::storage(format!(
                    "state directory {} is in use by another scorekeeper",
                    dir.display()
                )));
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "failed to lock state directory: {e}"
                )));
            }
        }

        debug!(dir = %dir.display(), "state directory locked");
        Ok(Self { dir, _lock: lock })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds `key`'s payload.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl MatchStore for FileMatchStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        let write = || -> std::io::Result<()> {
            let mut file = File::create(&tmp)?;
            file.write_all(payload.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp, &path)
        };
        write().map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AppError::storage(format!("failed to write {}: {e}", path.display()))
        })?;

        debug!(key, bytes = payload.len(), "snapshot written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "snapshot deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}
