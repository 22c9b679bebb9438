//! Key/value storage behind the session context, standing in for browser
//! local storage. Values are opaque strings; callers decide the encoding.

use crate::client::AppError;
use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tempfile::NamedTempFile;
use tracing::debug;

pub trait SessionStore: Send + Sync {
    /// # Errors
    /// Returns [`AppError::Storage`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// # Errors
    /// Returns [`AppError::Storage`] if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// # Errors
    /// Returns [`AppError::Storage`] if the removal cannot be persisted.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

fn poisoned() -> AppError {
    AppError::Storage("session store lock poisoned".to_string())
}

/// Process-local store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change. The file carries the
/// session cookie, so it is owner-only and replaced atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens `path`, starting empty when the file does not exist yet.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] if the file exists but cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|err| {
                AppError::Storage(format!("Failed to read {}: {err}", path.display()))
            })?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|err| {
                    AppError::Storage(format!("Failed to decode {}: {err}", path.display()))
                })?
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "opened session store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|err| {
            AppError::Storage(format!("Failed to create {}: {err}", parent.display()))
        })?;
        let raw = serde_json::to_vec_pretty(entries)
            .map_err(|err| AppError::Storage(format!("Failed to encode session: {err}")))?;

        let write_failed = |err: io::Error| {
            AppError::Storage(format!("Failed to write {}: {err}", self.path.display()))
        };
        // same directory, so the final rename never crosses filesystems
        let mut file = NamedTempFile::new_in(parent).map_err(write_failed)?;
        file.write_all(&raw).map_err(write_failed)?;
        restrict_permissions(file.path()).map_err(write_failed)?;
        file.as_file().sync_all().map_err(write_failed)?;
        file.persist(&self.path)
            .map_err(|err| write_failed(err.error))?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileStore, MemoryStore, SessionStore};
    use crate::client::AppError;
    use std::fs;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::default();
        assert_eq!(store.get("user").unwrap(), None);
        store.set("user", "{}").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("{}"));
        store.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set("user", "{\"id\":1}").unwrap();
        store.set("cookies", "access_token=abc").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.path(), path.as_path());
        assert_eq!(reopened.get("user").unwrap().as_deref(), Some("{\"id\":1}"));

        reopened.remove("user").unwrap();
        let again = FileStore::open(&path).unwrap();
        assert_eq!(again.get("user").unwrap(), None);
        assert_eq!(
            again.get("cookies").unwrap().as_deref(),
            Some("access_token=abc")
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileStore::open(&path).unwrap();
        store.set("cookies", "access_token=secret").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn file_store_leaves_no_partial_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set("user", "{}").unwrap();
        store.set("cookies", "access_token=abc").unwrap();
        store.remove("user").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);
        assert!(FileStore::open(&path).is_ok());
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(FileStore::open(&path), Err(AppError::Storage(_))));
    }

    #[test]
    fn file_store_treats_empty_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "\n").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("user").unwrap(), None);
    }
}
