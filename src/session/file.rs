use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufReader, ErrorKind, Write},
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, trace, warn};
use tempfile::NamedTempFile;

use crate::error::StoreError;

use super::SessionStore;

const SESSION_FILE: &str = "session.json";

/// Keys persisted as one JSON object in a file.
///
/// Every call goes to disk, so a value written by another process is seen
/// on the next read.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `session.json` in the platform data directory, or the working
    /// directory when no home directory can be found.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("dev", "quibble", "quibble")
            .map(|dirs| dirs.data_dir().join(SESSION_FILE))
            .unwrap_or_else(|| PathBuf::from(".quibble").join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        trace!("Loading session {}", self.path.display());
        serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::json(&self.path, e))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(StoreError::io(&self.path, e)),
                _ => Ok(()),
            };
        }

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        let data =
            serde_json::to_vec_pretty(entries).map_err(|e| StoreError::json(&self.path, e))?;

        // Renamed into place so readers never see a partial file.
        debug!("Saving session {}", self.path.display());
        let mut file = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        file.write_all(&data)
            .map_err(|e| StoreError::io(file.path(), e))?;
        file.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.load() {
            Err(e @ StoreError::Json { .. }) => {
                warn!("Overwriting unreadable session ({})", e);
                BTreeMap::new()
            }
            entries => entries?,
        };
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e @ StoreError::Json { .. }) => {
                warn!("Deleting unreadable session ({})", e);
                return self.save(&BTreeMap::new());
            }
            Err(e) => return Err(e),
        };
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::quibble::AccessToken,
        session::{Session, TOKEN_KEY},
    };
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut store = FileStore::new(&path);
        store.set(TOKEN_KEY, "abc").unwrap();
        store.set("theme", "dark").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn removing_last_key_deletes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut store = FileStore::new(&path);

        store.set(TOKEN_KEY, "abc").unwrap();
        assert!(path.exists());
        store.remove(TOKEN_KEY).unwrap();
        assert!(!path.exists());
        store.remove(TOKEN_KEY).unwrap();
    }

    #[test]
    fn set_replaces_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"access_tok"#).unwrap();

        let mut store = FileStore::new(&path);
        store.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn remove_deletes_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"access_tok"#).unwrap();

        let mut store = FileStore::new(&path);
        store.remove(TOKEN_KEY).unwrap();
        assert!(!path.exists());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn sign_in_and_out_recover_from_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"access_tok"#).unwrap();

        let mut session = Session::open(FileStore::new(&path));
        assert!(session.token().is_err());
        session
            .sign_in(&AccessToken {
                access_token: "abc".into(),
                token_type: "bearer".into(),
            })
            .unwrap();
        assert!(session.is_signed_in().unwrap());

        fs::write(&path, r#"{"access_tok"#).unwrap();
        session.sign_out().unwrap();
        assert!(!session.is_signed_in().unwrap());
    }

    #[test]
    fn save_leaves_only_the_session_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut store = FileStore::new(&path);
        store.set(TOKEN_KEY, "abc").unwrap();
        store.set(TOKEN_KEY, "def").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, ["session.json"]);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get(TOKEN_KEY),
            Err(StoreError::Json { .. })
        ));
    }
}
