use super::error::PreferenceError;
use log::*;
use std::collections::BTreeMap;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Durable string key-value storage backing the preferences.
///
pub trait Storage: Send {
    /// Return the raw stored value for the key, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store the raw value for the key, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError>;
}

/// Storage kept only in memory.
///
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Return a storage pre-filled with the given raw entries.
    ///
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        MemoryStorage {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Storage persisted as a YAML map in a single file. Every write rewrites the
/// whole file.
///
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage at the given path. A missing file starts empty, and so
    /// does a file that cannot be parsed.
    ///
    pub fn open(path: &Path) -> Result<Self, PreferenceError> {
        let entries = match fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "Ignoring unreadable preferences file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(PreferenceError::ReadFailed {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        Ok(FileStorage {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Return the backing file path.
    ///
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        let content = serde_yaml::to_string(&self.entries)
            .map_err(|e| PreferenceError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| PreferenceError::WriteFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(&self.path).map_err(|e| PreferenceError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| PreferenceError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| PreferenceError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_owned(), value);
        self.flush()
    }
}
