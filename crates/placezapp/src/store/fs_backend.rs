use super::backend::StorageBackend;
use crate::error::{PlacezError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

/// File-per-key storage: the value for `key` lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PlacezError::Io)?;
        }
        Ok(())
    }
}

fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(PlacezError::Store(format!("Invalid storage key: {:?}", key)))
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        match fs::read(self.key_path(key)) {
            // Invalid UTF-8 is replaced with U+FFFD and left to the caller's decoder
            Ok(bytes) => Ok(Some(match String::from_utf8(bytes) {
                Ok(content) => content,
                Err(e) => {
                    warn!(key, "stored value is not valid UTF-8");
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlacezError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(PlacezError::Io)?;
        fs::rename(&tmp_file, self.key_path(key)).map_err(PlacezError::Io)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        check_key(key)?;
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PlacezError::Io(e)),
        }
    }
}
