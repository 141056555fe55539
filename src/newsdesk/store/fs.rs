use super::{check_quota, Slot, DEFAULT_QUOTA_BYTES};
use crate::error::{NewsdeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const ENTRY_EXT: &str = "json";

/// File-backed slot: each key is stored as `<root>/<key>.json`.
pub struct FileSlot {
    root: PathBuf,
    quota: usize,
}

impl FileSlot {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            quota: DEFAULT_QUOTA_BYTES,
        }
    }

    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = quota;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, ENTRY_EXT)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NewsdeskError::Io)?;
        }
        Ok(())
    }

    /// Bytes held by every entry other than `key`.
    fn used_except(&self, key: &str) -> Result<usize> {
        if !self.root.exists() {
            return Ok(0);
        }
        let mut used = 0;
        for entry in fs::read_dir(&self.root).map_err(NewsdeskError::Io)? {
            let path = entry.map_err(NewsdeskError::Io)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(ENTRY_EXT) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem == key {
                continue;
            }
            let len = fs::metadata(&path).map_err(NewsdeskError::Io)?.len() as usize;
            used += stem.len() + len;
        }
        Ok(used)
    }
}

/// Slot keys become file names, so only `[A-Za-z0-9_-]` is allowed.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !ok {
        return Err(NewsdeskError::Config(format!("Invalid slot key: {:?}", key)));
    }
    Ok(())
}

impl Slot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(NewsdeskError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        check_quota(self.used_except(key)?, key, value, self.quota)?;
        self.ensure_dir()?;

        // Write to a temp file then rename so a crash never leaves half an entry
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(NewsdeskError::Io)?;
        fs::rename(&tmp, &path).map_err(NewsdeskError::Io)?;
        Ok(())
    }

    fn quota(&self) -> usize {
        self.quota
    }
}
