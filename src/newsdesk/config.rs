use crate::error::{NewsdeskError, Result};
use crate::store::fs::validate_key;
use crate::store::{DEFAULT_QUOTA_BYTES, DEFAULT_SLOT_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SITE_TITLE: &str = "Denver News Station 5";

/// Keys accepted by [`NewsdeskConfig::get`] and [`NewsdeskConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["slot-key", "quota-bytes", "site-title"];

/// Configuration for newsdesk, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsdeskConfig {
    /// Name of the slot entry holding the article collection
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Capacity of the slot in bytes, across all entries
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,

    /// Masthead title for generated pages
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

impl Default for NewsdeskConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            quota_bytes: default_quota_bytes(),
            site_title: default_site_title(),
        }
    }
}

impl NewsdeskConfig {
    /// Reads `config.json` from `data_dir`. A data dir without one gets the defaults;
    /// keys missing from the file fall back individually.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        match fs::read_to_string(data_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `config.json`, creating `data_dir` on first use.
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        fs::write(
            data_dir.join(CONFIG_FILENAME),
            serde_json::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot-key" => Some(self.slot_key.clone()),
            "quota-bytes" => Some(self.quota_bytes.to_string()),
            "site-title" => Some(self.site_title.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "slot-key" => {
                let value = value.trim();
                validate_key(value)?;
                self.slot_key = value.to_string();
            }
            "quota-bytes" => {
                self.quota_bytes = value.trim().parse().map_err(|_| {
                    NewsdeskError::Config(format!("quota-bytes must be a number, got {:?}", value))
                })?;
            }
            "site-title" => self.site_title = value.trim().to_string(),
            other => {
                return Err(NewsdeskError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
