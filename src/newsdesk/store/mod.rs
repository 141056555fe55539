//! # Storage Layer
//!
//! Articles live in a single **durable slot**: one named key-value entry that
//! holds the whole collection as a JSON array, newest first. The [`Slot`]
//! trait is that key-value surface; [`ArticleStore`] owns the in-memory
//! collection and moves it in and out of a slot.
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: production storage, one `<key>.json` file per entry
//!   under the data directory, replaced atomically on every write.
//! - [`memory::MemorySlot`]: in-memory entries for tests.
//!
//! Both enforce a byte quota over all of their entries, the way a browser
//! origin's local storage does. A write that would exceed it fails with
//! [`NewsdeskError::StorageFull`] and leaves the previous entry untouched.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json
//! └── slots/
//!     └── dns5_articles.json   # [{"id":..,"headline":..,"bodyHTML":..,..}, ..]
//! ```

use crate::error::{NewsdeskError, Result};

pub mod article_store;
pub mod fs;
pub mod memory;

pub use article_store::ArticleStore;

/// Slot key used by the browser edition of the site.
pub const DEFAULT_SLOT_KEY: &str = "dns5_articles";

/// Typical per-origin local storage allowance.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// A durable key-value store with a capacity limit.
pub trait Slot {
    /// Returns the stored value, or `None` if the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Total bytes (keys plus values) the slot accepts.
    fn quota(&self) -> usize;
}

/// Fails with `StorageFull` when writing `key = value` next to `others` bytes
/// of existing entries would exceed `quota`.
pub(crate) fn check_quota(others: usize, key: &str, value: &str, quota: usize) -> Result<()> {
    let needed = others + key.len() + value.len();
    if needed > quota {
        return Err(NewsdeskError::StorageFull { needed, quota });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_counts_key_and_value() {
        assert!(check_quota(0, "ab", "cd", 4).is_ok());
        let err = check_quota(1, "ab", "cd", 4).unwrap_err();
        assert!(matches!(
            err,
            NewsdeskError::StorageFull { needed: 5, quota: 4 }
        ));
    }
}
