use super::{check_quota, Slot, DEFAULT_QUOTA_BYTES};
use crate::error::{NewsdeskError, Result};
use std::collections::HashMap;

/// In-memory slot for testing and development.
/// Does NOT persist data.
pub struct MemorySlot {
    entries: HashMap<String, String>,
    quota: usize,
    simulate_read_error: bool,
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            quota: DEFAULT_QUOTA_BYTES,
            simulate_read_error: false,
        }
    }
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = quota;
        self
    }

    /// Stores a raw value, bypassing the quota. Used to plant corrupt data.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Enable read error simulation for testing recovery.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    fn used_except(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error {
            return Err(NewsdeskError::Io(std::io::Error::other(
                "Simulated read error",
            )));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        check_quota(self.used_except(key), key, value, self.quota)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn quota(&self) -> usize {
        self.quota
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Article, ArticleDraft, Category};
    use crate::store::DEFAULT_SLOT_KEY;
    use chrono::{Duration, TimeZone, Utc};

    /// A plain local story dated `id` minutes after a fixed base time.
    pub fn article(id: u64, headline: &str) -> Article {
        let base = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        ArticleDraft::new(
            headline,
            "Jane Doe",
            Category::Local,
            format!("<p>Body of {}</p>", headline),
        )
        .into_article(id, base + Duration::minutes(id as i64))
    }

    pub struct SlotFixture {
        pub slot: MemorySlot,
    }

    impl Default for SlotFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SlotFixture {
        pub fn new() -> Self {
            Self {
                slot: MemorySlot::new(),
            }
        }

        /// Stores `count` articles, newest (highest id) first.
        pub fn with_articles(mut self, count: usize) -> Self {
            let articles: Vec<Article> = (1..=count as u64)
                .rev()
                .map(|i| article(i, &format!("Story {}", i)))
                .collect();
            let json = serde_json::to_string(&articles).unwrap();
            self.slot.insert_raw(DEFAULT_SLOT_KEY, &json);
            self
        }

        pub fn with_raw(mut self, value: &str) -> Self {
            self.slot.insert_raw(DEFAULT_SLOT_KEY, value);
            self
        }

        pub fn with_quota(mut self, quota: usize) -> Self {
            self.slot = self.slot.with_quota(quota);
            self
        }
    }
}
