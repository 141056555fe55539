use super::Slot;
use crate::error::{NewsdeskError, Result};
use crate::model::{Article, ArticleId};
use chrono::{DateTime, Utc};

/// The ordered article collection for one authoring session.
///
/// Articles are kept newest first. The only mutation is [`append`], which
/// inserts at the front and rewrites the whole slot entry.
///
/// [`append`]: ArticleStore::append
pub struct ArticleStore<S: Slot> {
    slot: S,
    key: String,
    articles: Vec<Article>,
}

impl<S: Slot> ArticleStore<S> {
    /// Creates an empty store over `slot`. Nothing is read until [`load`](Self::load).
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
            articles: Vec::new(),
        }
    }

    /// Creates a store and loads the current slot contents.
    pub fn open(slot: S, key: impl Into<String>) -> Self {
        let mut store = Self::new(slot, key);
        store.load();
        store
    }

    /// Replaces the in-memory collection with the slot contents.
    ///
    /// A missing, unreadable or malformed entry loads as an empty collection.
    pub fn load(&mut self) -> &[Article] {
        self.articles = match self.slot.read(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Article>>(&raw) {
                Ok(articles) => articles,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "discarding malformed article slot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "article slot unreadable");
                Vec::new()
            }
        };
        tracing::debug!(count = self.articles.len(), "loaded articles");
        &self.articles
    }

    /// Inserts `article` as the newest entry and persists the collection.
    ///
    /// If persisting fails the article stays in memory.
    pub fn append(&mut self, article: Article) -> Result<()> {
        self.articles.insert(0, article);
        self.persist()
    }

    /// Writes the full collection to the slot.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.articles)?;
        match self.slot.write(&self.key, &json) {
            Ok(()) => {
                tracing::debug!(count = self.articles.len(), bytes = json.len(), "persisted articles");
                Ok(())
            }
            Err(e @ NewsdeskError::StorageFull { .. }) => {
                tracing::warn!(error = %e, "article slot rejected write");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub fn find_by_id(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Identity for an article created at `at`: its millisecond timestamp,
    /// bumped past every id already in the collection.
    ///
    /// Fails only when the collection already holds `u64::MAX`.
    pub fn next_id(&self, at: DateTime<Utc>) -> Result<ArticleId> {
        let stamp = at.timestamp_millis().max(0) as u64;
        match self.articles.iter().map(|a| a.id).max() {
            Some(max) if max >= stamp => max
                .checked_add(1)
                .ok_or(NewsdeskError::IdsExhausted(max)),
            _ => Ok(stamp),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }
}
