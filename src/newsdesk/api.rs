//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all newsdesk operations, whatever the UI.
//!
//! The facade:
//! - **Owns the session**: one [`ArticleStore`] per `NewsdeskApi`, opened at
//!   construction and living as long as the facade
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! `NewsdeskApi<S: Slot>` is generic over the durable slot:
//! - Production: `NewsdeskApi<FileSlot>`
//! - Testing: `NewsdeskApi<MemorySlot>`

use crate::commands;
use crate::config::NewsdeskConfig;
use crate::error::Result;
use crate::model::{ArticleDraft, ArticleId};
use crate::store::{ArticleStore, Slot};
use chrono::Utc;

/// The main API facade for newsdesk operations.
pub struct NewsdeskApi<S: Slot> {
    store: ArticleStore<S>,
    paths: commands::NewsdeskPaths,
    config: NewsdeskConfig,
}

impl<S: Slot> NewsdeskApi<S> {
    pub fn new(slot: S, config: NewsdeskConfig, paths: commands::NewsdeskPaths) -> Self {
        let store = ArticleStore::open(slot, config.slot_key.clone());
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn publish(&mut self, draft: ArticleDraft) -> Result<commands::CmdResult> {
        commands::publish::run(&mut self.store, draft, Utc::now())
    }

    pub fn list_articles(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn open_article(&self, id: ArticleId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn homepage(&mut self) -> Result<commands::CmdResult> {
        commands::home::run(&mut self.store)
    }

    pub fn build_site(&mut self) -> Result<commands::CmdResult> {
        commands::site::run(&mut self.store, &self.config.site_title, Utc::now())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &ArticleStore<S> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::publish::{PUBLISHED_MESSAGE, STORAGE_FULL_MESSAGE};
pub use commands::{CmdMessage, CmdResult, MessageLevel, NewsdeskPaths, SitePage};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::fixtures::SlotFixture;
    use crate::store::memory::MemorySlot;
    use std::path::PathBuf;

    fn api(slot: MemorySlot) -> NewsdeskApi<MemorySlot> {
        NewsdeskApi::new(
            slot,
            NewsdeskConfig::default(),
            NewsdeskPaths::new(PathBuf::from("/tmp/newsdesk-api-test")),
        )
    }

    #[test]
    fn new_loads_existing_articles() {
        let api = api(SlotFixture::new().with_articles(2).slot);
        assert_eq!(api.store().len(), 2);
    }

    #[test]
    fn publish_then_homepage_features_new_article() {
        let mut api = api(SlotFixture::new().with_articles(1).slot);
        let draft = ArticleDraft::new("Fresh", "Ann", Category::Breaking, "<p>now</p>");
        api.publish(draft).unwrap();

        let home = api.homepage().unwrap().homepage.unwrap();
        assert!(home.hero_html.contains("<h2>Fresh</h2>"));
        assert!(home.grid_html.contains("Story 1"));
    }

    #[test]
    fn open_article_dispatches_by_id() {
        let api = api(SlotFixture::new().with_articles(2).slot);
        assert!(api.open_article(2).unwrap().fragment.is_some());
        assert!(api.open_article(3).unwrap().fragment.is_none());
    }

    #[test]
    fn build_site_uses_configured_title() {
        let mut api = api(SlotFixture::new().with_articles(1).slot);
        let result = api.build_site().unwrap();
        assert!(result.pages[0]
            .contents
            .contains("<title>Denver News Station 5</title>"));
    }
}
