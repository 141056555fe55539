use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ArticleId;
use crate::render::build_modal;
use crate::store::{ArticleStore, Slot};

/// Renders the reader view for one article.
///
/// An unknown id yields an empty result rather than an error.
pub fn run<S: Slot>(store: &ArticleStore<S>, id: ArticleId) -> Result<CmdResult> {
    let Some(article) = store.find_by_id(id) else {
        tracing::debug!(id, "no article to open");
        return Ok(CmdResult::default());
    };
    let html = build_modal(article)?;
    Ok(CmdResult::default()
        .with_listed_articles(vec![article.clone()])
        .with_fragment(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SlotFixture;
    use crate::store::DEFAULT_SLOT_KEY;

    #[test]
    fn opens_existing_article() {
        let store = ArticleStore::open(SlotFixture::new().with_articles(2).slot, DEFAULT_SLOT_KEY);
        let result = run(&store, 1).unwrap();
        assert_eq!(result.listed_articles[0].id, 1);
        assert!(result.fragment.unwrap().contains("<h2>Story 1</h2>"));
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let store = ArticleStore::open(SlotFixture::new().with_articles(2).slot, DEFAULT_SLOT_KEY);
        let result = run(&store, 404).unwrap();
        assert!(result.fragment.is_none());
        assert!(result.listed_articles.is_empty());
        assert!(result.messages.is_empty());
    }
}
