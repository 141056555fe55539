use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{ArticleStore, Slot};

/// Reloads the slot and lists every article, newest first.
pub fn run<S: Slot>(store: &mut ArticleStore<S>) -> Result<CmdResult> {
    let articles = store.load().to_vec();
    Ok(CmdResult::default().with_listed_articles(articles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SlotFixture;
    use crate::store::DEFAULT_SLOT_KEY;

    #[test]
    fn lists_newest_first() {
        let mut store = ArticleStore::new(SlotFixture::new().with_articles(3).slot, DEFAULT_SLOT_KEY);
        let result = run(&mut store).unwrap();
        let ids: Vec<_> = result.listed_articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn corrupt_slot_lists_nothing() {
        let mut store = ArticleStore::new(SlotFixture::new().with_raw("][").slot, DEFAULT_SLOT_KEY);
        let result = run(&mut store).unwrap();
        assert!(result.listed_articles.is_empty());
        assert!(result.messages.is_empty());
    }
}
