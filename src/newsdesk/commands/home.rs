use crate::commands::CmdResult;
use crate::error::Result;
use crate::render::render_homepage;
use crate::store::{ArticleStore, Slot};

/// Reloads the slot and renders the homepage from what is durably stored.
pub fn run<S: Slot>(store: &mut ArticleStore<S>) -> Result<CmdResult> {
    let homepage = render_homepage(store.load())?;
    Ok(CmdResult::default()
        .with_listed_articles(store.articles().to_vec())
        .with_homepage(homepage))
}
