use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NewsdeskError, Result};
use crate::model::ArticleDraft;
use crate::store::{ArticleStore, Slot};
use chrono::{DateTime, SubsecRound, Utc};

pub const PUBLISHED_MESSAGE: &str = "✓ Article published successfully!";
pub const STORAGE_FULL_MESSAGE: &str =
    "Storage full! Try removing old articles or use smaller images.";

/// Validates `draft` and appends it to the store as the newest article.
///
/// Validation failures are returned before the store is touched. A full slot
/// is not an error here: the article stays in the session and the result
/// carries a warning.
pub fn run<S: Slot>(
    store: &mut ArticleStore<S>,
    draft: ArticleDraft,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    draft.validate()?;

    let date = now.trunc_subsecs(3);
    let article = draft.into_article(store.next_id(date)?, date);

    let mut result = CmdResult::default();
    match store.append(article.clone()) {
        Ok(()) => {
            tracing::info!(id = article.id, headline = %article.headline, "published article");
            result.add_message(CmdMessage::success(PUBLISHED_MESSAGE));
        }
        Err(NewsdeskError::StorageFull { .. }) => {
            result.add_message(CmdMessage::warning(STORAGE_FULL_MESSAGE));
        }
        Err(e) => return Err(e),
    }

    Ok(result.with_affected_articles(vec![article]))
}
