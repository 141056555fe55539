use crate::commands::{CmdMessage, CmdResult, SitePage};
use crate::error::Result;
use crate::render::views::article_href;
use crate::render::{render_article_page, render_page};
use crate::store::{ArticleStore, Slot};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

const STYLESHEET: &str = include_str!("../render/style.css");

/// Renders the whole site: `index.html`, one reader page per article and the stylesheet.
///
/// Nothing is written here; the caller decides where the pages go.
pub fn run<S: Slot>(
    store: &mut ArticleStore<S>,
    site_title: &str,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let articles = store.load();

    let mut pages = vec![
        SitePage {
            path: PathBuf::from("index.html"),
            contents: render_page(articles, site_title, now)?,
        },
        SitePage {
            path: PathBuf::from("style.css"),
            contents: STYLESHEET.to_string(),
        },
    ];
    for article in articles {
        pages.push(SitePage {
            path: PathBuf::from(article_href(article.id)),
            contents: render_article_page(article, site_title)?,
        });
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Rendered {} article page(s)",
        articles.len()
    )));
    Ok(result.with_pages(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::SlotFixture;
    use crate::store::DEFAULT_SLOT_KEY;

    #[test]
    fn one_page_per_article_plus_index_and_css() {
        let mut store = ArticleStore::new(SlotFixture::new().with_articles(2).slot, DEFAULT_SLOT_KEY);
        let result = run(&mut store, "Site", Utc::now()).unwrap();

        let paths: Vec<_> = result.pages.iter().map(|p| p.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("style.css"),
                PathBuf::from("articles/2.html"),
                PathBuf::from("articles/1.html"),
            ]
        );
        assert!(result.pages[0].contents.contains(r#"href="articles/1.html""#));
    }

    #[test]
    fn empty_site_still_has_index() {
        let mut store = ArticleStore::new(SlotFixture::new().slot, DEFAULT_SLOT_KEY);
        let result = run(&mut store, "Site", Utc::now()).unwrap();
        assert_eq!(result.pages.len(), 2);
        assert!(result.pages[0].contents.contains("No articles yet"));
    }
}
