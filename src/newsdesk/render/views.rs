//! # Views
//!
//! Article fragments for the homepage and the reader.
//!
//! Every piece of article text is escaped before it reaches a template, with
//! one exception: `body_html` in the modal. The body is rich text written in
//! this tool by its single local author and is trusted as-is.

use super::templates::environment;
use super::text::{escape_html, extract_excerpt, format_local, format_masthead};
use crate::error::Result;
use crate::model::Article;
use chrono::{DateTime, Local, Utc};
use minijinja::context;
use serde::Serialize;

/// Excerpt length for the featured article.
pub const HERO_EXCERPT_LEN: usize = 200;
/// Excerpt length for grid cards.
pub const CARD_EXCERPT_LEN: usize = 120;

pub const EMPTY_HERO_HTML: &str =
    r#"<div class="hero-placeholder"><p>No articles yet. Write your first story!</p></div>"#;

const TICKER_SEPARATOR: &str = " &nbsp;&nbsp;•&nbsp;&nbsp; ";

/// Escaped, pre-formatted article fields handed to the templates.
#[derive(Serialize)]
struct ArticleView {
    id: u64,
    href: String,
    image_src: Option<String>,
    image_alt: String,
    caption: String,
    category: String,
    headline: String,
    reporter: String,
    date: String,
    excerpt: String,
    body_html: String,
}

impl ArticleView {
    fn new(article: &Article, excerpt_len: Option<usize>) -> Self {
        let excerpt = excerpt_len
            .map(|len| escape_html(&extract_excerpt(&article.body_html, len)))
            .unwrap_or_default();
        // The modal is the only view that carries the raw body
        let body_html = if excerpt_len.is_none() {
            article.body_html.clone()
        } else {
            String::new()
        };

        Self {
            id: article.id,
            href: article_href(article.id),
            image_src: article.image.as_ref().map(|i| escape_html(i.as_str())),
            image_alt: escape_html(article.image_alt()),
            caption: escape_html(&article.caption),
            category: escape_html(&article.category),
            headline: escape_html(&article.headline),
            reporter: escape_html(&article.reporter.to_uppercase()),
            date: format_local(&article.date),
            excerpt,
            body_html,
        }
    }
}

/// Relative link from the homepage to an article's reader page.
pub fn article_href(id: u64) -> String {
    format!("articles/{}.html", id)
}

fn render_fragment(name: &str, article: &Article, excerpt_len: Option<usize>) -> Result<String> {
    let view = ArticleView::new(article, excerpt_len);
    let html = environment()?
        .get_template(name)?
        .render(context! { a => view })?;
    Ok(html)
}

/// The featured article block at the top of the homepage.
pub fn build_hero(article: &Article) -> Result<String> {
    render_fragment("hero.html", article, Some(HERO_EXCERPT_LEN))
}

/// A compact grid tile.
pub fn build_card(article: &Article) -> Result<String> {
    render_fragment("card.html", article, Some(CARD_EXCERPT_LEN))
}

/// The full reader view, body included.
pub fn build_modal(article: &Article) -> Result<String> {
    render_fragment("modal.html", article, None)
}

/// Escaped headlines joined for the breaking-news ticker.
pub fn build_ticker(articles: &[Article]) -> Option<String> {
    if articles.is_empty() {
        return None;
    }
    let headlines: Vec<String> = articles.iter().map(|a| escape_html(&a.headline)).collect();
    Some(headlines.join(TICKER_SEPARATOR))
}

/// Which article is featured and which go in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomepagePlan<'a> {
    pub hero: Option<&'a Article>,
    pub cards: &'a [Article],
}

/// Splits a newest-first collection: the first article is the hero, the rest are cards.
pub fn plan_homepage(articles: &[Article]) -> HomepagePlan<'_> {
    match articles.split_first() {
        Some((hero, rest)) => HomepagePlan {
            hero: Some(hero),
            cards: rest,
        },
        None => HomepagePlan {
            hero: None,
            cards: &[],
        },
    }
}

/// Rendered homepage sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Homepage {
    pub hero_html: String,
    pub grid_html: String,
    pub ticker_html: Option<String>,
    pub is_empty: bool,
}

/// Renders the homepage from scratch for the given collection.
pub fn render_homepage(articles: &[Article]) -> Result<Homepage> {
    let plan = plan_homepage(articles);
    let Some(hero) = plan.hero else {
        return Ok(Homepage {
            hero_html: EMPTY_HERO_HTML.to_string(),
            grid_html: String::new(),
            ticker_html: None,
            is_empty: true,
        });
    };

    let cards = plan
        .cards
        .iter()
        .map(build_card)
        .collect::<Result<Vec<_>>>()?;

    Ok(Homepage {
        hero_html: build_hero(hero)?,
        grid_html: cards.join("\n"),
        ticker_html: build_ticker(articles),
        is_empty: false,
    })
}

/// A standalone `index.html` for the collection.
pub fn render_page(
    articles: &[Article],
    site_title: &str,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let home = render_homepage(articles)?;
    let html = environment()?.get_template("page.html")?.render(context! {
        root => "",
        site_title => escape_html(site_title),
        masthead_date => format_masthead(&generated_at.with_timezone(&Local)),
        home => home,
    })?;
    Ok(html)
}

/// A standalone reader page, meant to live one directory below `index.html`.
pub fn render_article_page(article: &Article, site_title: &str) -> Result<String> {
    let modal = build_modal(article)?;
    let html = environment()?
        .get_template("article_page.html")?
        .render(context! {
            root => "../",
            site_title => escape_html(site_title),
            headline => escape_html(&article.headline),
            modal => modal,
        })?;
    Ok(html)
}
