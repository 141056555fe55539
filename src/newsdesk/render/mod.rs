//! # Rendering
//!
//! Pure transforms from articles to HTML. Nothing here touches a store: the
//! caller hands in the collection and gets strings back.
//!
//! - [`text`]: escaping, markup stripping, excerpts and date formatting
//! - [`views`]: hero, card, modal, ticker and homepage composition
//! - [`templates`]: the minijinja templates behind the views

pub mod templates;
pub mod text;
pub mod views;

pub use text::{escape_html, extract_excerpt, extract_text};
pub use views::{
    build_card, build_hero, build_modal, build_ticker, plan_homepage, render_article_page,
    render_homepage, render_page, Homepage, HomepagePlan,
};
