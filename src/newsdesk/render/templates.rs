//! # HTML Templates
//!
//! Fragments are minijinja templates kept as stand-alone files next to this
//! module and compiled in with `include_str!`, so markup can be edited and
//! diffed without touching Rust.
//!
//! Templates receive values that are already escaped (see
//! [`escape_html`](super::text::escape_html)); auto-escaping is off so the
//! article body can pass through untouched. Shared pieces (the byline, the
//! page shell) are nested with `include` and `extends` rather than repeated.

use crate::error::{NewsdeskError, Result};
use minijinja::{AutoEscape, Environment};
use once_cell::sync::OnceCell;

pub const BYLINE: &str = include_str!("templates/byline.html");
pub const HERO: &str = include_str!("templates/hero.html");
pub const CARD: &str = include_str!("templates/card.html");
pub const MODAL: &str = include_str!("templates/modal.html");
pub const BASE: &str = include_str!("templates/base.html");
pub const PAGE: &str = include_str!("templates/page.html");
pub const ARTICLE_PAGE: &str = include_str!("templates/article_page.html");

const ALL: &[(&str, &str)] = &[
    ("byline.html", BYLINE),
    ("hero.html", HERO),
    ("card.html", CARD),
    ("modal.html", MODAL),
    ("base.html", BASE),
    ("page.html", PAGE),
    ("article_page.html", ARTICLE_PAGE),
];

static ENV: OnceCell<Environment<'static>> = OnceCell::new();

/// The shared environment with every built-in template registered.
pub fn environment() -> Result<&'static Environment<'static>> {
    ENV.get_or_try_init(|| {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for &(name, source) in ALL {
            env.add_template(name, source)?;
        }
        Ok::<_, NewsdeskError>(env)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_compile() {
        let env = environment().unwrap();
        for (name, _) in ALL {
            assert!(env.get_template(name).is_ok(), "{} failed to load", name);
        }
    }
}
