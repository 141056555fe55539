use crate::error::{NewsdeskError, ValidationFailure};
use crate::image::ImageData;
use crate::render::text::extract_text;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type ArticleId = u64;

/// A published article as it is kept in the durable slot.
///
/// Field names on the wire follow the slot format shared with the browser
/// version of the site (`bodyHTML`, ISO-8601 `date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub headline: String,
    pub reporter: String,
    pub category: String,
    #[serde(default)]
    pub caption: String,
    #[serde(rename = "bodyHTML")]
    pub body_html: String,
    #[serde(default)]
    pub image: Option<ImageData>,
    pub date: DateTime<Utc>,
}

impl Article {
    /// Alt text for the article image: the caption, or the headline when there is none.
    pub fn image_alt(&self) -> &str {
        if self.caption.is_empty() {
            &self.headline
        } else {
            &self.caption
        }
    }
}

/// Sections an article can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Local,
    Breaking,
    Weather,
    Sports,
    Politics,
    Business,
    Entertainment,
    Community,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Local,
        Category::Breaking,
        Category::Weather,
        Category::Sports,
        Category::Politics,
        Category::Business,
        Category::Entertainment,
        Category::Community,
    ];

    /// The label stored on the article and shown in the category tag.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Local => "LOCAL NEWS",
            Category::Breaking => "BREAKING NEWS",
            Category::Weather => "WEATHER",
            Category::Sports => "SPORTS",
            Category::Politics => "POLITICS",
            Category::Business => "BUSINESS",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Community => "COMMUNITY",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Category::Local => "local",
            Category::Breaking => "breaking",
            Category::Weather => "weather",
            Category::Sports => "sports",
            Category::Politics => "politics",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Community => "community",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = NewsdeskError;

    /// Accepts either the short slug (`sports`) or the full label (`SPORTS`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| NewsdeskError::Config(format!("Unknown category: {}", s)))
    }
}

/// Authoring form input, before it becomes an [`Article`].
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub headline: String,
    pub reporter: String,
    pub category: Category,
    pub caption: String,
    pub body_html: String,
    pub image: Option<ImageData>,
}

impl ArticleDraft {
    pub fn new(
        headline: impl AsRef<str>,
        reporter: impl AsRef<str>,
        category: Category,
        body_html: impl AsRef<str>,
    ) -> Self {
        Self {
            headline: headline.as_ref().trim().to_string(),
            reporter: reporter.as_ref().trim().to_string(),
            category,
            caption: String::new(),
            body_html: body_html.as_ref().trim().to_string(),
            image: None,
        }
    }

    pub fn with_caption(mut self, caption: impl AsRef<str>) -> Self {
        self.caption = caption.as_ref().trim().to_string();
        self
    }

    pub fn with_image(mut self, image: Option<ImageData>) -> Self {
        self.image = image;
        self
    }

    /// Checks the fields in form order and reports the first one missing.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if self.headline.trim().is_empty() {
            return Err(ValidationFailure::MissingHeadline);
        }
        if self.reporter.trim().is_empty() {
            return Err(ValidationFailure::MissingReporter);
        }
        if extract_text(&self.body_html).is_empty() {
            return Err(ValidationFailure::MissingBody);
        }
        Ok(())
    }

    pub fn into_article(self, id: ArticleId, date: DateTime<Utc>) -> Article {
        Article {
            id,
            headline: self.headline,
            reporter: self.reporter,
            category: self.category.label().to_string(),
            caption: self.caption,
            body_html: self.body_html,
            image: self.image,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ArticleDraft {
        ArticleDraft::new("Snow on I-70", "Jane Doe", Category::Weather, "<p>Drive safe.</p>")
    }

    #[test]
    fn draft_trims_fields() {
        let d = ArticleDraft::new("  Title  ", "\tAnn\n", Category::Local, "  <p>x</p> ")
            .with_caption("  a caption ");
        assert_eq!(d.headline, "Title");
        assert_eq!(d.reporter, "Ann");
        assert_eq!(d.body_html, "<p>x</p>");
        assert_eq!(d.caption, "a caption");
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn missing_headline_is_reported_first() {
        let d = ArticleDraft::new("", "", Category::Local, "");
        assert_eq!(d.validate(), Err(ValidationFailure::MissingHeadline));
    }

    #[test]
    fn missing_reporter() {
        let d = ArticleDraft::new("Headline", "   ", Category::Local, "<p>body</p>");
        assert_eq!(d.validate(), Err(ValidationFailure::MissingReporter));
    }

    #[test]
    fn markup_only_body_counts_as_empty() {
        let d = ArticleDraft::new("Headline", "Ann", Category::Local, "<p><br></p><div> </div>");
        assert_eq!(d.validate(), Err(ValidationFailure::MissingBody));
        assert_eq!(
            ValidationFailure::MissingBody.to_string(),
            "Please write the article body."
        );
    }

    #[test]
    fn into_article_uses_category_label() {
        let now = Utc::now();
        let article = draft().into_article(42, now);
        assert_eq!(article.id, 42);
        assert_eq!(article.category, "WEATHER");
        assert_eq!(article.date, now);
        assert!(article.image.is_none());
    }

    #[test]
    fn image_alt_falls_back_to_headline() {
        let mut article = draft().into_article(1, Utc::now());
        assert_eq!(article.image_alt(), "Snow on I-70");
        article.caption = "Plows on the pass".into();
        assert_eq!(article.image_alt(), "Plows on the pass");
    }

    #[test]
    fn category_parses_slug_and_label() {
        assert_eq!("sports".parse::<Category>().unwrap(), Category::Sports);
        assert_eq!("BREAKING NEWS".parse::<Category>().unwrap(), Category::Breaking);
        assert!("gossip".parse::<Category>().is_err());
    }

    #[test]
    fn caption_defaults_when_missing_from_json() {
        let json = r#"{"id":1,"headline":"h","reporter":"r","category":"LOCAL NEWS",
            "bodyHTML":"<p>b</p>","image":null,"date":"2024-03-05T14:30:00.000Z"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.caption, "");
        assert_eq!(article.body_html, "<p>b</p>");
    }
}
