//! Plain-text helpers shared by every view: escaping, markup stripping and
//! date formatting.

use chrono::{DateTime, Local, TimeZone, Utc};
use ego_tree::iter::Edge;
use scraper::{Html, Node};
use std::fmt;

/// Marker appended to a truncated excerpt.
pub const ELLIPSIS: &str = "...";

/// Elements whose boundaries separate words when the markup is flattened.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Escapes `&`, `<`, `>` and `"` in a single pass.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Flattens a rich-text fragment to plain text.
///
/// Entities are decoded, script and style contents dropped, and every run of
/// whitespace (including block boundaries) becomes a single space.
pub fn extract_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut raw = String::with_capacity(html.len());

    for edge in fragment.root_element().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Text(text) => {
                    let hidden = node
                        .parent()
                        .and_then(|p| p.value().as_element())
                        .map(|e| matches!(e.name(), "script" | "style"))
                        .unwrap_or(false);
                    if !hidden {
                        raw.push_str(text);
                    }
                }
                Node::Element(el) if BLOCK_ELEMENTS.contains(&el.name()) => raw.push(' '),
                _ => {}
            },
            // Text after a closing block tag starts a new word
            Edge::Close(node) => {
                if let Node::Element(el) = node.value() {
                    if BLOCK_ELEMENTS.contains(&el.name()) {
                        raw.push(' ');
                    }
                }
            }
        }
    }

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain-text preview of `html` capped at `max_len` characters.
///
/// Truncation counts characters, not bytes or words. A truncated excerpt ends
/// with [`ELLIPSIS`]; text that fits is returned untouched.
pub fn extract_excerpt(html: &str, max_len: usize) -> String {
    let text = extract_text(html);
    if text.chars().count() <= max_len {
        return text;
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}{}", cut.trim_end(), ELLIPSIS)
}

/// Byline date, e.g. `Mar 5, 2024 02:30 PM`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format("%b %-d, %Y %I:%M %p").to_string()
}

/// [`format_date`] in the reader's local timezone.
pub fn format_local(date: &DateTime<Utc>) -> String {
    format_date(&date.with_timezone(&Local))
}

/// Masthead date line, e.g. `MONDAY, OCTOBER 19, 2026`.
pub fn format_masthead<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format("%A, %B %-d, %Y").to_string().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_without_double_escaping() {
        assert_eq!(
            escape_html(r#"<b>"Bob" & Sue</b>"#),
            "&lt;b&gt;&quot;Bob&quot; &amp; Sue&lt;/b&gt;"
        );
    }

    #[test]
    fn escaping_existing_entity_escapes_the_ampersand_once() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn escape_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn escape_leaves_single_quotes() {
        assert_eq!(escape_html("it's"), "it's");
    }

    #[test]
    fn excerpt_truncates_at_char_count() {
        let html = "<p>A very long plain body text exceeding limit...</p>";
        assert_eq!(extract_excerpt(html, 10), "A very lon...");
    }

    #[test]
    fn short_excerpt_is_unchanged() {
        assert_eq!(extract_excerpt("<p>short</p>", 10), "short");
    }

    #[test]
    fn excerpt_exactly_at_limit_has_no_ellipsis() {
        assert_eq!(extract_excerpt("<p>0123456789</p>", 10), "0123456789");
        assert_eq!(extract_excerpt("<p>0123456789X</p>", 10), "0123456789...");
    }

    #[test]
    fn excerpt_counts_chars_not_bytes() {
        assert_eq!(extract_excerpt("<p>ñññññ</p>", 3), "ñññ...");
    }

    #[test]
    fn excerpt_trims_trailing_space_before_ellipsis() {
        assert_eq!(extract_excerpt("<p>abcd efgh</p>", 5), "abcd...");
    }

    #[test]
    fn text_separates_blocks_and_decodes_entities() {
        let html = "<p>Fish &amp; chips</p><p>second<br>line</p>";
        assert_eq!(extract_text(html), "Fish & chips second line");
    }

    #[test]
    fn text_after_closing_block_is_a_new_word() {
        assert_eq!(extract_text("<div>first</div>second"), "first second");
        assert_eq!(extract_text("<ul><li>one</li></ul>after"), "one after");
        assert_eq!(extract_excerpt("<p>Hello</p>World and more", 8), "Hello Wo...");
    }

    #[test]
    fn inline_markup_does_not_split_words() {
        assert_eq!(extract_text("<p>bo<b>ld</b>ly</p>"), "boldly");
    }

    #[test]
    fn text_ignores_scripts() {
        assert_eq!(extract_text("<p>hi</p><script>alert(1)</script>"), "hi");
    }

    #[test]
    fn empty_markup_yields_empty_text() {
        assert_eq!(extract_text("<div><br></div>"), "");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn formats_byline_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_date(&date), "Mar 5, 2024 02:30 PM");
    }

    #[test]
    fn formats_masthead() {
        let date = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        assert_eq!(format_masthead(&date), "MONDAY, OCTOBER 19, 2026");
    }
}
