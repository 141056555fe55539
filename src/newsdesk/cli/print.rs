use chrono::{DateTime, Utc};
use colored::*;
use newsdesk::api::{CmdMessage, MessageLevel};
use newsdesk::model::Article;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_articles(articles: &[Article]) {
    if articles.is_empty() {
        println!("No articles yet.");
        return;
    }

    for (i, article) in articles.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let id_str = format!("{} ", article.id);
        let tag = format!("[{}] ", article.category);

        let fixed_width = idx_str.width() + id_str.width() + tag.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let headline = truncate_to_width(&article.headline, available);
        let padding = available.saturating_sub(headline.width());

        let tag_colored = if i == 0 { tag.red().bold() } else { tag.cyan() };

        println!(
            "{}{}{}{}{}{}",
            idx_str,
            id_str.dimmed(),
            tag_colored,
            headline,
            " ".repeat(padding),
            format_time_ago(article.date).dimmed()
        );
    }
}

/// Fits a headline into `max_width` terminal columns, ending with `…` when cut.
pub(crate) fn truncate_to_width(headline: &str, max_width: usize) -> String {
    if headline.width() <= max_width {
        return headline.to_string();
    }

    // One column is reserved for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut cut: String = headline
        .chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect();
    cut.push('…');
    cut
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
